// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand evaluation.
use crate::{Card, HandRank, HandValue, Kickers, Rank};

/// The features of a 5 cards hand used to find its category.
struct Features {
    flush: bool,
    /// The straight high card, a Five for the wheel.
    straight: Option<Rank>,
    /// Number of cards for each rank indexed by rank.
    counts: [u8; Rank::COUNT],
    /// The non zero counts sorted in descending order.
    shape: [u8; 5],
}

impl Features {
    fn new(cards: &[Card; 5]) -> Self {
        let suit = cards[0].suit();
        let flush = cards.iter().all(|c| c.suit() == suit);

        let mut counts = [0u8; Rank::COUNT];
        for card in cards {
            counts[card.rank().index()] += 1;
        }

        let mut shape = [0u8; 5];
        for (slot, &count) in shape.iter_mut().zip(counts.iter().filter(|&&c| c > 0)) {
            *slot = count;
        }
        shape.sort_unstable_by(|a, b| b.cmp(a));

        Self {
            flush,
            straight: straight_high(cards),
            counts,
            shape,
        }
    }

    /// Checks the counts shape, the pattern omits the trailing zeros.
    fn has_shape(&self, pattern: &[u8]) -> bool {
        let len = self.shape.iter().take_while(|&&c| c > 0).count();
        &self.shape[..len] == pattern
    }

    fn straight_flush(&self) -> Option<HandValue> {
        let high = self.straight.filter(|_| self.flush)?;
        let rank = if high == Rank::Ace {
            HandRank::RoyalFlush
        } else {
            HandRank::StraightFlush
        };

        Some(HandValue::new(rank, Kickers::single(high)))
    }

    fn flush(&self) -> Option<HandValue> {
        self.flush
            .then(|| HandValue::new(HandRank::Flush, self.kickers(&[])))
    }

    fn straight(&self) -> Option<HandValue> {
        self.straight
            .map(|high| HandValue::new(HandRank::Straight, Kickers::single(high)))
    }

    /// Matches a multiplicity category, the groups with more than one card in the
    /// pattern are the ranks that define the hand.
    fn groups(&self, pattern: &[u8], rank: HandRank) -> Option<HandValue> {
        if !self.has_shape(pattern) {
            return None;
        }

        let mut defining = [0u8; 5];
        let mut len = 0;
        for &count in pattern.iter().filter(|&&c| c > 1) {
            if len == 0 || defining[len - 1] != count {
                defining[len] = count;
                len += 1;
            }
        }

        Some(HandValue::new(rank, self.kickers(&defining[..len])))
    }

    fn high_card(&self) -> HandValue {
        HandValue::new(HandRank::HighCard, self.kickers(&[]))
    }

    /// Builds the kickers with one rank for each group with a defining count,
    /// walking counts in the given order and ranks from Ace to Two, followed by
    /// all the other ranks from Ace to Two repeated for each card.
    fn kickers(&self, defining: &[u8]) -> Kickers {
        let mut kickers = Kickers::default();
        let mut used = [false; Rank::COUNT];

        for &count in defining {
            for rank in Rank::ranks().rev() {
                let idx = rank.index();
                if self.counts[idx] == count && !used[idx] {
                    kickers.push(rank);
                    used[idx] = true;
                }
            }
        }

        for rank in Rank::ranks().rev() {
            let idx = rank.index();
            if !used[idx] {
                for _ in 0..self.counts[idx] {
                    kickers.push(rank);
                }
            }
        }

        kickers
    }
}

/// Returns the straight high rank if the cards make a straight.
fn straight_high(cards: &[Card; 5]) -> Option<Rank> {
    let mut ranks = cards.map(|c| c.rank());
    ranks.sort_unstable();

    if ranks.windows(2).all(|w| w[1].index() == w[0].index() + 1) {
        return Some(ranks[4]);
    }

    // The ace plays low only in the wheel.
    let wheel = [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace];
    (ranks == wheel).then_some(Rank::Five)
}

impl HandValue {
    /// Evaluates a 5 cards hand.
    ///
    /// The categories are checked from the strongest to the weakest so that a
    /// straight flush is never reported as a flush or a straight.
    pub fn eval5(cards: &[Card; 5]) -> HandValue {
        let f = Features::new(cards);

        f.straight_flush()
            .or_else(|| f.groups(&[4, 1], HandRank::FourOfAKind))
            .or_else(|| f.groups(&[3, 2], HandRank::FullHouse))
            .or_else(|| f.flush())
            .or_else(|| f.straight())
            .or_else(|| f.groups(&[3, 1, 1], HandRank::ThreeOfAKind))
            .or_else(|| f.groups(&[2, 2, 1], HandRank::TwoPair))
            .or_else(|| f.groups(&[2, 1, 1, 1], HandRank::OnePair))
            .unwrap_or_else(|| f.high_card())
    }
}
