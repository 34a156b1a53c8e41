// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand values and comparison.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::{Card, Hand, HandRank, Kickers};

/// The value of a hand: its category and the kickers that break ties.
///
/// Values are ordered by category first and then by kickers, the greater value
/// wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue {
    // The fields order defines the derived ordering.
    rank: HandRank,
    kickers: Kickers,
}

impl HandValue {
    pub(crate) fn new(rank: HandRank, kickers: Kickers) -> Self {
        Self { rank, kickers }
    }

    /// Evaluates a 5 or 7 cards hand.
    pub fn eval(hand: &Hand) -> HandValue {
        match hand {
            Hand::Five(cards) => Self::eval5(cards),
            Hand::Seven(cards) => Self::eval7(cards),
        }
    }

    /// Evaluates a hand and returns the 5 cards that make its value, for a 5
    /// cards hand these are the hand cards.
    pub fn eval_with_best_hand(hand: &Hand) -> (HandValue, [Card; 5]) {
        match hand {
            Hand::Five(cards) => (Self::eval5(cards), *cards),
            Hand::Seven(cards) => Self::eval7_with_best_hand(cards),
        }
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The tie-breaking kickers.
    pub fn kickers(&self) -> Kickers {
        self.kickers
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rank, self.kickers)
    }
}

/// Compares two hand values, `Greater` if the first value wins.
///
/// Use `compare(a, b) as i8` to get `1`, `0`, `-1`.
pub fn compare(a: &HandValue, b: &HandValue) -> Ordering {
    a.cmp(b)
}

/// Evaluates and compares two hands, `Greater` if the first hand wins.
pub fn compare_hands(a: &Hand, b: &Hand) -> Ordering {
    compare(&HandValue::eval(a), &HandValue::eval(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, Rank};
    use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

    fn hand(s: &str) -> Hand {
        s.parse().unwrap()
    }

    fn random_hands(seed: u64, count: usize, size: usize) -> Vec<Hand> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut cards = Deck::default().into_iter().collect::<Vec<_>>();

        (0..count)
            .map(|_| {
                cards.shuffle(&mut rng);
                Hand::new(&cards[..size]).unwrap()
            })
            .collect()
    }

    #[test]
    fn compare_literal_hands() {
        let cases = [
            ("D8 DQ DJ DT D9", "H8 HT HJ H7 H9", Ordering::Greater),
            ("HT SQ ST DT CT", "HT SK ST DT CT", Ordering::Less),
            ("H8 SQ S8 D8 C8", "H7 SK S7 D7 C7", Ordering::Greater),
            ("H2 S7 S2 D2 C9", "H2 S8 S2 D2 C9", Ordering::Less),
            ("CT CJ CQ CK CA", "D9 DT DJ DQ DK", Ordering::Greater),
            ("H4 S5 HA D3 H2", "H2 S3 H4 D5 C6", Ordering::Less),
            ("HK HQ H2 H4 H5", "SK SQ S2 S4 S5", Ordering::Equal),
            ("H2 H5 H7 H9 HK S3 C4", "S2 S5 S7 S9 SK", Ordering::Equal),
        ];

        for (h1, h2, expected) in cases {
            assert_eq!(compare_hands(&hand(h1), &hand(h2)), expected, "{h1} vs {h2}");
            assert_eq!(
                compare_hands(&hand(h2), &hand(h1)),
                expected.reverse(),
                "{h2} vs {h1}"
            );
        }
    }

    #[test]
    fn compare_as_integer() {
        let a = HandValue::eval(&hand("D8 DQ DJ DT D9"));
        let b = HandValue::eval(&hand("H8 HT HJ H7 H9"));
        assert_eq!(compare(&a, &b) as i8, 1);
        assert_eq!(compare(&b, &a) as i8, -1);
        assert_eq!(compare(&a, &a) as i8, 0);
    }

    #[test]
    fn compare_category_before_kickers() {
        // A weak full house beats the best flush.
        let fh = HandValue::eval(&hand("H2 S2 C2 D3 H3"));
        let flush = HandValue::eval(&hand("HA HK HQ HJ H9"));
        assert_eq!(compare(&fh, &flush), Ordering::Greater);

        let longer = HandValue::new(
            HandRank::HighCard,
            Kickers::from_ranks(&[Rank::Ace, Rank::King]).unwrap(),
        );
        let shorter = HandValue::new(HandRank::OnePair, Kickers::single(Rank::Two));
        assert_eq!(compare(&longer, &shorter), Ordering::Less);
    }

    #[test]
    fn eval_dispatch() {
        let five = hand("H2 SQ C2 D2 CQ");
        let (value, best) = HandValue::eval_with_best_hand(&five);
        assert_eq!(value, HandValue::eval(&five));
        assert_eq!(value.rank(), HandRank::FullHouse);
        assert_eq!(value.kickers().as_slice(), &[Rank::Two, Rank::Queen]);
        assert_eq!(best, five.cards());
        assert_eq!(value.to_string(), "Full House [2, Q]");

        let seven = hand("H2 SQ C2 D2 CQ HK SA");
        let (value, best) = HandValue::eval_with_best_hand(&seven);
        assert_eq!(value, HandValue::eval(&seven));
        assert_eq!(value.rank(), HandRank::FullHouse);
        assert_eq!(HandValue::eval(&Hand::new(&best).unwrap()), value);
    }

    #[test]
    fn compare_reflexive_antisymmetric() {
        let hands = random_hands(0x5eed, 200, 5)
            .into_iter()
            .chain(random_hands(0xcafe, 200, 7))
            .collect::<Vec<_>>();

        for (a, b) in hands.iter().zip(hands.iter().rev()) {
            assert_eq!(compare_hands(a, a), Ordering::Equal, "{a}");
            assert_eq!(compare_hands(a, b), compare_hands(b, a).reverse(), "{a} vs {b}");
        }
    }

    #[test]
    fn seven_cards_dominates_subsets() {
        for hand in random_hands(0xbeef, 500, 7) {
            let Hand::Seven(cards) = hand else {
                panic!("expected a 7 cards hand");
            };

            let (value, best) = HandValue::eval_with_best_hand(&hand);
            assert_eq!(HandValue::eval5(&best), value, "{hand}");

            let mut best_subset = None;
            Deck::from_cards(&cards).for_each(5, |subset| {
                let subset_value = HandValue::eval5(&subset.try_into().unwrap());
                assert!(value >= subset_value, "{hand}");
                best_subset = best_subset.max(Some(subset_value));
            });

            assert_eq!(best_subset, Some(value), "{hand}");
        }
    }

    #[test]
    fn five_cards_distribution() {
        let mut counts = [0usize; HandRank::COUNT];
        Deck::default().for_each(5, |cards| {
            let cards: [Card; 5] = cards.try_into().unwrap();
            let value = HandValue::eval5(&cards);
            counts[value.rank() as usize] += 1;

            // A straight flush is never reported as a flush or a straight.
            let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
            let suited = matches!(
                value.rank(),
                HandRank::Flush | HandRank::StraightFlush | HandRank::RoyalFlush
            );
            assert_eq!(flush, suited, "{cards:?}");

            let expected_len = match value.rank() {
                HandRank::HighCard | HandRank::Flush => 5,
                HandRank::OnePair => 4,
                HandRank::TwoPair | HandRank::ThreeOfAKind => 3,
                HandRank::FullHouse | HandRank::FourOfAKind => 2,
                HandRank::Straight | HandRank::StraightFlush | HandRank::RoyalFlush => 1,
            };
            assert_eq!(value.kickers().len(), expected_len);
        });

        assert_eq!(
            counts,
            [
                1_302_540, // High card
                1_098_240, // One pair
                123_552,   // Two pair
                54_912,    // Three of a kind
                10_200,    // Straight
                5_108,     // Flush
                3_744,     // Full house
                624,       // Four of a kind
                36,        // Straight flush
                4,         // Royal flush
            ]
        );
    }

    // This takes a while to run in debug mode as it goes through 133M hands.
    #[test]
    #[ignore]
    fn seven_cards_distribution() {
        let mut counts = [0usize; HandRank::COUNT];
        Deck::default().for_each(7, |cards| {
            let value = HandValue::eval7(&cards.try_into().unwrap());
            counts[value.rank() as usize] += 1;
        });

        assert_eq!(
            counts,
            [
                23_294_460, 58_627_800, 31_433_400, 6_461_620, 6_180_020, 4_047_644, 3_473_184,
                224_848, 37_260, 4_324,
            ]
        );
    }
}
