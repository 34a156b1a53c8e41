// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Seven cards hand evaluation.
use log::trace;

use crate::{Card, HandValue};

/// Number of 5 cards subsets of a 7 cards hand.
const NUM_SUBSETS: usize = 21;

/// Creates the table of the 5 cards index subsets of 7 cards in lexicographic
/// order, the table size is checked at compile time.
const fn make_subsets() -> [[usize; 5]; NUM_SUBSETS] {
    let mut t = [[0usize; 5]; NUM_SUBSETS];
    let mut idx = [0, 1, 2, 3, 4];
    let mut n = 0;

    loop {
        t[n] = idx;
        n += 1;

        // Find the rightmost index that can be incremented.
        let mut i = 5;
        while i > 0 && idx[i - 1] == 7 - 5 + i - 1 {
            i -= 1;
        }

        if i == 0 {
            break;
        }

        i -= 1;
        idx[i] += 1;

        let mut j = i + 1;
        while j < 5 {
            idx[j] = idx[j - 1] + 1;
            j += 1;
        }
    }

    assert!(n == NUM_SUBSETS);
    t
}

const SUBSETS: [[usize; 5]; NUM_SUBSETS] = make_subsets();

impl HandValue {
    /// Evaluates a 7 cards hand using the best 5 cards subset.
    pub fn eval7(cards: &[Card; 7]) -> HandValue {
        Self::eval7_with_best_hand(cards).0
    }

    /// Evaluates a 7 cards hand and returns the best 5 cards.
    ///
    /// A subset replaces the current best only if its value is strictly greater,
    /// so among subsets with the same value the first one in lexicographic index
    /// order is returned.
    pub fn eval7_with_best_hand(cards: &[Card; 7]) -> (HandValue, [Card; 5]) {
        let mut best_hand = SUBSETS[0].map(|i| cards[i]);
        let mut best = HandValue::eval5(&best_hand);

        for subset in &SUBSETS[1..] {
            let hand = subset.map(|i| cards[i]);
            let value = HandValue::eval5(&hand);
            if value > best {
                trace!("New best {value} from {hand:?}");
                best = value;
                best_hand = hand;
            }
        }

        (best, best_hand)
    }
}
