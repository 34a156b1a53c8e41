// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! A 5 cards hand is classified by checking its flush, straight and rank
//! multiplicities, a 7 cards hand is evaluated by taking the best of its 21
//! five cards subsets.
//!
//! It provides a [HandValue::eval] method that computes a hand category and its
//! kickers, and a [HandValue::eval_with_best_hand] that also returns the five
//! cards that make the hand value, useful to show a winning hand.

mod eval5;
mod eval7;

mod kickers;
pub use kickers::Kickers;

mod rank;
pub use rank::HandRank;

mod value;
pub use value::{HandValue, compare, compare_hands};
