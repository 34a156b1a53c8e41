// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handrank Poker hand evaluator.
//!
//! Poker hand evaluator for 5 and 7 cards hands. A hand evaluates to a
//! [HandValue] made of a [HandRank] category and the [Kickers] that break ties
//! between hands in the same category, values are ordered so that the greater
//! value wins:
//!
//! ```
//! # use handrank_eval::*;
//! let h1 = "H2 SQ C2 D2 CQ".parse::<Hand>().unwrap();
//! let h2 = "HK HQ H2 H4 H5".parse::<Hand>().unwrap();
//!
//! let v1 = HandValue::eval(&h1);
//! assert_eq!(v1.rank(), HandRank::FullHouse);
//! assert_eq!(v1.kickers().as_slice(), &[Rank::Two, Rank::Queen]);
//!
//! let v2 = HandValue::eval(&h2);
//! assert_eq!(v2.rank(), HandRank::Flush);
//! assert!(v1 > v2);
//! ```
//!
//! A 7 cards hand is evaluated using its best 5 cards:
//!
//! ```
//! # use handrank_eval::*;
//! # use std::cmp::Ordering;
//! let hand = "H2 H5 H7 H9 HK S3 C4".parse::<Hand>().unwrap();
//! let (value, best) = HandValue::eval_with_best_hand(&hand);
//! assert_eq!(value.rank(), HandRank::Flush);
//! assert_eq!(best, hand.cards()[..5]);
//!
//! let other = "S2 S5 S7 S9 SQ".parse::<Hand>().unwrap();
//! assert_eq!(compare_hands(&hand, &other), Ordering::Greater);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, HandValue, Kickers, compare, compare_hands};

// Reexport cards types.
pub use handrank_cards::{Card, Deck, Error, Hand, Rank, Suit};
