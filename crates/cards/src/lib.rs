// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handrank Poker cards types.
//!
//! This crate define types to create and parse cards:
//!
//! ```
//! # use handrank_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd = "DK".parse::<Card>().unwrap();
//! assert_eq!(kd, Card::new(Rank::King, Suit::Diamonds));
//! assert!(ah.rank() > kd.rank());
//! ```
//!
//! a [Hand] type that holds 5 or 7 distinct cards:
//!
//! ```
//! # use handrank_cards::{Error, Hand};
//! let hand = "H2 SQ C2 D2 CQ".parse::<Hand>().unwrap();
//! assert_eq!(hand.len(), 5);
//!
//! let err = "H2 SQ C2".parse::<Hand>().unwrap_err();
//! assert_eq!(err, Error::InvalidHandSize(3));
//! ```
//!
//! and a [Deck] type for iterating all the k-cards hands in the deck, for
//! example to count all 5 cards hands:
//!
//! ```
//! # use handrank_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Rank, Suit};

mod deck;
pub use deck::Deck;

mod error;
pub use error::{Error, Result};

mod hand;
pub use hand::Hand;
