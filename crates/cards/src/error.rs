// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Cards and hands parsing errors.
use thiserror::Error;

use crate::Card;

/// Errors returned when building cards and hands from their string form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The card token is not exactly two characters.
    #[error("invalid card format: {0}")]
    InvalidFormat(String),
    /// The first token character is not a suit symbol.
    #[error("invalid suit: {0}")]
    InvalidSuit(char),
    /// The second token character is not a rank symbol.
    #[error("invalid rank: {0}")]
    InvalidRank(char),
    /// A hand must have 5 or 7 cards.
    #[error("hand must have 5 or 7 cards, got: {0}")]
    InvalidHandSize(usize),
    /// The same card appears more than once in a hand.
    #[error("duplicate card in hand: {0}")]
    DuplicateCard(Card),
}

/// Result type for cards operations.
pub type Result<T> = std::result::Result<T, Error>;
