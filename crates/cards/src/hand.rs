// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hands of 5 or 7 distinct cards.
use ahash::AHashSet;
use std::{fmt, str::FromStr};

use crate::{Card, Error, Result};

/// A hand of 5 or 7 distinct cards.
///
/// The hand size is part of the type so that evaluation never has to deal with
/// other sizes, hands are validated when created and never change after that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hand {
    /// A 5 cards hand.
    Five([Card; 5]),
    /// A 7 cards hand.
    Seven([Card; 7]),
}

impl Hand {
    /// Creates a hand from a cards slice.
    ///
    /// Fails if the number of cards is not 5 or 7 or if there are duplicates.
    pub fn new(cards: &[Card]) -> Result<Hand> {
        let hand = if let Ok(cards) = <[Card; 5]>::try_from(cards) {
            Hand::Five(cards)
        } else if let Ok(cards) = <[Card; 7]>::try_from(cards) {
            Hand::Seven(cards)
        } else {
            return Err(Error::InvalidHandSize(cards.len()));
        };

        check_duplicates(hand.cards())?;

        Ok(hand)
    }

    /// The hand cards in the order they were given.
    pub fn cards(&self) -> &[Card] {
        match self {
            Hand::Five(cards) => cards,
            Hand::Seven(cards) => cards,
        }
    }

    /// The number of cards in this hand.
    pub fn len(&self) -> usize {
        self.cards().len()
    }

    /// Always false, a hand has at least 5 cards.
    pub fn is_empty(&self) -> bool {
        false
    }
}

fn check_duplicates(cards: &[Card]) -> Result<()> {
    let mut seen = AHashSet::with_capacity(cards.len());
    match cards.iter().find(|card| !seen.insert(**card)) {
        Some(card) => Err(Error::DuplicateCard(*card)),
        None => Ok(()),
    }
}

impl FromStr for Hand {
    type Err = Error;

    /// Parses a whitespace separated list of cards (e.g. "H2 SQ C2 D2 CQ").
    fn from_str(s: &str) -> Result<Self> {
        let tokens = s.split_whitespace().collect::<Vec<_>>();
        if tokens.len() != 5 && tokens.len() != 7 {
            return Err(Error::InvalidHandSize(tokens.len()));
        }

        let cards = tokens
            .into_iter()
            .map(str::parse::<Card>)
            .collect::<Result<Vec<_>>>()?;

        Hand::new(&cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards().iter().enumerate() {
            if idx > 0 {
                write!(f, " ")?;
            }

            write!(f, "{card}")?;
        }

        Ok(())
    }
}
