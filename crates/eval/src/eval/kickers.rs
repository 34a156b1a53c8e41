// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Tie-breaking kickers.
use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use std::{cmp::Ordering, fmt, hash};

use crate::Rank;

const MAX_KICKERS: usize = 5;

/// The ranks used to break ties between hands with the same [HandRank].
///
/// Kickers are compared front to back, the first different rank decides, if one
/// sequence is a prefix of the other the longer sequence wins.
///
/// ```
/// # use handrank_eval::{Kickers, Rank};
/// let k1 = Kickers::from_ranks(&[Rank::King, Rank::Eight, Rank::Two]).unwrap();
/// let k2 = Kickers::from_ranks(&[Rank::King, Rank::Seven, Rank::Ace]).unwrap();
/// assert!(k1 > k2);
/// assert_eq!(k1.to_string(), "[K, 8, 2]");
/// ```
///
/// [HandRank]: crate::HandRank
#[derive(Clone, Copy)]
pub struct Kickers {
    ranks: [Rank; MAX_KICKERS],
    len: u8,
}

impl Kickers {
    /// The maximum number of kickers.
    pub const MAX: usize = MAX_KICKERS;

    /// Creates kickers from a ranks slice, returns `None` if there are more than
    /// [Kickers::MAX] ranks.
    pub fn from_ranks(ranks: &[Rank]) -> Option<Kickers> {
        if ranks.len() > Self::MAX {
            return None;
        }

        let mut kickers = Kickers::default();
        ranks.iter().for_each(|&r| kickers.push(r));
        Some(kickers)
    }

    /// Creates kickers with a single rank.
    pub fn single(rank: Rank) -> Kickers {
        let mut kickers = Kickers::default();
        kickers.push(rank);
        kickers
    }

    /// Appends a rank, the caller must not push more than [Kickers::MAX] ranks.
    pub(crate) fn push(&mut self, rank: Rank) {
        self.ranks[self.len as usize] = rank;
        self.len += 1;
    }

    /// The kickers ranks.
    pub fn as_slice(&self) -> &[Rank] {
        &self.ranks[..self.len as usize]
    }

    /// Iterates the kickers ranks from the first to the last.
    pub fn iter(&self) -> impl Iterator<Item = Rank> + '_ {
        self.as_slice().iter().copied()
    }

    /// The number of kickers.
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Checks if there are no kickers.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Default for Kickers {
    fn default() -> Self {
        Self {
            ranks: [Rank::Two; MAX_KICKERS],
            len: 0,
        }
    }
}

impl PartialEq for Kickers {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for Kickers {}

impl PartialOrd for Kickers {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Kickers {
    fn cmp(&self, other: &Self) -> Ordering {
        // Slices order is lexicographic with a prefix ordered before longer slices.
        self.as_slice().cmp(other.as_slice())
    }
}

impl hash::Hash for Kickers {
    fn hash<H: hash::Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state);
    }
}

impl fmt::Debug for Kickers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl fmt::Display for Kickers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, rank) in self.iter().enumerate() {
            if idx > 0 {
                write!(f, ", ")?;
            }

            write!(f, "{rank}")?;
        }
        write!(f, "]")
    }
}

impl Serialize for Kickers {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> Deserialize<'de> for Kickers {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let ranks = Vec::<Rank>::deserialize(deserializer)?;
        Kickers::from_ranks(&ranks)
            .ok_or_else(|| de::Error::invalid_length(ranks.len(), &"at most 5 ranks"))
    }
}
