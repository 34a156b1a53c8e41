// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands evaluation reports.
use anyhow::Result;
use log::{debug, warn};
use serde::Serialize;
use std::{cmp::Ordering, io::Write};

use handrank_eval::{Hand, HandRank, HandValue, Kickers, compare};

/// The reports output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Human readable text.
    Text,
    /// One JSON object per line.
    Json,
}

/// A hand evaluation report.
#[derive(Debug, Serialize)]
struct Report<'a> {
    hand: &'a str,
    value: HandRank,
    kickers: Kickers,
    /// The best 5 cards for a 7 cards hand.
    #[serde(skip_serializing_if = "Option::is_none")]
    best: Option<Vec<String>>,
}

/// A hand that failed to parse.
#[derive(Debug, Serialize)]
struct ErrorReport<'a> {
    hand: &'a str,
    error: String,
}

/// The result of a two hands comparison.
#[derive(Debug, Serialize)]
struct WinnerReport {
    winner: &'static str,
}

/// Evaluates a hand string and writes its report.
///
/// Hand errors are written to the output and return `None`, only output
/// errors are returned as errors.
pub fn evaluate<W: Write>(input: &str, format: Format, out: &mut W) -> Result<Option<HandValue>> {
    let input = input.trim();

    let hand = match input.parse::<Hand>() {
        Ok(hand) => hand,
        Err(e) => {
            warn!("Invalid hand {input:?}: {e}");
            match format {
                Format::Text => writeln!(out, "Error: {e}")?,
                Format::Json => write_json(
                    out,
                    &ErrorReport {
                        hand: input,
                        error: e.to_string(),
                    },
                )?,
            }

            return Ok(None);
        }
    };

    let (value, best) = HandValue::eval_with_best_hand(&hand);
    debug!("Hand {hand} evaluates to {value}");

    let best = matches!(hand, Hand::Seven(_)).then(|| best.map(|c| c.to_string()).to_vec());

    match format {
        Format::Text => {
            writeln!(out, "Hand: {input}")?;
            writeln!(out, "Value: {}", value.rank())?;
            writeln!(out, "Kickers: {}", value.kickers())?;
            if let Some(best) = &best {
                writeln!(out, "Best: {}", best.join(" "))?;
            }
        }
        Format::Json => write_json(
            out,
            &Report {
                hand: input,
                value: value.rank(),
                kickers: value.kickers(),
                best,
            },
        )?,
    }

    Ok(Some(value))
}

/// Evaluates two hands and writes their reports followed by the winner.
pub fn compare_hands<W: Write>(
    first: &str,
    second: &str,
    format: Format,
    out: &mut W,
) -> Result<Option<Ordering>> {
    let v1 = evaluate(first, format, out)?;
    let v2 = evaluate(second, format, out)?;

    let (Some(v1), Some(v2)) = (v1, v2) else {
        return Ok(None);
    };

    let ordering = compare(&v1, &v2);
    let winner = match ordering {
        Ordering::Greater => "first",
        Ordering::Less => "second",
        Ordering::Equal => "tie",
    };

    match format {
        Format::Text => writeln!(out, "Winner: {winner}")?,
        Format::Json => write_json(out, &WinnerReport { winner })?,
    }

    Ok(Some(ordering))
}

fn write_json<W: Write, T: Serialize>(out: &mut W, value: &T) -> Result<()> {
    serde_json::to_writer(&mut *out, value)?;
    writeln!(out)?;
    Ok(())
}
