// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Handrank CLI.
//!
//! Evaluates the poker hands given as arguments, or reads one hand per line
//! from the terminal when no hands are given.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, bail};
use clap::Parser;
use log::info;
use std::io;

pub mod report;
pub mod terminal;

use report::Format;

#[derive(Debug, Parser)]
#[clap(name = "handrank", version, about = "Evaluates and compares poker hands.")]
struct Cli {
    /// The hands to evaluate, each one a quoted list of cards (e.g. "H2 SQ C2 D2 CQ").
    hands: Vec<String>,
    /// Compare two hands and print the winner.
    #[clap(long, short)]
    compare: bool,
    /// Print one JSON object per line.
    #[clap(long, short)]
    json: bool,
    /// Increase logging verbosity (-v info, -vv debug, -vvv trace).
    #[clap(long, short, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> log::LevelFilter {
    match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    env_logger::builder()
        .filter_level(log_level(cli.verbose))
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let format = if cli.json { Format::Json } else { Format::Text };
    let mut out = io::stdout().lock();

    if cli.compare {
        let [first, second] = cli.hands.as_slice() else {
            bail!("--compare needs exactly two hands, got {}", cli.hands.len());
        };

        report::compare_hands(first, second, format, &mut out)?;
    } else if cli.hands.is_empty() {
        terminal::run(io::stdin().lock(), &mut out, format)?;
    } else {
        info!("Evaluating {} hands", cli.hands.len());
        for hand in &cli.hands {
            report::evaluate(hand, format, &mut out)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_args() {
        let cli = Cli::parse_from(["handrank", "H2 SQ C2 D2 CQ", "CT CJ CQ CK CA"]);
        assert_eq!(cli.hands.len(), 2);
        assert!(!cli.compare && !cli.json);
        assert_eq!(cli.verbose, 0);

        let cli = Cli::parse_from(["handrank", "-c", "-j", "-vv", "H2 SQ C2 D2 CQ", "X"]);
        assert!(cli.compare && cli.json);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.hands, ["H2 SQ C2 D2 CQ", "X"]);

        let cli = Cli::parse_from(["handrank"]);
        assert!(cli.hands.is_empty());
    }

    #[test]
    fn verbosity_levels() {
        assert_eq!(log_level(0), log::LevelFilter::Warn);
        assert_eq!(log_level(1), log::LevelFilter::Info);
        assert_eq!(log_level(2), log::LevelFilter::Debug);
        assert_eq!(log_level(3), log::LevelFilter::Trace);
        assert_eq!(log_level(9), log::LevelFilter::Trace);

        let cli = Cli::parse_from(["handrank", "-vvv"]);
        assert_eq!(log_level(cli.verbose), log::LevelFilter::Trace);
    }

    #[test]
    fn cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
