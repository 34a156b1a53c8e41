// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Interactive terminal I/O.
use anyhow::Result;
use log::info;
use std::io::{BufRead, Write};

use crate::report::{self, Format};

/// Runs the interactive loop reading one hand per line until EOF, `quit` or `exit`.
///
/// Lines that are not valid UTF-8 are decoded lossily and reported as bad hands,
/// only I/O errors end the session.
///
/// The banner and prompt are only written for text output so that JSON output
/// has one object per line.
pub fn run<R: BufRead, W: Write>(mut input: R, out: &mut W, format: Format) -> Result<()> {
    let prompt = format == Format::Text;
    if prompt {
        writeln!(
            out,
            "Enter poker hands (e.g., 'H2 SQ C2 D2 CQ') or 'quit' to exit:"
        )?;
    }

    let mut count = 0;
    let mut buf = Vec::new();
    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }

        let line = String::from_utf8_lossy(&buf);
        let line = line.trim();
        if line == "quit" || line == "exit" {
            break;
        }

        if line.is_empty() {
            continue;
        }

        report::evaluate(line, format, out)?;
        count += 1;
    }

    info!("Evaluated {count} hands");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_session(input: &str, format: Format) -> String {
        let mut out = Vec::new();
        run(Cursor::new(input), &mut out, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn session_until_quit() {
        let text = run_session("H2 SQ C2 D2 CQ\n\nH2 SQ C2\nquit\nCT CJ CQ CK CA\n", Format::Text);

        assert!(text.starts_with("Enter poker hands"));
        assert!(text.contains("Value: Full House\n"));
        assert!(text.contains("Error: hand must have 5 or 7 cards, got: 3\n"));

        // The loop stops at quit.
        assert!(!text.contains("Royal Flush"));
        assert_eq!(text.matches("> ").count(), 4);
    }

    #[test]
    fn session_until_eof() {
        let text = run_session("CT CJ CQ CK CA\nexit", Format::Text);
        assert!(text.contains("Value: Royal Flush\nKickers: [A]\n"));

        let text = run_session("CT CJ CQ CK CA\r\nH4 S5 HA D3 H2", Format::Text);
        assert!(text.contains("Value: Royal Flush\n"));
        assert!(text.contains("Value: Straight\nKickers: [5]\n"));
    }

    #[test]
    fn session_json() {
        let text = run_session("CT CJ CQ CK CA\nH2 H2 SQ C2 D2\n", Format::Json);
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 2);

        let v = serde_json::from_str::<serde_json::Value>(lines[0]).unwrap();
        assert_eq!(v["value"], "RoyalFlush");

        let v = serde_json::from_str::<serde_json::Value>(lines[1]).unwrap();
        assert_eq!(v["error"], "duplicate card in hand: H2");
    }

    #[test]
    fn session_invalid_utf8_line() {
        let input = b"H\xff2 SQ C2 D2 CQ\nCT CJ CQ CK CA\n";
        let mut out = Vec::new();
        run(Cursor::new(&input[..]), &mut out, Format::Text).unwrap();
        let text = String::from_utf8(out).unwrap();

        // The bad line is reported and the session goes on.
        assert!(text.contains("Error: invalid card format: H\u{FFFD}2\n"));
        assert!(text.contains("Value: Royal Flush\nKickers: [A]\n"));
        assert_eq!(text.matches("> ").count(), 3);
    }
}
