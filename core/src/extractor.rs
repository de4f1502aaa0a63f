//! Extracts open-port records from raw nmap output.
//!
//! A single forward pass over the lines, driven by a three-state machine:
//! everything before the `PORT` header is ignored, rows inside the table
//! are tokenized on whitespace, and the first blank line or `Nmap done:`
//! footer ends the scan for good. Malformed rows are skipped silently and
//! an empty result is a valid outcome, not an error.

use scanview_common::scan::record::PortRecord;
use tracing::trace;

/// Position of the line scanner within the raw output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParseState {
    /// Still looking for the `PORT ...` table header.
    BeforeTable,
    /// Inside the port table; rows are parsed until a terminator.
    InTable,
    /// A terminator was seen; remaining lines are never examined.
    Done,
}

/// Parses `raw` and returns the open-port records in order of appearance.
pub fn extract(raw: &str) -> Vec<PortRecord> {
    let mut records: Vec<PortRecord> = Vec::new();
    let mut state = ParseState::BeforeTable;

    for line in raw.lines() {
        state = match state {
            ParseState::BeforeTable => {
                if line.starts_with("PORT") {
                    ParseState::InTable
                } else {
                    ParseState::BeforeTable
                }
            }
            ParseState::InTable => {
                if line.trim().is_empty() || line.starts_with("Nmap done:") {
                    ParseState::Done
                } else {
                    if let Some(record) = parse_row(line) {
                        records.push(record);
                    }
                    ParseState::InTable
                }
            }
            ParseState::Done => break,
        };
    }

    records
}

/// Parses a single table row into a record, or `None` when the row is
/// malformed or reported in a non-open state.
fn parse_row(line: &str) -> Option<PortRecord> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 3 {
        trace!("skipping malformed table row: {line:?}");
        return None;
    }

    let state = tokens[1].to_lowercase();
    if state != "open" {
        return None;
    }

    Some(PortRecord::new(
        tokens[0],
        state,
        tokens[2],
        tokens[3..].join(" "),
    ))
}
