//! Tabular parser for pasted query results
//!
//! Turns raw text copied out of a spreadsheet or database client into a
//! [`ParsedData`] header/row structure. Parsing is total: any input -
//! including empty or ragged text - produces a result, never an error.

use serde::{Deserialize, Serialize};

use crate::models::ParsedData;

/// Field separator chosen by sniffing the first input line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Delimiter {
    /// Tab-separated (the convention for SQL client copy-paste)
    Tab,
    /// Comma-separated
    Comma,
}

impl Delimiter {
    /// The separator character
    pub fn as_char(&self) -> char {
        match self {
            Delimiter::Tab => '\t',
            Delimiter::Comma => ',',
        }
    }

    /// Human-readable name for UI display
    pub fn label(&self) -> &'static str {
        match self {
            Delimiter::Tab => "tab",
            Delimiter::Comma => "comma",
        }
    }
}

/// Choose the delimiter by comparing tab and comma counts in one line.
///
/// The decision is made once per parse from the first line only and applied
/// uniformly to every line; it is deliberately not re-evaluated per row.
/// Ties go to tab, the standard for SQL client copy output.
pub fn sniff_delimiter(first_line: &str) -> Delimiter {
    let tabs = first_line.matches('\t').count();
    let commas = first_line.matches(',').count();
    if tabs >= commas {
        Delimiter::Tab
    } else {
        Delimiter::Comma
    }
}

/// Parse raw pasted text into headers and rows.
///
/// The whole input is trimmed, then split on `\n` or `\r\n`. The first line
/// becomes `headers`, every later line one entry of `rows`, each field
/// trimmed. Lines are not validated against the header count: a line that
/// splits into fewer or more fields than there are headers is kept as-is,
/// and the generator treats missing trailing cells as SQL `NULL`.
pub fn parse(raw: &str) -> ParsedData {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return ParsedData::empty();
    }

    let mut lines = trimmed.split('\n').map(|line| line.strip_suffix('\r').unwrap_or(line));

    let first_line = match lines.next() {
        Some(line) => line,
        None => return ParsedData::empty(),
    };

    let delimiter = sniff_delimiter(first_line).as_char();

    let headers = split_fields(first_line, delimiter);
    let rows = lines.map(|line| split_fields(line, delimiter)).collect();

    ParsedData { headers, rows }
}

fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter)
        .map(|field| field.trim().to_string())
        .collect()
}
