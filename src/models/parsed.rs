//! Parsed tabular data

use serde::{Deserialize, Serialize};

/// Header/row structure produced by the tabular parser.
///
/// `headers` keeps the column names in input order; that order drives the
/// column order of every generated statement. `rows` holds one record per
/// subsequent input line. Row lengths are not reconciled against the header
/// count - ragged rows are legal, and consumers treat missing trailing cells
/// as SQL `NULL`.
///
/// A `ParsedData` is built fresh on every parse call and never mutated; the
/// next input change discards it and builds a new one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedData {
    /// Column names from the first input line, trimmed, in input order
    pub headers: Vec<String>,
    /// Data records, one per line, each a sequence of trimmed cell strings
    pub rows: Vec<Vec<String>>,
}

impl ParsedData {
    /// Create an empty result (the terminal case for empty input)
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when there is nothing to generate from (no headers or no rows)
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() || self.rows.is_empty()
    }

    /// Number of data rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Cell at (row, column), if the row is long enough.
    ///
    /// Returns `None` for out-of-range columns so ragged rows read as absent
    /// cells rather than panicking.
    pub fn cell(&self, row: usize, column: usize) -> Option<&str> {
        self.rows.get(row)?.get(column).map(String::as_str)
    }
}
