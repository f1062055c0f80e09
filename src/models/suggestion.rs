//! Advisory analysis result types
//!
//! These mirror the JSON shape returned by the advisory service. The core
//! pipeline never depends on them; they exist so the presentation layer can
//! show suggestions alongside the generated SQL.

use serde::{Deserialize, Serialize};

/// A suggested SQL type for one column
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnTypeSuggestion {
    /// Column name as it appears in the pasted headers
    pub column_name: String,
    /// Suggested SQL type (e.g. "INT", "NVARCHAR(100)")
    pub sql_type: String,
}

/// Structured suggestion returned by the advisory service for a pasted
/// input fragment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisSuggestion {
    /// Table name guessed from the data
    pub suggested_table_name: String,
    /// Free-form cleanup hints (odd values, mixed formats, ...)
    #[serde(default)]
    pub data_cleanup_suggestions: Vec<String>,
    /// Per-column SQL type guesses
    #[serde(default)]
    pub column_types: Vec<ColumnTypeSuggestion>,
}
