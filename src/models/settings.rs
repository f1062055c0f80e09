//! Generation settings owned by the presentation layer

use serde::{Deserialize, Serialize};

/// The SQL operation to generate.
///
/// A closed set, matched exhaustively in the generator so that a future
/// dialect or a real `MERGE` implementation is a compile-time-checked
/// extension point rather than a string comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SqlOperation {
    Insert,
    Update,
    /// Placeholder only: emits descriptive comments, not a `MERGE` statement
    Upsert,
}

impl SqlOperation {
    /// All operations, in display order
    pub const ALL: [SqlOperation; 3] = [
        SqlOperation::Insert,
        SqlOperation::Update,
        SqlOperation::Upsert,
    ];

    /// The uppercase keyword form shown in UIs and wire payloads
    pub fn keyword(&self) -> &'static str {
        match self {
            SqlOperation::Insert => "INSERT",
            SqlOperation::Update => "UPDATE",
            SqlOperation::Upsert => "UPSERT",
        }
    }
}

/// User-editable settings that drive SQL generation.
///
/// Owned by the presentation layer; the generator only reads them. The
/// primary key starts empty and may be auto-populated once from parsed
/// headers (see [`crate::session::detect_primary_key`]); after that it is
/// fully user-controlled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationSettings {
    /// Target table name, inserted into SQL as a bracket-quoted identifier.
    /// Not validated against SQL identifier syntax.
    pub table_name: String,
    /// Which statement kind to generate
    pub operation: SqlOperation,
    /// Column used for UPDATE's WHERE clause (case-insensitive match against
    /// headers). Empty string means "not set".
    #[serde(default)]
    pub primary_key: String,
    /// Wrap output in SET IDENTITY_INSERT ON/OFF directives
    #[serde(default)]
    pub identity_insert: bool,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            table_name: "TargetTable".to_string(),
            operation: SqlOperation::Insert,
            primary_key: String::new(),
            identity_insert: false,
        }
    }
}

impl GenerationSettings {
    /// Settings for the given table with all other fields at their defaults
    pub fn new(table_name: impl Into<String>) -> Self {
        Self {
            table_name: table_name.into(),
            ..Self::default()
        }
    }

    /// Set the operation
    pub fn with_operation(mut self, operation: SqlOperation) -> Self {
        self.operation = operation;
        self
    }

    /// Set the primary key column name
    pub fn with_primary_key(mut self, primary_key: impl Into<String>) -> Self {
        self.primary_key = primary_key.into();
        self
    }

    /// Enable or disable identity-insert wrapping
    pub fn with_identity_insert(mut self, enabled: bool) -> Self {
        self.identity_insert = enabled;
        self
    }

    /// True when a primary key has been chosen (by the user or auto-detection)
    pub fn has_primary_key(&self) -> bool {
        !self.primary_key.is_empty()
    }
}
