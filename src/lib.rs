//! SQL Transmuter - turn pasted tabular data into SQL statements
//!
//! Provides a small, pure pipeline plus the collaborators around it:
//! - Tabular parsing (delimiter sniffing, header/row extraction)
//! - SQL generation (INSERT/UPDATE, identity-insert wrapping, value escaping)
//! - Session state for presentation layers (recompute-on-change, primary-key
//!   auto-detection)
//! - Optional AI advisory suggestions (feature-gated)
//! - Clipboard hand-off for generated output
//!
//! The core pipeline (`parse` → `generate`) is a pure function of its inputs:
//! it never fails, never performs I/O, and expresses every degenerate case as
//! SQL comment text rather than an error.

#[cfg(feature = "advisory")]
pub mod advisory;
pub mod cli;
pub mod clipboard;
pub mod generate;
pub mod models;
pub mod parse;
pub mod session;

// Re-export commonly used types
pub use generate::{SqlValue, generate, sql_literal};
pub use parse::{Delimiter, parse};

#[cfg(feature = "advisory")]
pub use advisory::{
    AdvisoryClient, AdvisoryConfig, AdvisoryError, AdvisoryResult, GeminiClient, suggest,
};
#[cfg(feature = "clipboard")]
pub use clipboard::SystemClipboard;
pub use clipboard::{Clipboard, ClipboardError};
pub use session::{Session, detect_primary_key};

// Re-export models
pub use models::{
    AnalysisSuggestion, ColumnTypeSuggestion, GenerationSettings, ParsedData, SqlOperation,
};
