//! AI advisory suggestions for pasted data
//!
//! Given a fragment of the raw pasted input, the advisory service can
//! suggest a table name, per-column SQL types and cleanup hints. The whole
//! module is advisory in the strict sense: the parse → generate pipeline
//! never depends on it, an unavailable or failing service collapses to "no
//! suggestion", and nothing here blocks or mutates generation.
//!
//! # Features
//!
//! - `advisory` (default): configuration, prompt/response handling, the
//!   client trait and the [`suggest`] entry point. No extra dependencies.
//! - `advisory-online`: the reqwest-backed [`GeminiClient`]. Without it the
//!   client compiles to a stub that reports feature-not-available.
//!
//! # Example
//!
//! ```ignore
//! use sql_transmuter::advisory::{GeminiClient, suggest};
//!
//! let client = GeminiClient::from_env();
//! if let Some(s) = suggest(&client, "Shop_Id\tName\n1\tAlice").await {
//!     println!("suggested table: {}", s.suggested_table_name);
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod gemini;
pub mod prompt;

// Re-export main types
pub use client::AdvisoryClient;
pub use config::{API_KEY_ENV, AdvisoryConfig, DEFAULT_MAX_INPUT_CHARS};
pub use error::{AdvisoryError, AdvisoryResult};
pub use gemini::GeminiClient;
pub use prompt::{build_analysis_prompt, parse_analysis_response};

#[cfg(test)]
pub use client::MockAdvisoryClient;

use crate::models::AnalysisSuggestion;

/// Run one analysis round-trip: build the prompt, call the service, parse
/// the response.
pub async fn analyze(
    client: &dyn AdvisoryClient,
    raw_input: &str,
    max_input_chars: usize,
) -> AdvisoryResult<AnalysisSuggestion> {
    let prompt = build_analysis_prompt(raw_input, max_input_chars);
    let response = client.complete(&prompt).await?;
    parse_analysis_response(&response)
}

/// Fetch a suggestion if the service is able to provide one.
///
/// This is the entry point presentation layers use: every failure mode -
/// missing credential, network error, malformed response, feature not
/// compiled in - is logged at warn level and collapses to `None`. Callers
/// never need an error path.
pub async fn suggest(client: &dyn AdvisoryClient, raw_input: &str) -> Option<AnalysisSuggestion> {
    match analyze(client, raw_input, DEFAULT_MAX_INPUT_CHARS).await {
        Ok(suggestion) => Some(suggestion),
        Err(e) => {
            tracing::warn!("advisory analysis skipped: {e}");
            None
        }
    }
}
