//! Prompt building and response parsing for data analysis
//!
//! The advisory service receives a prefix of the raw pasted input and is
//! asked for a JSON object matching [`AnalysisSuggestion`]. Responses are
//! parsed tolerantly: pure JSON, JSON inside a markdown code fence, or JSON
//! embedded in surrounding prose all work.

use crate::advisory::error::{AdvisoryError, AdvisoryResult};
use crate::models::AnalysisSuggestion;

/// Prompt template for input analysis
pub const ANALYSIS_PROMPT_TEMPLATE: &str = r#"Analyze this SQL result set fragment and provide a suggested table name, identify potential column data types, and any data cleanup suggestions.

Input Data:
{input}

Return ONLY a valid JSON object with this shape, no explanation or markdown formatting:
{"suggestedTableName": string, "dataCleanupSuggestions": [string], "columnTypes": [{"columnName": string, "sqlType": string}]}"#;

/// Build the analysis prompt from raw input, sending at most `max_chars`
/// characters of it.
pub fn build_analysis_prompt(raw_input: &str, max_chars: usize) -> String {
    ANALYSIS_PROMPT_TEMPLATE.replace("{input}", &truncate_chars(raw_input, max_chars))
}

/// Parse the service response into a structured suggestion
pub fn parse_analysis_response(response: &str) -> AdvisoryResult<AnalysisSuggestion> {
    let json_str = extract_json(response);

    let suggestion: AnalysisSuggestion = serde_json::from_str(&json_str).map_err(|e| {
        AdvisoryError::ParseError(format!(
            "{e}. Response was: {}",
            truncate_chars(response, 200)
        ))
    })?;

    if suggestion.suggested_table_name.is_empty() {
        return Err(AdvisoryError::InvalidResponse(
            "missing suggested table name".to_string(),
        ));
    }

    Ok(suggestion)
}

/// Extract JSON from a response that may contain markdown or other text
fn extract_json(response: &str) -> String {
    let trimmed = response.trim();

    // JSON code fence
    if let Some(start) = trimmed.find("```json") {
        let content_start = start + 7;
        if let Some(end) = trimmed[content_start..].find("```") {
            return trimmed[content_start..content_start + end]
                .trim()
                .to_string();
        }
    }

    // Generic code fence
    if let Some(start) = trimmed.find("```") {
        let content_start = start + 3;
        let content_start = trimmed[content_start..]
            .find('\n')
            .map(|n| content_start + n + 1)
            .unwrap_or(content_start);
        if let Some(end) = trimmed[content_start..].find("```") {
            return trimmed[content_start..content_start + end]
                .trim()
                .to_string();
        }
    }

    // Bare JSON object somewhere in the text
    if let Some(start) = trimmed.find('{') {
        if let Some(end) = trimmed.rfind('}') {
            if end > start {
                return trimmed[start..=end].to_string();
            }
        }
    }

    trimmed.to_string()
}

/// Take at most `max_chars` characters, never splitting a code point
fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
