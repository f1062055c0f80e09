//! Advisory module tests
//!
//! The advisory service must be safely ignorable: whatever happens on the
//! wire, the pipeline sees either a suggestion or nothing.

#![cfg(feature = "advisory")]

use async_trait::async_trait;
use sql_transmuter::advisory::{
    AdvisoryClient, AdvisoryConfig, AdvisoryError, AdvisoryResult, DEFAULT_MAX_INPUT_CHARS,
    build_analysis_prompt, parse_analysis_response, suggest,
};

struct ScriptedClient {
    response: Option<String>,
}

impl ScriptedClient {
    fn responding(response: &str) -> Self {
        Self {
            response: Some(response.to_string()),
        }
    }

    fn unavailable() -> Self {
        Self { response: None }
    }
}

#[async_trait]
impl AdvisoryClient for ScriptedClient {
    async fn complete(&self, _prompt: &str) -> AdvisoryResult<String> {
        match &self.response {
            Some(text) => Ok(text.clone()),
            None => Err(AdvisoryError::ConnectionError("unavailable".to_string())),
        }
    }

    fn model_name(&self) -> &str {
        "scripted"
    }

    fn is_configured(&self) -> bool {
        self.response.is_some()
    }
}

#[tokio::test]
async fn test_suggest_parses_clean_json() {
    let client = ScriptedClient::responding(
        r#"{"suggestedTableName": "Shops",
            "dataCleanupSuggestions": ["Normalize phone numbers"],
            "columnTypes": [{"columnName": "Shop_Id", "sqlType": "INT"}]}"#,
    );

    let suggestion = suggest(&client, "Shop_Id\tName\n1\tAnn").await.unwrap();
    assert_eq!(suggestion.suggested_table_name, "Shops");
    assert_eq!(suggestion.data_cleanup_suggestions.len(), 1);
    assert_eq!(suggestion.column_types[0].column_name, "Shop_Id");
}

#[tokio::test]
async fn test_suggest_parses_fenced_json() {
    let client = ScriptedClient::responding(
        "Sure!\n```json\n{\"suggestedTableName\": \"Orders\"}\n```",
    );

    let suggestion = suggest(&client, "Order_Id\n1").await.unwrap();
    assert_eq!(suggestion.suggested_table_name, "Orders");
}

#[tokio::test]
async fn test_unavailable_service_is_a_no_op() {
    let client = ScriptedClient::unavailable();
    assert!(suggest(&client, "Id\n1").await.is_none());
}

#[tokio::test]
async fn test_garbage_response_is_a_no_op() {
    let client = ScriptedClient::responding("I have no idea what this data is.");
    assert!(suggest(&client, "Id\n1").await.is_none());
}

#[test]
fn test_prompt_caps_input_length() {
    let long_input = "Col\n".repeat(5000);
    let prompt = build_analysis_prompt(&long_input, DEFAULT_MAX_INPUT_CHARS);
    // Template overhead aside, the input contribution is bounded.
    assert!(prompt.len() < DEFAULT_MAX_INPUT_CHARS + 1000);
}

#[test]
fn test_response_parsing_tolerates_prose() {
    let suggestion =
        parse_analysis_response("My guess: {\"suggestedTableName\": \"People\"} based on headers")
            .unwrap();
    assert_eq!(suggestion.suggested_table_name, "People");
}

#[test]
fn test_config_from_env_without_key() {
    // The variable is unlikely to be set in CI; either way the config is
    // usable and the credential check is consistent.
    let config = AdvisoryConfig::from_env();
    assert_eq!(config.has_credential(), config.api_key.is_some());
    assert_eq!(config.max_input_chars, DEFAULT_MAX_INPUT_CHARS);
}
