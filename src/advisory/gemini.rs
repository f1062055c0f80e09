//! Gemini API client for online advisory analysis
//!
//! Posts the analysis prompt to the Gemini `generateContent` endpoint with a
//! JSON response mime-type. Compiled to a stub returning
//! [`AdvisoryError::FeatureNotAvailable`] when the `advisory-online` feature
//! is off, so callers can hold a client unconditionally.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::client::AdvisoryClient;
#[cfg(feature = "advisory-online")]
use super::config::API_KEY_ENV;
use super::config::AdvisoryConfig;
use super::error::{AdvisoryError, AdvisoryResult};

/// Advisory client backed by the Gemini HTTP API
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: AdvisoryConfig,
    #[cfg(feature = "advisory-online")]
    client: reqwest::Client,
}

/// Request body for the generateContent endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
#[allow(dead_code)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
#[allow(dead_code)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
#[allow(dead_code)]
struct GenerationConfig {
    response_mime_type: &'static str,
    temperature: f32,
}

/// Response from the generateContent endpoint
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct CandidatePart {
    #[serde(default)]
    text: String,
}

impl GeminiClient {
    /// Create a client from the given configuration
    #[cfg(feature = "advisory-online")]
    pub fn new(config: AdvisoryConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Create a client (stub for when the online feature is disabled)
    #[cfg(not(feature = "advisory-online"))]
    pub fn new(config: AdvisoryConfig) -> Self {
        Self { config }
    }

    /// Client configured from the environment (`GEMINI_API_KEY`)
    pub fn from_env() -> Self {
        Self::new(AdvisoryConfig::from_env())
    }

    /// The active configuration
    pub fn config(&self) -> &AdvisoryConfig {
        &self.config
    }
}

#[cfg(feature = "advisory-online")]
#[async_trait]
impl AdvisoryClient for GeminiClient {
    async fn complete(&self, prompt: &str) -> AdvisoryResult<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(AdvisoryError::MissingCredential(API_KEY_ENV))?;

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint, self.config.model
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                temperature: self.config.temperature,
            },
        };

        tracing::debug!("Sending analysis request to {}", url);

        let response = self
            .client
            .post(&url)
            .query(&[("key", api_key)])
            .json(&request)
            .timeout(std::time::Duration::from_secs(self.config.timeout_seconds))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AdvisoryError::Timeout(self.config.timeout_seconds)
                } else {
                    AdvisoryError::ConnectionError(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AdvisoryError::ConnectionError(format!(
                "Advisory API error (HTTP {status}): {body}"
            )));
        }

        let payload: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| AdvisoryError::ParseError(e.to_string()))?;

        let text = payload
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                AdvisoryError::InvalidResponse("response contained no candidate text".to_string())
            })?;

        Ok(text)
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }

    fn is_configured(&self) -> bool {
        self.config.has_credential()
    }
}

#[cfg(not(feature = "advisory-online"))]
#[async_trait]
impl AdvisoryClient for GeminiClient {
    async fn complete(&self, _prompt: &str) -> AdvisoryResult<String> {
        Err(AdvisoryError::FeatureNotAvailable(
            "online analysis",
            "advisory-online",
        ))
    }

    fn model_name(&self) -> &str {
        &self.config.model
    }

    fn is_configured(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_carries_config() {
        let client = GeminiClient::new(AdvisoryConfig::new().with_model("test-model"));
        assert_eq!(client.model_name(), "test-model");
    }

    #[test]
    fn test_unconfigured_without_key() {
        let client = GeminiClient::new(AdvisoryConfig::new());
        assert!(!client.is_configured());
    }

    #[test]
    fn test_request_serialization() {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: "analyze" }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json",
                temperature: 0.1,
            },
        };

        let json = serde_json::to_string(&request).unwrap();
        assert!(json.contains("\"analyze\""));
        assert!(json.contains("\"responseMimeType\":\"application/json\""));
    }

    #[test]
    fn test_response_deserialization() {
        let json = r#"{
            "candidates": [
                {"content": {"parts": [{"text": "{\"suggestedTableName\": \"Shops\"}"}]}}
            ]
        }"#;

        let response: GenerateContentResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.candidates.len(), 1);
        assert!(
            response.candidates[0].content.parts[0]
                .text
                .contains("Shops")
        );
    }

    #[test]
    fn test_response_deserialization_empty() {
        let response: GenerateContentResponse = serde_json::from_str("{}").unwrap();
        assert!(response.candidates.is_empty());
    }
}
