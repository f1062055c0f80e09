//! Configuration for the advisory service

use serde::{Deserialize, Serialize};

/// Environment variable holding the advisory API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// How much of the pasted input is sent for analysis, in characters
pub const DEFAULT_MAX_INPUT_CHARS: usize = 3000;

/// Configuration for advisory requests
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryConfig {
    /// Base URL of the advisory API
    pub endpoint: String,

    /// Model name to use
    pub model: String,

    /// API key. Never serialized; load it from the environment.
    #[serde(skip)]
    pub api_key: Option<String>,

    /// Request timeout in seconds
    pub timeout_seconds: u64,

    /// Only this many leading characters of the input are sent
    pub max_input_chars: usize,

    /// Sampling temperature
    pub temperature: f32,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.0-flash".to_string(),
            api_key: None,
            timeout_seconds: 30,
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
            temperature: 0.1,
        }
    }
}

impl AdvisoryConfig {
    /// Configuration with defaults and no credential
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration with the API key taken from the environment, if set
    pub fn from_env() -> Self {
        Self {
            api_key: std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty()),
            ..Self::default()
        }
    }

    /// Set the endpoint
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Set the model name
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Set how many input characters are sent
    pub fn with_max_input_chars(mut self, chars: usize) -> Self {
        self.max_input_chars = chars;
        self
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature.clamp(0.0, 2.0);
        self
    }

    /// Whether a credential is configured
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }
}
