//! Advisory client trait and test double

use async_trait::async_trait;

#[cfg(test)]
use super::error::AdvisoryError;
use super::error::AdvisoryResult;

/// Trait for advisory service backends.
///
/// One text-in/text-out operation; prompt construction and response parsing
/// live in [`super::prompt`] so every backend shares them.
#[async_trait]
pub trait AdvisoryClient: Send + Sync {
    /// Send a prompt and return the raw text response
    async fn complete(&self, prompt: &str) -> AdvisoryResult<String>;

    /// Model name in use
    fn model_name(&self) -> &str;

    /// Whether the client has what it needs to make a request
    fn is_configured(&self) -> bool;
}

/// A mock advisory client for tests
#[cfg(test)]
pub struct MockAdvisoryClient {
    response: String,
    should_fail: bool,
}

#[cfg(test)]
impl MockAdvisoryClient {
    /// Mock returning the given response text
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            should_fail: false,
        }
    }

    /// Mock that fails every request
    pub fn failing() -> Self {
        Self {
            response: String::new(),
            should_fail: true,
        }
    }
}

#[cfg(test)]
#[async_trait]
impl AdvisoryClient for MockAdvisoryClient {
    async fn complete(&self, _prompt: &str) -> AdvisoryResult<String> {
        if self.should_fail {
            Err(AdvisoryError::ConnectionError("mock failure".to_string()))
        } else {
            Ok(self.response.clone())
        }
    }

    fn model_name(&self) -> &str {
        "mock-model"
    }

    fn is_configured(&self) -> bool {
        !self.should_fail
    }
}
