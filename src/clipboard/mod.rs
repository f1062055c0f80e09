//! Clipboard collaborator
//!
//! The generated SQL is handed to the system clipboard through the
//! [`Clipboard`] trait so presentation layers can swap implementations
//! (system clipboard, test double, none at all). Write failures are the
//! caller's to log; they never feed back into the pipeline.

/// Error type for clipboard writes
#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),
    #[error("Clipboard write failed: {0}")]
    WriteFailed(String),
}

/// Trait for clipboard sinks
///
/// One operation: a scoped write of a string. Implementations must not
/// panic on failure - callers treat an `Err` as a logged, non-fatal event.
pub trait Clipboard {
    /// Write the given text to the clipboard
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

#[cfg(feature = "clipboard")]
pub mod system;

#[cfg(feature = "clipboard")]
pub use system::SystemClipboard;

/// A clipboard double for tests: records writes or simulates failure
#[cfg(test)]
pub struct MockClipboard {
    /// Every successfully written payload, newest last
    pub writes: Vec<String>,
    should_fail: bool,
}

#[cfg(test)]
impl MockClipboard {
    pub fn new() -> Self {
        Self {
            writes: Vec::new(),
            should_fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            writes: Vec::new(),
            should_fail: true,
        }
    }
}

#[cfg(test)]
impl Clipboard for MockClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.should_fail {
            return Err(ClipboardError::WriteFailed("mock failure".to_string()));
        }
        self.writes.push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_records_writes() {
        let mut clipboard = MockClipboard::new();
        clipboard.write("SELECT 1;").unwrap();
        assert_eq!(clipboard.writes, vec!["SELECT 1;"]);
    }

    #[test]
    fn test_mock_failure() {
        let mut clipboard = MockClipboard::failing();
        let result = clipboard.write("SELECT 1;");
        assert!(matches!(result, Err(ClipboardError::WriteFailed(_))));
        assert!(clipboard.writes.is_empty());
    }
}
