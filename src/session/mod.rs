//! Session state for presentation layers
//!
//! A [`Session`] owns what the user edits - the raw pasted text and the
//! [`GenerationSettings`] - and keeps the parsed data and generated SQL as
//! purely derived values, recomputed on every change. There is no caching
//! beyond the latest computation and no background work: each change runs
//! the whole parse → generate pipeline to completion.
//!
//! Primary-key auto-detection is an explicit step the session invokes after
//! a parse, and only while no primary key is set. It is never a side effect
//! of a derivation, and it never overrides a user-chosen key.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::clipboard::Clipboard;
use crate::generate::generate;
use crate::models::{GenerationSettings, ParsedData, SqlOperation};
use crate::parse::{Delimiter, parse, sniff_delimiter};

static PRIMARY_KEY_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)_id$").unwrap());

/// Pick the primary-key column from parsed headers, if any qualifies.
///
/// The first header ending in `_id` (case-insensitive) or equal to `id`
/// (case-insensitive) wins. Returns `None` when nothing matches.
pub fn detect_primary_key(headers: &[String]) -> Option<&str> {
    headers
        .iter()
        .map(String::as_str)
        .find(|h| PRIMARY_KEY_REGEX.is_match(h) || h.eq_ignore_ascii_case("id"))
}

/// Editable state plus its derived outputs.
///
/// The derived fields (`parsed`, `sql`) are rebuilt by [`Session::recompute`]
/// after every mutation; they are never patched in place.
#[derive(Debug, Clone)]
pub struct Session {
    raw_input: String,
    settings: GenerationSettings,
    parsed: ParsedData,
    sql: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Empty session with default settings
    pub fn new() -> Self {
        Self::with_settings(GenerationSettings::default())
    }

    /// Empty session with the given settings
    pub fn with_settings(settings: GenerationSettings) -> Self {
        let mut session = Self {
            raw_input: String::new(),
            settings,
            parsed: ParsedData::empty(),
            sql: String::new(),
        };
        session.recompute();
        session
    }

    /// Replace the pasted input.
    ///
    /// Reparses, runs primary-key auto-detection when no key is currently
    /// set, and regenerates the SQL.
    pub fn set_input(&mut self, raw: impl Into<String>) {
        self.raw_input = raw.into();
        self.parsed = parse(&self.raw_input);

        if !self.settings.has_primary_key() {
            if let Some(pk) = detect_primary_key(&self.parsed.headers) {
                self.settings.primary_key = pk.to_string();
            }
        }

        self.sql = generate(&self.parsed, &self.settings);
    }

    /// Set the target table name and regenerate
    pub fn set_table_name(&mut self, table_name: impl Into<String>) {
        self.settings.table_name = table_name.into();
        self.recompute();
    }

    /// Set the operation and regenerate
    pub fn set_operation(&mut self, operation: SqlOperation) {
        self.settings.operation = operation;
        self.recompute();
    }

    /// Set the primary key and regenerate. An explicit user choice; the
    /// auto-detection step will not touch it afterwards.
    pub fn set_primary_key(&mut self, primary_key: impl Into<String>) {
        self.settings.primary_key = primary_key.into();
        self.recompute();
    }

    /// Toggle identity-insert wrapping and regenerate
    pub fn set_identity_insert(&mut self, enabled: bool) {
        self.settings.identity_insert = enabled;
        self.recompute();
    }

    /// Discard the input and any auto-detected primary key.
    ///
    /// Table name, operation and identity-insert survive a clear.
    pub fn clear(&mut self) {
        self.raw_input.clear();
        self.settings.primary_key.clear();
        self.recompute();
    }

    /// Current raw input
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    /// Current settings
    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Latest parsed data
    pub fn parsed(&self) -> &ParsedData {
        &self.parsed
    }

    /// Latest generated SQL (or a `--` comment on degenerate input)
    pub fn output(&self) -> &str {
        &self.sql
    }

    /// The delimiter sniffed from the current input's first line, if the
    /// input is non-empty. Exposed for UI display only.
    pub fn delimiter(&self) -> Option<Delimiter> {
        let trimmed = self.raw_input.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(sniff_delimiter(trimmed.lines().next().unwrap_or_default()))
    }

    /// Write the current output through the given clipboard.
    ///
    /// Returns whether the write succeeded, for a transient UI
    /// acknowledgment. Failure is logged and otherwise swallowed - it never
    /// reaches pipeline state.
    pub fn copy_output(&self, clipboard: &mut dyn Clipboard) -> bool {
        match clipboard.write(&self.sql) {
            Ok(()) => true,
            Err(e) => {
                warn!("failed to copy generated SQL to clipboard: {e}");
                false
            }
        }
    }

    fn recompute(&mut self) {
        self.parsed = parse(&self.raw_input);
        self.sql = generate(&self.parsed, &self.settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::MockClipboard;
    use crate::generate::NO_DATA_COMMENT;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_detect_primary_key_suffix() {
        let hs = headers(&["Name", "Shop_Id", "City"]);
        assert_eq!(detect_primary_key(&hs), Some("Shop_Id"));
    }

    #[test]
    fn test_detect_primary_key_exact_id() {
        let hs = headers(&["Name", "ID"]);
        assert_eq!(detect_primary_key(&hs), Some("ID"));
    }

    #[test]
    fn test_detect_primary_key_case_insensitive_suffix() {
        let hs = headers(&["shop_ID", "Name"]);
        assert_eq!(detect_primary_key(&hs), Some("shop_ID"));
    }

    #[test]
    fn test_detect_primary_key_no_match() {
        // "Identifier" neither ends in _id nor equals id.
        let hs = headers(&["Identifier", "Name"]);
        assert_eq!(detect_primary_key(&hs), None);
    }

    #[test]
    fn test_new_session_outputs_no_data_comment() {
        let session = Session::new();
        assert_eq!(session.output(), NO_DATA_COMMENT);
        assert_eq!(session.delimiter(), None);
    }

    #[test]
    fn test_set_input_recomputes() {
        let mut session = Session::new();
        session.set_input("Name\tCity\nAnn\tBerlin");
        assert!(session.output().starts_with("INSERT INTO [TargetTable]"));
        assert_eq!(session.delimiter(), Some(Delimiter::Tab));
    }

    #[test]
    fn test_auto_detects_primary_key_once() {
        let mut session = Session::new();
        session.set_input("Shop_Id\tName\n1\tAnn");
        assert_eq!(session.settings().primary_key, "Shop_Id");
    }

    #[test]
    fn test_auto_detection_does_not_override_user_key() {
        let mut session = Session::new();
        session.set_primary_key("Name");
        session.set_input("Shop_Id\tName\n1\tAnn");
        assert_eq!(session.settings().primary_key, "Name");
    }

    #[test]
    fn test_settings_change_regenerates() {
        let mut session = Session::new();
        session.set_input("Id\tName\n1\tAnn");
        session.set_table_name("People");
        assert!(session.output().contains("INSERT INTO [People]"));

        session.set_operation(SqlOperation::Update);
        assert!(session.output().starts_with("UPDATE [People]"));
    }

    #[test]
    fn test_clear_resets_input_and_detected_key() {
        let mut session = Session::new();
        session.set_table_name("People");
        session.set_identity_insert(true);
        session.set_input("Shop_Id\tName\n1\tAnn");
        assert_eq!(session.settings().primary_key, "Shop_Id");

        session.clear();
        assert_eq!(session.raw_input(), "");
        assert_eq!(session.settings().primary_key, "");
        assert_eq!(session.output(), NO_DATA_COMMENT);
        // Other settings survive.
        assert_eq!(session.settings().table_name, "People");
        assert!(session.settings().identity_insert);
    }

    #[test]
    fn test_copy_output_success() {
        let mut session = Session::new();
        session.set_input("Id\n1");
        let mut clipboard = MockClipboard::new();
        assert!(session.copy_output(&mut clipboard));
        assert_eq!(clipboard.writes, vec![session.output().to_string()]);
    }

    #[test]
    fn test_copy_output_failure_is_swallowed() {
        let mut session = Session::new();
        session.set_input("Id\n1");
        let before = session.output().to_string();
        let mut clipboard = MockClipboard::failing();
        assert!(!session.copy_output(&mut clipboard));
        // Session state is untouched by the failure.
        assert_eq!(session.output(), before);
    }
}
