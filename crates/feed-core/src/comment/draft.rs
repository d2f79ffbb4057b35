//! Pending comment text of one post

use serde::{Deserialize, Serialize};

/// The in-progress, unsubmitted comment of a post
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    text: String,
    /// Message of the last rejected submit, cleared by any edit
    #[serde(default, skip_serializing_if = "Option::is_none")]
    invalid: Option<String>,
}

impl Draft {
    /// Create an empty draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the text and clear any validation failure
    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.invalid = None;
    }

    /// Current text
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Empty means zero length; whitespace counts as content
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Record a validation failure
    pub fn mark_invalid(&mut self, message: impl Into<String>) {
        self.invalid = Some(message.into());
    }

    /// Message of the last rejected submit, if not edited since
    pub fn validation_message(&self) -> Option<&str> {
        self.invalid.as_deref()
    }

    /// Take the text out, leaving the draft empty
    pub fn take(&mut self) -> String {
        self.invalid = None;
        std::mem::take(&mut self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_text() {
        let mut draft = Draft::new();
        draft.set("hello");
        draft.set("bye");
        assert_eq!(draft.as_str(), "bye");
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut once = Draft::new();
        once.set("same");
        let mut twice = Draft::new();
        twice.set("same");
        twice.set("same");
        assert_eq!(once, twice);
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        let mut draft = Draft::new();
        assert!(draft.is_empty());
        draft.set("   ");
        assert!(!draft.is_empty());
    }

    #[test]
    fn test_set_clears_validation_failure() {
        let mut draft = Draft::new();
        draft.mark_invalid("required");
        assert_eq!(draft.validation_message(), Some("required"));
        draft.set("x");
        assert_eq!(draft.validation_message(), None);
    }

    #[test]
    fn test_take_resets() {
        let mut draft = Draft::new();
        draft.set("nice!");
        assert_eq!(draft.take(), "nice!");
        assert!(draft.is_empty());
    }
}
