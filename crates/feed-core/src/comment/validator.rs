//! Comment validation

use crate::error::{FeedError, Result};

/// Message reported when a comment is submitted without text
pub const COMMENT_REQUIRED_MESSAGE: &str = "O campo 'Comentário' é obrigatório";

/// Validator for comment submissions
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentValidator;

impl CommentValidator {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// A submission is valid when it has at least one character.
    /// Content is not trimmed.
    pub fn validate_submission(&self, content: &str) -> Result<()> {
        if content.is_empty() {
            return Err(FeedError::Validation(COMMENT_REQUIRED_MESSAGE.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty() {
        let validator = CommentValidator::new();
        assert!(validator.validate_submission("Valid comment").is_ok());
    }

    #[test]
    fn test_validate_empty() {
        let validator = CommentValidator::new();
        let err = validator.validate_submission("").unwrap_err();
        assert_eq!(err.validation_message(), Some(COMMENT_REQUIRED_MESSAGE));
    }

    #[test]
    fn test_whitespace_only_is_accepted() {
        let validator = CommentValidator::new();
        assert!(validator.validate_submission("   ").is_ok());
    }
}
