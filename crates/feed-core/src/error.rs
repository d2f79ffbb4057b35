//! Error types for feedview

use crate::types::PostId;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for feedview
#[derive(Debug, Error)]
pub enum FeedError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Post not found
    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<FeedError>,
    },
}

impl FeedError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        FeedError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The user-facing message of a validation failure, if this is one
    pub fn validation_message(&self) -> Option<&str> {
        match self {
            FeedError::Validation(msg) => Some(msg),
            FeedError::WithContext { source, .. } => source.validation_message(),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for FeedError {
    fn from(err: toml::de::Error) -> Self {
        FeedError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for FeedError {
    fn from(err: toml::ser::Error) -> Self {
        FeedError::Toml(err.to_string())
    }
}

/// Result type alias for feedview
pub type Result<T> = std::result::Result<T, FeedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FeedError::PostNotFound(PostId(7));
        assert_eq!(err.to_string(), "Post not found: 7");
    }

    #[test]
    fn test_error_with_context() {
        let err = FeedError::Validation("empty".to_string());
        let err = err.with_context("Failed to publish comment");
        assert!(err.to_string().contains("Failed to publish comment"));
        assert_eq!(err.validation_message(), Some("empty"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: FeedError = io_err.into();
        assert!(matches!(err, FeedError::Io(_)));
        assert!(err.validation_message().is_none());
    }

    #[test]
    fn test_toml_error_conversion() {
        let err: FeedError = toml::from_str::<toml::Value>("= nope").unwrap_err().into();
        assert!(matches!(err, FeedError::Toml(_)));
    }
}
