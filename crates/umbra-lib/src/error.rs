//! Error types for `umbra-lib`.
//!
//! Variants fall into three groups: malformed data found while loading,
//! lookups that reference something absent, and storage I/O failures.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for umbra-lib operations.
#[derive(Error, Debug)]
pub enum UmbraError {
    // === Malformed Data ===
    /// A stored document violates the expected schema.
    #[error("Malformed data in {source_name}: {reason}")]
    MalformedData { source_name: String, reason: String },

    /// Two issue records share the same id.
    #[error("Duplicate issue id: {id}")]
    DuplicateId { id: i64 },

    /// Status string is neither `open` nor `closed`.
    #[error("Invalid status: {status}")]
    InvalidStatus { status: String },

    // === Lookup Errors ===
    /// Issue with the specified id was not found.
    #[error("Issue not found: {id}")]
    IssueNotFound { id: i64 },

    /// Locale is not present in the catalog.
    #[error("Locale not found: {locale}")]
    LocaleNotFound { locale: String },

    /// Locale exists but does not define the key.
    #[error("Key '{key}' not found for locale {locale}")]
    KeyNotFound { locale: String, key: String },

    // === Configuration Errors ===
    #[error("Configuration error: {0}")]
    Config(String),

    // === Storage Errors ===
    /// Issue file not found at the specified path.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Translation catalog file not found at the specified path.
    #[error("Translations file missing at {0}")]
    MissingCatalog(PathBuf),

    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl UmbraError {
    #[must_use]
    pub fn malformed(source_name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::MalformedData {
            source_name: source_name.into(),
            reason: reason.into(),
        }
    }

    /// Stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::MalformedData { .. } | Self::DuplicateId { .. } | Self::InvalidStatus { .. } => {
                "malformed_data"
            }
            Self::IssueNotFound { .. } => "issue_not_found",
            Self::LocaleNotFound { .. } => "locale_not_found",
            Self::KeyNotFound { .. } => "key_not_found",
            Self::Config(_) => "config_error",
            Self::FileNotFound(_) | Self::MissingCatalog(_) | Self::Io(_) | Self::Json(_) => {
                "io_failure"
            }
        }
    }

    /// True for errors caused by a reference to an absent issue, locale or key.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::IssueNotFound { .. } | Self::LocaleNotFound { .. } | Self::KeyNotFound { .. }
        )
    }
}

/// Result type using `UmbraError`.
pub type Result<T> = std::result::Result<T, UmbraError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_stable() {
        assert_eq!(
            UmbraError::LocaleNotFound {
                locale: "it".into()
            }
            .code(),
            "locale_not_found"
        );
        assert_eq!(
            UmbraError::KeyNotFound {
                locale: "fr".into(),
                key: "nope".into()
            }
            .code(),
            "key_not_found"
        );
        assert_eq!(UmbraError::DuplicateId { id: 3 }.code(), "malformed_data");
        assert_eq!(
            UmbraError::MissingCatalog(PathBuf::from("x.json")).code(),
            "io_failure"
        );
    }

    #[test]
    fn test_not_found_group() {
        assert!(UmbraError::IssueNotFound { id: 9 }.is_not_found());
        assert!(!UmbraError::malformed("issues", "bad").is_not_found());
        assert!(!UmbraError::Config("x".into()).is_not_found());
    }

    #[test]
    fn test_display_messages() {
        let err = UmbraError::KeyNotFound {
            locale: "fr".into(),
            key: "unknown-key".into(),
        };
        assert_eq!(err.to_string(), "Key 'unknown-key' not found for locale fr");
        assert_eq!(
            UmbraError::IssueNotFound { id: 42 }.to_string(),
            "Issue not found: 42"
        );
    }
}
