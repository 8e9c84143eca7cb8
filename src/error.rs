//! Error types for the converter.
//!
//! Per-line parse rejects are not represented here: the parser absorbs
//! them locally (see [`crate::classify::LineReject`]). Everything in
//! `ConvertError` is fatal and terminates the run.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the converter library.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Language code not in the supported table.
    #[error("Unknown language code: '{0}'. Supported codes: EN, DE, BG, RU")]
    UnknownLanguage(String),

    /// Encoding label not recognized by encoding_rs.
    #[error("Unknown text encoding: '{0}'. Expected a WHATWG label (e.g., utf-8, windows-1252)")]
    UnknownEncoding(String),

    /// File content cannot be decoded/encoded with the configured encoding.
    #[error("{} is not valid {encoding}", .path.display())]
    Encoding { path: PathBuf, encoding: String },

    /// Store append with an id that already exists.
    #[error("Duplicate entry id {id} in store (internal invariant violation)")]
    DuplicateKey { id: i64 },

    /// SQLite store failure.
    #[error("Store error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for converter operations.
pub type Result<T> = std::result::Result<T, ConvertError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_language_display() {
        let err = ConvertError::UnknownLanguage("XX".to_string());
        assert!(err.to_string().contains("XX"));
        assert!(err.to_string().contains("EN, DE, BG, RU"));
    }

    #[test]
    fn test_encoding_display_names_path_and_encoding() {
        let err = ConvertError::Encoding {
            path: PathBuf::from("/data/dict.txt"),
            encoding: "windows-1251".to_string(),
        };
        assert_eq!(err.to_string(), "/data/dict.txt is not valid windows-1251");
    }

    #[test]
    fn test_duplicate_key_display() {
        let err = ConvertError::DuplicateKey { id: 7 };
        assert!(err.to_string().contains("7"));
    }
}
