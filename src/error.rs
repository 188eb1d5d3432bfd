//! Error type shared by dictionary construction.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can abort building a [`crate::Dictionary`].
///
/// Queries never produce errors: a missing translation degrades to the
/// source string instead.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The requested locale tag does not match `xx` or `xx_YY`/`xx_YYY`.
    #[error("invalid locale tag '{0}'")]
    InvalidLocale(String),

    /// Enumerating the translation directory failed.
    #[error("failed to walk translation directory: {0}")]
    Walk(#[from] ignore::Error),

    /// A matched translation file could not be read.
    #[error("failed to read translation file '{path}': {source}")]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A matched translation file could not be decoded.
    #[error("failed to decode translation file '{path}': {source}")]
    Decode {
        /// File that failed to decode.
        path: PathBuf,
        /// Underlying JSON error.
        source: serde_json::Error,
    },

    /// Building the filename matcher failed.
    ///
    /// Unreachable for locales that passed validation, surfaced instead of
    /// panicking.
    #[error("failed to build filename matcher: {0}")]
    Pattern(#[from] globset::Error),
}
