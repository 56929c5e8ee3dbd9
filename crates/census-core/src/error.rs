//! Error types for Census core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for Census operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during extraction.
///
/// Note that an unresolvable dynamic specifier is NOT an error: it is
/// recorded as [`crate::Specifier::Unresolved`] and the scan continues.
#[derive(Debug, Error)]
pub enum Error {
    /// A file handed to the extractor does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// Source text is not syntactically valid and the parser gave up.
    #[error("Parse error in {file}: {message}")]
    Parse {
        /// File that failed to parse.
        file: PathBuf,
        /// Rendered parser diagnostics.
        message: String,
    },

    /// File exceeds the configured size limit.
    #[error("{path} is {size} bytes, max allowed is {max_allowed}")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_allowed: u64,
    },

    /// No extractor handles this file extension.
    #[error("No extractor found for file extension: {extension}")]
    UnsupportedExtension {
        /// The file extension that no extractor supports.
        extension: String,
    },

    /// Configuration is invalid.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Description of the configuration error.
        message: String,
    },

    /// TOML parsing error (.census.toml).
    #[error("TOML parse error in {file}: {source}")]
    TomlError {
        /// Path to the TOML file with the error.
        file: PathBuf,
        /// The underlying TOML parsing error.
        #[source]
        source: toml::de::Error,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
