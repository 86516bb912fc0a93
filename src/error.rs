//! Error types for mapprep
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for mapprep operations
pub type PrepResult<T> = Result<T, PrepError>;

/// Main error type for mapprep operations
#[derive(Error, Debug)]
pub enum PrepError {
    /// Map identifier rejected by validation
    #[error("invalid map name '{name}': {reason}")]
    InvalidMapName { name: String, reason: String },

    /// No installation path from config, discovery or the user
    #[error("could not determine the game installation path")]
    InstallationNotFound,

    /// Directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// External compiler binary is missing
    #[error("resource compiler not found at {path}")]
    CompilerNotFound { path: PathBuf },

    /// External compiler returned a failure for an asset
    #[error("resource compiler failed on {asset}: {message}")]
    CompilerFailed { asset: PathBuf, message: String },

    /// Run was cancelled at a prompt
    #[error("aborted by user")]
    Aborted,
}
