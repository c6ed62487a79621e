//! Error types for objview
//!
//! Uses `thiserror` for library errors. The binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for objview operations
pub type ObjviewResult<T> = Result<T, ObjviewError>;

/// Main error type for objview operations
#[derive(Error, Debug)]
pub enum ObjviewError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Input format could not be derived from the file name
    #[error("cannot detect input format of {path} - pass --format json|yaml|toml")]
    UnsupportedFormat { path: PathBuf },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Expansion level beyond the template depth cap
    #[error("expand level {value} exceeds the maximum of {max}")]
    InvalidExpandLevel { value: usize, max: usize },
}

/// Reading a property failed.
///
/// Raised by restricted slots (the equivalent of reflective properties that
/// throw on access). The data iterator recovers from it by skipping the
/// property, so it never reaches callers of the iterator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("property '{property}' is not accessible: {reason}")]
pub struct AccessError {
    pub property: String,
    pub reason: String,
}
