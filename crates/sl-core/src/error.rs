//! Error types for sl-core

use thiserror::Error;

/// Core error type for Starlift
#[derive(Error, Debug)]
pub enum CoreError {
    /// E001: Configuration file not found
    #[error("[E001] Config file not found: {path}")]
    ConfigNotFound { path: String },

    /// E002: Invalid configuration value
    #[error("[E002] Invalid config: {message}")]
    ConfigInvalid { message: String },

    /// E003: IO error with file path context
    #[error("[E003] Failed to access '{path}': {source}")]
    IoWithPath {
        path: String,
        source: std::io::Error,
    },

    /// E004: IO error
    #[error("[E004] IO error: {0}")]
    Io(#[from] std::io::Error),

    /// E005: Config/YAML parse error
    #[error("[E005] Config parse error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// E006: CSV read failure with file path context
    #[error("[E006] Failed to read CSV '{path}': {source}")]
    CsvRead { path: String, source: csv::Error },

    /// E007: CSV write failure with file path context
    #[error("[E007] Failed to write CSV '{path}': {source}")]
    CsvWrite { path: String, source: csv::Error },
}

/// Result type alias for CoreError
pub type CoreResult<T> = Result<T, CoreError>;
