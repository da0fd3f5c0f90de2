//! Error types for extent resolution.

use crate::bitmap::BitmapError;
use grid_common::GridParseError;
use thiserror::Error;

/// Errors that can occur while computing a dataset's extent.
#[derive(Error, Debug)]
pub enum ExtentError {
    /// The dataset's grid bitmap could not be decoded.
    #[error("bitmap decode error: {0}")]
    Bitmap(#[from] BitmapError),

    /// A grid definition had malformed parameters.
    #[error("grid definition error: {0}")]
    Grid(#[from] GridParseError),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// A grid catalog file could not be read or parsed.
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Storage/IO error.
    #[error("io error: {0}")]
    Io(String),
}

impl ExtentError {
    /// Create a Config error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a Catalog error.
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }
}

impl From<std::io::Error> for ExtentError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_yaml::Error> for ExtentError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Catalog(format!("YAML error: {}", err))
    }
}

impl From<serde_json::Error> for ExtentError {
    fn from(err: serde_json::Error) -> Self {
        Self::Catalog(format!("JSON error: {}", err))
    }
}

/// Result type for extent operations.
pub type ExtentResult<T> = std::result::Result<T, ExtentError>;
