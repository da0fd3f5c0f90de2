//! Error types for grid-definition parsing.

use thiserror::Error;

/// Result type alias using GridParseError.
pub type GridResult<T> = Result<T, GridParseError>;

/// Errors raised while turning a catalog grid definition into typed parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GridParseError {
    #[error("Grid definition '{family}' is missing parameter {index}")]
    MissingParameter { family: String, index: usize },

    #[error("Invalid number in grid definition: '{0}'")]
    InvalidNumber(String),

    #[error("Invalid latitude '{0}'. Expected a value ending in 'N' or 'S'")]
    InvalidLatitude(String),

    #[error("Invalid longitude '{0}'. Expected a value ending in 'E' or 'W'")]
    InvalidLongitude(String),

    #[error("Invalid hemisphere '{0}'. Expected 'N' or 'S'")]
    InvalidHemisphere(String),
}
