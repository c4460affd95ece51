//! Error types for value parsing in conditioner-types.

use thiserror::Error;

/// Errors that can occur when parsing displayed or persisted values.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ParseError {
    /// The text is not a number in the expected notation.
    #[error("Invalid number: {0:?}")]
    InvalidNumber(String),

    /// The text does not name a known control.
    #[error("Unknown key: {0:?}")]
    UnknownKey(String),

    /// The value parsed but lies outside its permitted range.
    #[error("Value {value} is out of range [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },
}

/// Result type alias using conditioner-types' ParseError type.
pub type ParseResult<T> = std::result::Result<T, ParseError>;
