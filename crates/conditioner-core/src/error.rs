//! Error types for conditioner-core.
//!
//! Only the settings store produces errors. Rejected edits are not errors:
//! panel operations report them by returning `false` and leaving state
//! untouched.
//!
//! # Recovery
//!
//! | Error | Raised by | Recovery |
//! |-------|-----------|----------|
//! | [`Error::Io`] | load, save | load: defaults + warning; save: logged |
//! | [`Error::Deserialize`] | load | defaults + warning |
//! | [`Error::InvalidSetting`] | load | defaults + warning |
//! | [`Error::Serialize`] | save | logged |

use std::path::PathBuf;

use thiserror::Error;

use conditioner_types::ParseError;

/// Errors that can occur while loading or storing panel settings.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Reading or writing the settings file failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid for the schema.
    #[error("Malformed settings: {0}")]
    Deserialize(#[from] toml::de::Error),

    /// The settings could not be encoded.
    #[error("Failed to encode settings: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// A stored value parsed but violates an invariant.
    #[error("Invalid setting '{key}': {reason}")]
    InvalidSetting { key: &'static str, reason: String },

    /// A stored value could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// No settings have been stored yet.
    #[error("No stored settings")]
    NotFound,
}

impl Error {
    /// Create an invalid-setting error.
    pub fn invalid_setting(key: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidSetting {
            key,
            reason: reason.into(),
        }
    }
}

/// Result type alias using conditioner-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;
