//! Error types for Bricks theme operations
//!
//! Theme operations themselves never fail: malformed input degrades to a
//! default and a warning. These errors surface at the seams where a caller
//! may want to know what went wrong (colour parsing, durable storage).

use palette::rgb::FromHexError;
use std::path::PathBuf;
use thiserror::Error;

/// Colour parsing errors
#[derive(Debug, Error)]
pub enum ColorError {
    /// Wrong number of hex digits after the optional `#`
    #[error("invalid hex color {input:?}: expected 6 hex digits, found {len}")]
    InvalidLength { input: String, len: usize },

    /// A character outside `0-9a-fA-F`
    #[error("invalid hex color {input:?}: non-hex digit")]
    NonHexDigit { input: String },

    /// Digits palette refused to parse
    #[error("invalid hex color {input:?}: {source}")]
    InvalidDigits {
        input: String,
        #[source]
        source: FromHexError,
    },
}

/// Mode name that is not one of `light`, `dark` or `system`
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown theme mode: {0:?}")]
pub struct UnknownMode(pub String);

/// Preference store errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("store I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The backing file does not hold a JSON string map
    #[error("store at {path} is not a valid preference map: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Encoding the preference map failed
    #[error("failed to encode preferences: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;
