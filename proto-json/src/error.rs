//! Error types for codec operations.
//!
//! Every failure raised by the codec is a [`CodecError`]. Errors are raised at
//! the point of detection and never retried or swallowed; a failed decode
//! never hands back a partially filled message.
//!
//! # Error Codes
//!
//! Each variant maps to a [`CodecErrorCode`], which serializes to a
//! SCREAMING_SNAKE_CASE string for callers that forward errors over the wire.
//!
//! # Example
//! ```rust
//! use proto_json::{to_json, CodecErrorCode};
//!
//! let err = to_json(None, 0).unwrap_err();
//! assert_eq!(err.code(), CodecErrorCode::InvalidArgument);
//! assert!(err.to_string().contains("cannot be null"));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::descriptor::MessageDescriptor;

/// Result type alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Type-safe error codes for codec failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CodecErrorCode {
    /// The caller passed a structurally wrong value
    InvalidArgument,
    /// Input text is not valid JSON
    ParseError,
    /// A message type does not satisfy the descriptor contract
    SchemaError,
    /// A JSON value does not fit the field it is assigned to
    InvalidValue,
    /// Writing JSON text failed
    EncodingError,
}

impl CodecErrorCode {
    /// Returns the string representation of the error code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::ParseError => "PARSE_ERROR",
            Self::SchemaError => "SCHEMA_ERROR",
            Self::InvalidValue => "INVALID_VALUE",
            Self::EncodingError => "ENCODING_ERROR",
        }
    }

    /// Returns true if the error was caused by caller input rather than by
    /// a code generation or wiring defect.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument | Self::ParseError | Self::InvalidValue
        )
    }
}

impl fmt::Display for CodecErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error raised by [`to_json`](crate::to_json), [`from_json`](crate::from_json)
/// and the registry.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Caller passed a null message or an unusable message class.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Input text could not be parsed as JSON.
    #[error("Failed to parse JSON: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    /// A message type is missing its descriptor or disagrees with it.
    #[error("schema error: {0}")]
    Schema(String),

    /// A JSON value has the wrong shape for the field it targets.
    #[error("invalid value at `{path}`: expected {expected}, found {found}")]
    InvalidValue {
        /// Dotted path of the offending value, rooted at the message name.
        path: String,
        /// What the descriptor requires.
        expected: String,
        /// What the JSON contained.
        found: String,
    },

    /// JSON text could not be produced.
    #[error("failed to encode JSON: {0}")]
    Encoding(String),
}

impl CodecError {
    /// Returns the error code for this error.
    pub fn code(&self) -> CodecErrorCode {
        match self {
            Self::InvalidArgument(_) => CodecErrorCode::InvalidArgument,
            Self::Parse { .. } => CodecErrorCode::ParseError,
            Self::Schema(_) => CodecErrorCode::SchemaError,
            Self::InvalidValue { .. } => CodecErrorCode::InvalidValue,
            Self::Encoding(_) => CodecErrorCode::EncodingError,
        }
    }

    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a schema error.
    pub fn schema(message: impl Into<String>) -> Self {
        Self::Schema(message.into())
    }

    /// Create an invalid value error.
    pub fn invalid_value(
        path: impl Into<String>,
        expected: impl Into<String>,
        found: impl Into<String>,
    ) -> Self {
        Self::InvalidValue {
            path: path.into(),
            expected: expected.into(),
            found: found.into(),
        }
    }

    /// Error for a field index a message type does not declare.
    ///
    /// Generated `set_field` implementations return this from their
    /// fallback arm.
    pub fn unknown_field(descriptor: &MessageDescriptor, index: usize) -> Self {
        Self::Schema(format!(
            "message type `{}` has no field at index {}",
            descriptor.full_name(),
            index
        ))
    }

    pub(crate) fn parse(source: serde_json::Error) -> Self {
        Self::Parse { source }
    }
}
