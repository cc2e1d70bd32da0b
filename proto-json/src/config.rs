//! Encode and decode options.
//!
//! # Example
//! ```rust
//! use proto_json::{DecodeOptions, EncodeOptions};
//!
//! let encode = EncodeOptions::pretty(2);
//! assert!(encode.is_pretty());
//!
//! let decode = DecodeOptions::default().with_ignore_unknown_fields(false);
//! assert!(!decode.ignore_unknown_fields);
//! assert!(decode.null_as_default);
//! ```

use serde::{Deserialize, Serialize};

/// Options for producing JSON text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// Spaces per nesting level. `0` produces compact single-line output.
    pub indent: usize,
}

impl EncodeOptions {
    /// Create options for compact output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Compact single-line output.
    pub fn compact() -> Self {
        Self { indent: 0 }
    }

    /// Pretty-printed output with `indent` spaces per level.
    pub fn pretty(indent: usize) -> Self {
        Self { indent }
    }

    /// Set the indent width.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Whether output spans multiple lines.
    pub fn is_pretty(&self) -> bool {
        self.indent > 0
    }
}

/// Options for reading JSON into messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
    /// Skip keys the descriptor does not declare. When `false`, an unknown
    /// key is an invalid value.
    pub ignore_unknown_fields: bool,

    /// Treat an explicit `null` like an absent key. When `false`, `null` is
    /// an invalid value.
    pub null_as_default: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            ignore_unknown_fields: true,
            null_as_default: true,
        }
    }
}

impl DecodeOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject unknown keys and `null` values.
    pub fn strict() -> Self {
        Self {
            ignore_unknown_fields: false,
            null_as_default: false,
        }
    }

    /// Set whether unknown keys are skipped.
    pub fn with_ignore_unknown_fields(mut self, ignore: bool) -> Self {
        self.ignore_unknown_fields = ignore;
        self
    }

    /// Set whether `null` falls back to the field default.
    pub fn with_null_as_default(mut self, null_as_default: bool) -> Self {
        self.null_as_default = null_as_default;
        self
    }
}
