use alloc::string::String;
use core::fmt;

use thiserror::Error;

/// The grammar a failed input was validated against.
///
/// Carried by [`NumberError::InvalidFormat`] and rendered into its message.
/// The decimal-with-exponent entry point reports its grammar as `Float`,
/// matching the float grammar's error label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberKind {
    /// Sign? DigitSequence.
    Integer,
    /// Sign? (DigitSequence? `.`)? DigitSequence, optionally with exponent.
    Float,
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberKind::Integer => f.write_str("integer"),
            NumberKind::Float => f.write_str("float"),
        }
    }
}

/// Failure to validate or convert a number string.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NumberError {
    /// The input is not a canonical rendering of the requested grammar, or
    /// matches the grammar but denotes negative zero. The two causes are
    /// deliberately not distinguished.
    #[error("Invalid value \"{value}\" - expected {kind} number")]
    InvalidFormat {
        /// The offending input, verbatim.
        value: String,
        /// The grammar that was being validated against.
        kind: NumberKind,
    },

    /// The input is a canonical integer whose value does not fit in `i64`.
    /// Validation has succeeded; only the conversion step failed.
    #[error("Value \"{value}\" is out of range for a 64-bit integer")]
    OutOfRange {
        /// The offending input, verbatim.
        value: String,
    },
}

impl NumberError {
    pub(crate) fn invalid_format(value: &str, kind: NumberKind) -> Self {
        NumberError::InvalidFormat {
            value: value.into(),
            kind,
        }
    }

    pub(crate) fn out_of_range(value: &str) -> Self {
        NumberError::OutOfRange {
            value: value.into(),
        }
    }
}
