//! Error types for the hymac-core crate.

use core::fmt;

/// Error decoding a PIB value or table entry from its byte representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The byte buffer is shorter than the encoded form requires.
    TooShort { expected: usize, actual: usize },
    /// The byte buffer does not have the exact expected length.
    WrongLength { expected: usize, actual: usize },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::TooShort { expected, actual } => {
                write!(f, "value too short: need at least {expected} bytes, got {actual}")
            }
            CodecError::WrongLength { expected, actual } => {
                write!(f, "wrong value length: expected {expected} bytes, got {actual}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for CodecError {}
