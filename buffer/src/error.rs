//! Error types for buffer operations.

use std::fmt;

/// Result type for buffer operations.
pub type BufResult<T> = Result<T, BufError>;

/// Errors that can occur while reading from a [`PacketBuf`](crate::PacketBuf).
///
/// Writes grow the buffer on demand and cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufError {
    /// Attempted to read past the end of the readable region.
    UnexpectedEnd {
        /// Number of bytes requested.
        requested: usize,
        /// Number of bytes available.
        available: usize,
    },

    /// A variable-length integer ran past its maximum encoded size.
    VarIntTooLong {
        /// Maximum number of bytes allowed for this varint width.
        max_bytes: usize,
    },

    /// Attempted to move the read cursor outside the readable region.
    ReaderIndexOutOfBounds {
        /// The requested read cursor position.
        index: usize,
        /// The current write cursor position (upper bound).
        writer_index: usize,
    },
}

impl fmt::Display for BufError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEnd {
                requested,
                available,
            } => {
                write!(
                    f,
                    "attempted to read {requested} bytes but only {available} bytes available"
                )
            }
            Self::VarIntTooLong { max_bytes } => {
                write!(f, "varint exceeds maximum encoded size of {max_bytes} bytes")
            }
            Self::ReaderIndexOutOfBounds {
                index,
                writer_index,
            } => {
                write!(
                    f,
                    "read cursor {index} is beyond the write cursor {writer_index}"
                )
            }
        }
    }
}

impl std::error::Error for BufError {}
