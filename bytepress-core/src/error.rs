//! Error types for Bytepress operations.
//!
//! A single error enum covers both codecs: I/O errors from the filesystem
//! boundary, structural corruption detected while decoding, and container
//! framing violations. Decode failures are always surfaced to the caller as
//! typed errors; no partial output is ever returned.

use std::io;
use thiserror::Error;

/// The main error type for Bytepress operations.
#[derive(Debug, Error)]
pub enum BytepressError {
    /// I/O error from the underlying filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Structurally invalid data encountered during decoding.
    ///
    /// Covers truncated bit streams, bit paths that match no code,
    /// malformed codebook entries, and invalid back-references.
    #[error("Corrupt data at position {position}: {message}")]
    CorruptData {
        /// Position where the corruption was detected. Bit offset for the
        /// Huffman container, record index for the LZ77 container.
        position: u64,
        /// Description of the corruption.
        message: String,
    },

    /// File length is inconsistent with the container framing.
    #[error("Bad container format: {message}")]
    BadFormat {
        /// Description of the framing violation.
        message: String,
    },

    /// Ran out of input while reading bits.
    #[error("Unexpected end of input: expected {expected} more bits")]
    UnexpectedEof {
        /// Number of bits that were expected but not available.
        expected: usize,
    },
}

/// Result type alias for Bytepress operations.
pub type Result<T> = std::result::Result<T, BytepressError>;

impl BytepressError {
    /// Create a corrupt data error.
    pub fn corrupt(position: u64, message: impl Into<String>) -> Self {
        Self::CorruptData {
            position,
            message: message.into(),
        }
    }

    /// Create a bad format error.
    pub fn bad_format(message: impl Into<String>) -> Self {
        Self::BadFormat {
            message: message.into(),
        }
    }

    /// Create an unexpected EOF error.
    pub fn unexpected_eof(expected: usize) -> Self {
        Self::UnexpectedEof { expected }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BytepressError::corrupt(42, "dangling partial code");
        assert!(err.to_string().contains("position 42"));

        let err = BytepressError::bad_format("file length 5 is not a multiple of 4");
        assert!(err.to_string().contains("not a multiple"));

        let err = BytepressError::unexpected_eof(8);
        assert!(err.to_string().contains("8 more bits"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: BytepressError = io_err.into();
        assert!(matches!(err, BytepressError::Io(_)));
    }
}
