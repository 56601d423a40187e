//! Error types for OxiBit operations.
//!
//! Every bit, byte, shift and bitwise access that lands outside the buffer
//! reports [`BitStreamError::OutOfRange`]. Invalid bit values are never an
//! error: inputs to the bit primitives are masked to their low bit.

use std::io;
use thiserror::Error;

/// The main error type for OxiBit operations.
#[derive(Debug, Error)]
pub enum BitStreamError {
    /// The target position is at or past the end of the buffer and the
    /// operation is not allowed to grow it.
    #[error("Position {byte_offset}:{bit_offset} is out of range for a buffer of {length} bytes")]
    OutOfRange {
        /// Byte offset of the rejected access.
        byte_offset: usize,
        /// Bit offset (0-7) of the rejected access.
        bit_offset: u8,
        /// Buffer length at the time of the access.
        length: usize,
    },

    /// I/O error while copying a source stream into the buffer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The text codec produced no character where one was required.
    #[error("Decode error: {message}")]
    Decode {
        /// Description of the decode failure.
        message: String,
    },
}

/// Result type alias for OxiBit operations.
pub type Result<T> = std::result::Result<T, BitStreamError>;

impl BitStreamError {
    /// Create an out-of-range error.
    pub fn out_of_range(byte_offset: usize, bit_offset: u8, length: usize) -> Self {
        Self::OutOfRange {
            byte_offset,
            bit_offset,
            length,
        }
    }

    /// Create a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Whether this error is an out-of-range access.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

impl From<BitStreamError> for io::Error {
    fn from(err: BitStreamError) -> Self {
        match err {
            BitStreamError::Io(e) => e,
            BitStreamError::OutOfRange { .. } => io::Error::new(io::ErrorKind::UnexpectedEof, err),
            BitStreamError::Decode { .. } => io::Error::new(io::ErrorKind::InvalidData, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BitStreamError::out_of_range(4, 3, 4);
        assert_eq!(
            err.to_string(),
            "Position 4:3 is out of range for a buffer of 4 bytes"
        );
        assert!(err.is_out_of_range());

        let err = BitStreamError::decode("no character");
        assert!(err.to_string().contains("no character"));
        assert!(!err.is_out_of_range());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: BitStreamError = io_err.into();
        assert!(matches!(err, BitStreamError::Io(_)));
    }

    #[test]
    fn test_into_io_error() {
        let err: io::Error = BitStreamError::out_of_range(0, 0, 0).into();
        assert_eq!(err.kind(), io::ErrorKind::UnexpectedEof);
    }
}
