//! # OxiBit Core
//!
//! Bit-addressable stream over an owned byte buffer.
//!
//! This crate provides the building blocks for reading, writing and patching
//! binary data at arbitrary bit granularity:
//!
//! - [`cursor`]: `(byte, bit)` position tracking with clamped seeking
//! - [`order`]: LSB-first / MSB-first bit numbering
//! - [`stream`]: the [`BitStream`] itself, its bit primitives and bulk codec
//! - [`codec`]: fixed-width integers, booleans, characters and strings
//! - [`ops`]: in-place shifts, rotations and bitwise operators
//! - [`text`]: character encodings for the text operations
//! - [`config`]: construction-time settings
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ Typed codecs            │ In-place operators            │
//! │ u16..u64, i24, i48,     │ shift, circular shift,        │
//! │ bool, char, string      │ and / or / xor / not          │
//! ├─────────────────────────────────────────────────────────┤
//! │ Bulk codec: read_bits / write_bits                      │
//! ├─────────────────────────────────────────────────────────┤
//! │ Bit primitives: read_bit / write_bit (BitOrder)         │
//! ├─────────────────────────────────────────────────────────┤
//! │ BitCursor                │ Owned, growable buffer       │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxibit_core::{BitStream, ShiftDirection, StreamConfig};
//!
//! let mut stream = BitStream::with_config(StreamConfig::msb().with_auto_grow(true));
//! stream.write_bit(1).unwrap();
//! stream.write_i24(-2).unwrap();
//! stream.write_str("ok").unwrap();
//! assert_eq!(stream.len(), 6);
//!
//! stream.seek(0, 1);
//! assert_eq!(stream.read_i24().unwrap(), -2);
//! assert_eq!(stream.read_string(2).unwrap(), "ok");
//!
//! // Rotate the first byte in place
//! stream.rewind();
//! stream.circular_shift(1, ShiftDirection::Left).unwrap();
//! assert_eq!(stream.position(), (1, 0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod codec;
pub mod config;
pub mod cursor;
pub mod error;
pub mod ops;
pub mod order;
pub mod stream;
pub mod text;

// Re-exports for convenience
pub use config::StreamConfig;
pub use cursor::BitCursor;
pub use error::{BitStreamError, Result};
pub use ops::ShiftDirection;
pub use order::BitOrder;
pub use stream::BitStream;
pub use text::TextCodec;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::StreamConfig;
    pub use crate::error::{BitStreamError, Result};
    pub use crate::ops::ShiftDirection;
    pub use crate::order::BitOrder;
    pub use crate::stream::BitStream;
    pub use crate::text::TextCodec;
}
