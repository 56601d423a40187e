//! Stream configuration.

use crate::order::BitOrder;
use crate::text::TextCodec;

/// Construction-time settings of a [`BitStream`](crate::BitStream).
///
/// The bit order is fixed once the stream exists; auto-grow and the text
/// codec can still be changed on the stream afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StreamConfig {
    /// Bit numbering within each byte.
    pub bit_order: BitOrder,
    /// Whether writes at or past the end extend the buffer.
    pub auto_grow: bool,
    /// Codec used by the character and string operations.
    pub text_codec: TextCodec,
}

impl StreamConfig {
    /// LSB-first numbering, fixed length, UTF-8 text.
    ///
    /// Matches DEFLATE/LZH bit packing.
    pub fn lsb() -> Self {
        Self::default()
    }

    /// MSB-first numbering, fixed length, UTF-8 text.
    ///
    /// Matches TIFF LZW and network bit fields.
    pub fn msb() -> Self {
        Self::default().with_bit_order(BitOrder::Msb)
    }

    /// Set the bit order.
    pub fn with_bit_order(mut self, bit_order: BitOrder) -> Self {
        self.bit_order = bit_order;
        self
    }

    /// Set the auto-grow flag.
    pub fn with_auto_grow(mut self, auto_grow: bool) -> Self {
        self.auto_grow = auto_grow;
        self
    }

    /// Set the text codec.
    pub fn with_text_codec(mut self, text_codec: TextCodec) -> Self {
        self.text_codec = text_codec;
        self
    }
}
