//! Bit numbering within a byte.
//!
//! A stream numbers the eight bits of every byte either from the least
//! significant end (DEFLATE, LZH, GIF style) or from the most significant end
//! (TIFF LZW, most network protocols). The choice is made once per stream and
//! governs single-bit access, bit-run packing and, through those, every typed
//! codec.

use std::fmt;

/// Bit numbering policy of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BitOrder {
    /// Bit 0 of the cursor is the least significant bit of the byte.
    #[default]
    Lsb,
    /// Bit 0 of the cursor is the most significant bit of the byte.
    Msb,
}

impl BitOrder {
    /// Map a cursor bit position (0-7) to the shift of that bit inside a byte.
    #[inline]
    pub const fn shift(self, position: u8) -> u8 {
        match self {
            Self::Lsb => position & 7,
            Self::Msb => 7 - (position & 7),
        }
    }

    /// Extract the bit at cursor position `position` of `byte`.
    #[inline]
    pub const fn get(self, byte: u8, position: u8) -> u8 {
        (byte >> self.shift(position)) & 1
    }

    /// Return `byte` with the bit at cursor position `position` replaced by
    /// the low bit of `value`.
    #[inline]
    pub const fn set(self, byte: u8, position: u8, value: u8) -> u8 {
        let shift = self.shift(position);
        (byte & !(1 << shift)) | ((value & 1) << shift)
    }

    /// Whether this is the most-significant-bit-first order.
    pub const fn is_msb_first(self) -> bool {
        matches!(self, Self::Msb)
    }

    /// Decode up to eight bytes into an integer, least significant byte
    /// first for [`BitOrder::Lsb`] and most significant byte first for
    /// [`BitOrder::Msb`].
    pub fn pack_u64(self, bytes: &[u8]) -> u64 {
        debug_assert!(bytes.len() <= 8, "Cannot pack more than 8 bytes");
        match self {
            Self::Lsb => bytes
                .iter()
                .rev()
                .fold(0u64, |acc, &b| (acc << 8) | b as u64),
            Self::Msb => bytes.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64),
        }
    }

    /// Encode the low `width` bytes of `value` in this order.
    pub fn unpack_u64(self, value: u64, width: usize) -> Vec<u8> {
        debug_assert!(width <= 8, "Cannot unpack more than 8 bytes");
        match self {
            Self::Lsb => value.to_le_bytes()[..width].to_vec(),
            Self::Msb => value.to_be_bytes()[8 - width..].to_vec(),
        }
    }
}

impl fmt::Display for BitOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lsb => write!(f, "LSB-first"),
            Self::Msb => write!(f, "MSB-first"),
        }
    }
}
