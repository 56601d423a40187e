//! Byte and sub-byte position tracking.

/// A `(byte, bit)` position inside a buffer.
///
/// The bit offset is always kept in `0..8`. The byte offset is clamped into
/// `0..=length` by [`BitCursor::seek`]; a byte offset equal to the length is
/// the valid "at end" position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BitCursor {
    /// Byte offset.
    byte: usize,
    /// Bit offset within the byte (0-7).
    bit: u8,
}

impl BitCursor {
    /// Create a cursor at `(0, 0)`.
    pub const fn new() -> Self {
        Self { byte: 0, bit: 0 }
    }

    /// Create a cursor from an absolute bit address.
    pub const fn from_bit_address(address: u64) -> Self {
        Self {
            byte: (address / 8) as usize,
            bit: (address % 8) as u8,
        }
    }

    /// Current byte offset.
    #[inline]
    pub const fn byte_offset(&self) -> usize {
        self.byte
    }

    /// Current bit offset (0-7).
    #[inline]
    pub const fn bit_offset(&self) -> u8 {
        self.bit
    }

    /// Absolute bit address (`byte * 8 + bit`).
    #[inline]
    pub const fn bit_address(&self) -> u64 {
        self.byte as u64 * 8 + self.bit as u64
    }

    /// Whether the cursor sits on a byte boundary.
    #[inline]
    pub const fn is_aligned(&self) -> bool {
        self.bit == 0
    }

    /// Move to `(byte, bit)` within a buffer of `length` bytes.
    ///
    /// Byte offsets above `length` clamp to `length` and negative ones to 0.
    /// Bit offsets of 8 or more become 0 and negative ones clamp to 0.
    pub fn seek(&mut self, byte: i64, bit: i32, length: usize) {
        self.byte = if byte <= 0 {
            0
        } else {
            usize::try_from(byte).map_or(length, |b| b.min(length))
        };
        self.bit = if (0..8).contains(&bit) { bit as u8 } else { 0 };
    }

    /// Move to an absolute bit address, clamped to the end of a buffer of
    /// `length` bytes.
    pub fn seek_bits(&mut self, address: u64, length: usize) {
        let end = length as u64 * 8;
        *self = Self::from_bit_address(address.min(end));
    }

    /// Step one bit forward, carrying into the byte offset.
    #[inline]
    pub fn advance_bit(&mut self) {
        self.bit = (self.bit + 1) % 8;
        if self.bit == 0 {
            self.byte += 1;
        }
    }

    /// Step `count` bits forward.
    pub fn advance_bits(&mut self, count: u64) {
        *self = Self::from_bit_address(self.bit_address() + count);
    }

    /// Step one bit back. At `(0, 0)` the cursor stays put.
    #[inline]
    pub fn return_bit(&mut self) {
        if self.bit == 0 {
            if self.byte == 0 {
                return;
            }
            self.bit = 7;
            self.byte -= 1;
        } else {
            self.bit -= 1;
        }
    }

    /// Step `count` bits back, stopping at `(0, 0)`.
    pub fn return_bits(&mut self, count: u64) {
        *self = Self::from_bit_address(self.bit_address().saturating_sub(count));
    }

    /// Round up to the next byte boundary when mid-byte.
    pub fn align_up(&mut self) {
        if self.bit != 0 {
            self.bit = 0;
            self.byte += 1;
        }
    }
}
