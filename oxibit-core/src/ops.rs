//! In-place operators.
//!
//! Each operator reads one unit (a byte or a bit) at the cursor, combines it,
//! writes the result back to the same position and leaves the cursor one
//! unit further on, exactly as a plain read of that unit would. The target
//! span is checked up front: an operator that fails changes neither the
//! buffer nor the cursor. None of them grow the buffer.
//!
//! A "byte" at an unaligned cursor is the eight bits starting there, so it
//! straddles two buffer bytes.

use crate::cursor::BitCursor;
use crate::error::Result;
use crate::stream::BitStream;

/// Direction of a shift or rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShiftDirection {
    /// Towards the most significant bit.
    Left,
    /// Towards the least significant bit.
    Right,
}

/// Shift or rotate `byte` by `count` bits. Counts of 0 or above 7 leave it
/// unchanged.
fn shift_byte(byte: u8, count: u32, direction: ShiftDirection, circular: bool) -> u8 {
    if count == 0 || count > 7 {
        return byte;
    }
    match (direction, circular) {
        (ShiftDirection::Left, false) => byte << count,
        (ShiftDirection::Right, false) => byte >> count,
        (ShiftDirection::Left, true) => byte.rotate_left(count),
        (ShiftDirection::Right, true) => byte.rotate_right(count),
    }
}

impl BitStream {
    /// Read the byte at `start`, write back `f(byte)`, and leave the cursor
    /// just past it.
    fn modify_byte_at(&mut self, start: BitCursor, f: impl FnOnce(u8) -> u8) -> Result<()> {
        self.check_readable_at(start, 8)?;
        let order = self.bit_order();

        self.set_cursor(start);
        let byte = self.read_run(8, order)?[0];
        self.set_cursor(start);
        self.write_run(&[f(byte)], 8, order)
    }

    fn modify_bit(&mut self, f: impl FnOnce(u8) -> u8) -> Result<()> {
        let bit = self.read_bit()?;
        self.return_bit();
        self.write_bit(f(bit))
    }

    fn aligned_start(&self) -> BitCursor {
        BitCursor::from_bit_address(self.byte_position() as u64 * 8)
    }

    // ------------------------------------------------------------------
    // Shifts
    // ------------------------------------------------------------------

    /// Shift the byte containing the cursor by `count` bits, starting from
    /// its first bit, and move to the next byte.
    ///
    /// Zero is shifted in. A `count` of 0 or above 7 changes nothing but
    /// still moves the cursor.
    pub fn shift(&mut self, count: u32, direction: ShiftDirection) -> Result<()> {
        let start = self.aligned_start();
        self.modify_byte_at(start, |b| shift_byte(b, count, direction, false))
    }

    /// Shift the eight bits starting at the cursor by `count` bits and move
    /// past them.
    pub fn shift_on_bit(&mut self, count: u32, direction: ShiftDirection) -> Result<()> {
        let start = self.cursor();
        self.modify_byte_at(start, |b| shift_byte(b, count, direction, false))
    }

    /// Rotate the byte containing the cursor by `count` bits, starting from
    /// its first bit, and move to the next byte.
    pub fn circular_shift(&mut self, count: u32, direction: ShiftDirection) -> Result<()> {
        let start = self.aligned_start();
        self.modify_byte_at(start, |b| shift_byte(b, count, direction, true))
    }

    /// Rotate the eight bits starting at the cursor by `count` bits and move
    /// past them.
    pub fn circular_shift_on_bit(&mut self, count: u32, direction: ShiftDirection) -> Result<()> {
        let start = self.cursor();
        self.modify_byte_at(start, |b| shift_byte(b, count, direction, true))
    }

    // ------------------------------------------------------------------
    // Byte-granular bitwise operators
    // ------------------------------------------------------------------

    /// AND the byte at the cursor with `operand`.
    pub fn and(&mut self, operand: u8) -> Result<()> {
        let start = self.cursor();
        self.modify_byte_at(start, |b| b & operand)
    }

    /// OR the byte at the cursor with `operand`.
    pub fn or(&mut self, operand: u8) -> Result<()> {
        let start = self.cursor();
        self.modify_byte_at(start, |b| b | operand)
    }

    /// XOR the byte at the cursor with `operand`.
    pub fn xor(&mut self, operand: u8) -> Result<()> {
        let start = self.cursor();
        self.modify_byte_at(start, |b| b ^ operand)
    }

    /// Invert the byte at the cursor.
    #[allow(clippy::should_implement_trait)]
    pub fn not(&mut self) -> Result<()> {
        let start = self.cursor();
        self.modify_byte_at(start, |b| !b)
    }

    // ------------------------------------------------------------------
    // Bit-granular bitwise operators
    // ------------------------------------------------------------------

    /// AND the bit at the cursor with the low bit of `operand`.
    pub fn bit_and(&mut self, operand: u8) -> Result<()> {
        self.modify_bit(|b| b & operand)
    }

    /// OR the bit at the cursor with the low bit of `operand`.
    pub fn bit_or(&mut self, operand: u8) -> Result<()> {
        self.modify_bit(|b| b | operand)
    }

    /// XOR the bit at the cursor with the low bit of `operand`.
    pub fn bit_xor(&mut self, operand: u8) -> Result<()> {
        self.modify_bit(|b| b ^ operand)
    }

    /// Invert the bit at the cursor.
    pub fn bit_not(&mut self) -> Result<()> {
        self.modify_bit(|b| !b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StreamConfig;

    #[test]
    fn test_shift_byte() {
        assert_eq!(shift_byte(0b1000_0001, 1, ShiftDirection::Left, false), 0b0000_0010);
        assert_eq!(shift_byte(0b1000_0001, 1, ShiftDirection::Right, false), 0b0100_0000);
        assert_eq!(shift_byte(0b1000_0001, 1, ShiftDirection::Left, true), 0b0000_0011);
        assert_eq!(shift_byte(0b1000_0001, 1, ShiftDirection::Right, true), 0b1100_0000);
        assert_eq!(shift_byte(0xA5, 0, ShiftDirection::Left, false), 0xA5);
        assert_eq!(shift_byte(0xA5, 8, ShiftDirection::Right, true), 0xA5);
    }

    #[test]
    fn test_shift_aligned() {
        let mut stream = BitStream::from_bytes(&[0x0F, 0xF0]);
        stream.seek(0, 5);
        stream.shift(4, ShiftDirection::Left).unwrap();
        assert_eq!(stream.as_bytes(), &[0xF0, 0xF0]);
        assert_eq!(stream.position(), (1, 0));

        stream.circular_shift(4, ShiftDirection::Right).unwrap();
        assert_eq!(stream.as_bytes(), &[0xF0, 0x0F]);
        assert_eq!(stream.position(), (2, 0));

        assert!(stream.shift(1, ShiftDirection::Left).unwrap_err().is_out_of_range());
        assert_eq!(stream.position(), (2, 0));
    }

    #[test]
    fn test_zero_count_still_advances() {
        let mut stream = BitStream::from_bytes(&[0x81]);
        stream.circular_shift(0, ShiftDirection::Left).unwrap();
        assert_eq!(stream.as_bytes(), &[0x81]);
        assert_eq!(stream.position(), (1, 0));

        stream.rewind();
        stream.shift(9, ShiftDirection::Right).unwrap();
        assert_eq!(stream.as_bytes(), &[0x81]);
        assert_eq!(stream.position(), (1, 0));
    }

    #[test]
    fn test_shift_on_bit_straddles() {
        // LSB order: the eight bits from 0:4 are the high nibble of byte 0
        // followed by the low nibble of byte 1, i.e. the value 0x21.
        let mut stream = BitStream::from_bytes(&[0x10, 0x02]);
        stream.seek(0, 4);
        stream.shift_on_bit(1, ShiftDirection::Left).unwrap();
        // 0x21 << 1 = 0x42
        assert_eq!(stream.as_bytes(), &[0x20, 0x04]);
        assert_eq!(stream.position(), (1, 4));
    }

    #[test]
    fn test_shift_on_bit_needs_both_bytes() {
        let mut stream = BitStream::from_bytes(&[0xFF, 0xFF]);
        stream.seek(1, 1);
        assert!(stream.circular_shift_on_bit(3, ShiftDirection::Left).is_err());
        assert_eq!(stream.position(), (1, 1));
        assert_eq!(stream.as_bytes(), &[0xFF, 0xFF]);
    }

    #[test]
    fn test_shift_msb_order() {
        let mut stream = BitStream::from_bytes_with_config(&[0b0000_0110], StreamConfig::msb());
        stream.shift(1, ShiftDirection::Right).unwrap();
        assert_eq!(stream.as_bytes(), &[0b0000_0011]);
    }

    #[test]
    fn test_byte_ops() {
        let mut stream = BitStream::from_bytes(&[0xF0, 0xF0, 0xF0, 0xF0]);
        stream.and(0x3C).unwrap();
        stream.or(0x0F).unwrap();
        stream.xor(0xFF).unwrap();
        stream.not().unwrap();
        assert_eq!(stream.as_bytes(), &[0x30, 0xFF, 0x0F, 0x0F]);
        assert_eq!(stream.position(), (4, 0));
        assert!(stream.not().is_err());
    }

    #[test]
    fn test_byte_op_unaligned() {
        let mut stream = BitStream::from_bytes(&[0x00, 0x00]);
        stream.seek(0, 4);
        stream.not().unwrap();
        assert_eq!(stream.as_bytes(), &[0xF0, 0x0F]);
        assert_eq!(stream.position(), (1, 4));
    }

    #[test]
    fn test_bit_ops() {
        let mut stream = BitStream::from_bytes(&[0b0000_0101]);
        stream.bit_and(0).unwrap();
        stream.bit_or(1).unwrap();
        stream.bit_xor(1).unwrap();
        stream.bit_not().unwrap();
        assert_eq!(stream.as_bytes(), &[0b0000_1010]);
        assert_eq!(stream.position(), (0, 4));
    }

    #[test]
    fn test_bit_op_at_end() {
        let mut stream = BitStream::from_bytes(&[0xFF]);
        stream.set_auto_grow(true);
        stream.seek(1, 0);
        assert!(stream.bit_not().is_err());
        assert_eq!(stream.len(), 1);
        assert_eq!(stream.position(), (1, 0));
    }
}
