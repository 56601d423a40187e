//! Typed value codecs.
//!
//! Every value here is a fixed-width bit run read or written through the
//! bulk codec, so values may start at any bit offset.
//!
//! # Integer layout
//!
//! The stream's bit order decides the layout of a whole integer, not just of
//! its bytes. With [`BitOrder::Lsb`](crate::BitOrder::Lsb) the least
//! significant bit of the value is the first bit on the stream (little-endian
//! bytes); with [`BitOrder::Msb`](crate::BitOrder::Msb) the most significant
//! bit comes first (big-endian bytes).
//!
//! 24-bit and 48-bit values occupy exactly 3 and 6 bytes and are sign- or
//! zero-extended into `i32`/`u32` and `i64`/`u64`. Writes keep only the low
//! 24 or 48 bits of their argument.

use crate::error::{BitStreamError, Result};
use crate::stream::BitStream;

/// Sign-extend the low `bits` bits of `value`.
#[inline]
fn sign_extend(value: u64, bits: u32) -> i64 {
    let shift = 64 - bits;
    ((value << shift) as i64) >> shift
}

impl BitStream {
    /// Read a `width`-byte unsigned integer.
    fn read_uint(&mut self, width: usize) -> Result<u64> {
        let order = self.bit_order();
        let bytes = self.read_run(width as u64 * 8, order)?;
        Ok(order.pack_u64(&bytes))
    }

    /// Write the low `width` bytes of `value`.
    fn write_uint(&mut self, value: u64, width: usize) -> Result<()> {
        let order = self.bit_order();
        let bytes = order.unpack_u64(value, width);
        self.write_run(&bytes, width as u64 * 8, order)
    }

    // ------------------------------------------------------------------
    // Bytes and booleans
    // ------------------------------------------------------------------

    /// Read eight bits as a byte.
    pub fn read_byte(&mut self) -> Result<u8> {
        Ok(self.read_uint(1)? as u8)
    }

    /// Write a byte as eight bits.
    pub fn write_byte(&mut self, value: u8) -> Result<()> {
        self.write_uint(value as u64, 1)
    }

    /// Read eight bits as a signed byte.
    pub fn read_i8(&mut self) -> Result<i8> {
        Ok(self.read_byte()? as i8)
    }

    /// Write a signed byte as eight bits.
    pub fn write_i8(&mut self, value: i8) -> Result<()> {
        self.write_byte(value as u8)
    }

    /// Read `count` whole bytes.
    pub fn read_bytes(&mut self, count: usize) -> Result<Vec<u8>> {
        let bits = self.bits_for(count, 1)?;
        self.read_bits(bits)
    }

    /// Write all of `bytes`.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.write_bits(bytes, bytes.len() as u64 * 8)
    }

    /// Read eight bits as a boolean. Any nonzero byte is `true`.
    pub fn read_bool(&mut self) -> Result<bool> {
        Ok(self.read_byte()? != 0)
    }

    /// Write a boolean as the byte 1 or 0.
    pub fn write_bool(&mut self, value: bool) -> Result<()> {
        self.write_byte(value as u8)
    }

    // ------------------------------------------------------------------
    // 16-bit
    // ------------------------------------------------------------------

    /// Read a 16-bit unsigned integer.
    pub fn read_u16(&mut self) -> Result<u16> {
        Ok(self.read_uint(2)? as u16)
    }

    /// Write a 16-bit unsigned integer.
    pub fn write_u16(&mut self, value: u16) -> Result<()> {
        self.write_uint(value as u64, 2)
    }

    /// Read a 16-bit signed integer.
    pub fn read_i16(&mut self) -> Result<i16> {
        Ok(self.read_uint(2)? as u16 as i16)
    }

    /// Write a 16-bit signed integer.
    pub fn write_i16(&mut self, value: i16) -> Result<()> {
        self.write_u16(value as u16)
    }

    // ------------------------------------------------------------------
    // 24-bit
    // ------------------------------------------------------------------

    /// Read a 24-bit unsigned integer, zero-extended.
    pub fn read_u24(&mut self) -> Result<u32> {
        Ok(self.read_uint(3)? as u32)
    }

    /// Write the low 24 bits of `value`.
    pub fn write_u24(&mut self, value: u32) -> Result<()> {
        self.write_uint(value as u64 & 0xFF_FFFF, 3)
    }

    /// Read a 24-bit signed integer, sign-extended.
    pub fn read_i24(&mut self) -> Result<i32> {
        Ok(sign_extend(self.read_uint(3)?, 24) as i32)
    }

    /// Write the low 24 bits of `value` in two's complement.
    pub fn write_i24(&mut self, value: i32) -> Result<()> {
        self.write_u24(value as u32)
    }

    // ------------------------------------------------------------------
    // 32-bit
    // ------------------------------------------------------------------

    /// Read a 32-bit unsigned integer.
    pub fn read_u32(&mut self) -> Result<u32> {
        Ok(self.read_uint(4)? as u32)
    }

    /// Write a 32-bit unsigned integer.
    pub fn write_u32(&mut self, value: u32) -> Result<()> {
        self.write_uint(value as u64, 4)
    }

    /// Read a 32-bit signed integer.
    pub fn read_i32(&mut self) -> Result<i32> {
        Ok(self.read_u32()? as i32)
    }

    /// Write a 32-bit signed integer.
    pub fn write_i32(&mut self, value: i32) -> Result<()> {
        self.write_u32(value as u32)
    }

    // ------------------------------------------------------------------
    // 48-bit
    // ------------------------------------------------------------------

    /// Read a 48-bit unsigned integer, zero-extended.
    pub fn read_u48(&mut self) -> Result<u64> {
        self.read_uint(6)
    }

    /// Write the low 48 bits of `value`.
    pub fn write_u48(&mut self, value: u64) -> Result<()> {
        self.write_uint(value & 0xFFFF_FFFF_FFFF, 6)
    }

    /// Read a 48-bit signed integer, sign-extended.
    pub fn read_i48(&mut self) -> Result<i64> {
        Ok(sign_extend(self.read_uint(6)?, 48))
    }

    /// Write the low 48 bits of `value` in two's complement.
    pub fn write_i48(&mut self, value: i64) -> Result<()> {
        self.write_u48(value as u64)
    }

    // ------------------------------------------------------------------
    // 64-bit
    // ------------------------------------------------------------------

    /// Read a 64-bit unsigned integer.
    pub fn read_u64(&mut self) -> Result<u64> {
        self.read_uint(8)
    }

    /// Write a 64-bit unsigned integer.
    pub fn write_u64(&mut self, value: u64) -> Result<()> {
        self.write_uint(value, 8)
    }

    /// Read a 64-bit signed integer.
    pub fn read_i64(&mut self) -> Result<i64> {
        Ok(self.read_uint(8)? as i64)
    }

    /// Write a 64-bit signed integer.
    pub fn write_i64(&mut self, value: i64) -> Result<()> {
        self.write_uint(value as u64, 8)
    }

    // ------------------------------------------------------------------
    // Text
    // ------------------------------------------------------------------

    /// Read one character.
    ///
    /// Reads the text codec's maximum character width in bytes (4 for
    /// UTF-8) and returns the first character they decode to. The cursor
    /// moves past all bytes read, so this fails when fewer remain.
    pub fn read_char(&mut self) -> Result<char> {
        let codec = self.text_codec();
        let bytes = self.read_bytes(codec.max_char_width())?;
        codec
            .decode(&bytes)
            .chars()
            .next()
            .ok_or_else(|| BitStreamError::decode(format!("no {} character in {bytes:02X?}", codec)))
    }

    /// Read `length` code units and return the first `length` characters
    /// they decode to.
    ///
    /// A code unit is the codec's smallest width (1 byte for UTF-8, 2 for
    /// UTF-16), so multi-unit characters yield fewer than `length`
    /// characters.
    pub fn read_string(&mut self, length: usize) -> Result<String> {
        let codec = self.text_codec();
        let bits = self.bits_for(length, codec.min_unit_width())?;
        let bytes = self.read_bits(bits)?;
        Ok(codec.decode(&bytes).chars().take(length).collect())
    }

    /// Write one character in the text codec, with no length prefix.
    pub fn write_char(&mut self, value: char) -> Result<()> {
        let mut buf = [0u8; 4];
        self.write_str(value.encode_utf8(&mut buf))
    }

    /// Write a string in the text codec, with no length prefix.
    pub fn write_str(&mut self, value: &str) -> Result<()> {
        let bytes = self.text_codec().encode(value);
        self.write_bytes(&bytes)
    }
}
