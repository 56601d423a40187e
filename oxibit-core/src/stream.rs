//! Bit-addressable stream over an owned byte buffer.
//!
//! [`BitStream`] keeps a `(byte, bit)` cursor over a growable buffer it owns
//! outright. Everything above the two bit primitives ([`BitStream::read_bit`]
//! and [`BitStream::write_bit`]) is composed from them, so a single bit
//! order applies to every access.
//!
//! # Example
//!
//! ```
//! use oxibit_core::{BitStream, StreamConfig};
//!
//! let mut stream = BitStream::from_bytes_with_config(&[0u8; 4], StreamConfig::msb());
//! stream.write_bits(&[0b1010_0000], 3).unwrap();
//! stream.write_u16(0xBEEF).unwrap();
//!
//! stream.seek(0, 0);
//! assert_eq!(stream.read_bits(3).unwrap(), vec![0b1010_0000]);
//! assert_eq!(stream.read_u16().unwrap(), 0xBEEF);
//! assert_eq!(stream.position(), (2, 3));
//! ```

use crate::config::StreamConfig;
use crate::cursor::BitCursor;
use crate::error::{BitStreamError, Result};
use crate::order::BitOrder;
use crate::text::TextCodec;
use std::io::{self, Read, Write};

/// A read/write cursor over an owned, growable byte buffer, addressable at
/// bit granularity.
///
/// The stream is single-threaded state: every operation runs to completion
/// before returning, and failed writes leave both buffer and cursor as they
/// were.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BitStream {
    /// Owned backing bytes.
    buffer: Vec<u8>,
    /// Current position.
    cursor: BitCursor,
    /// Bit order, growth policy and text codec.
    config: StreamConfig,
}

impl BitStream {
    /// Create an empty stream with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stream with the given configuration.
    pub fn with_config(config: StreamConfig) -> Self {
        Self::from_vec_with_config(Vec::new(), config)
    }

    /// Create a stream over a copy of `bytes`.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_bytes_with_config(bytes, StreamConfig::default())
    }

    /// Create a stream over a copy of `bytes` with the given configuration.
    pub fn from_bytes_with_config(bytes: &[u8], config: StreamConfig) -> Self {
        Self::from_vec_with_config(bytes.to_vec(), config)
    }

    /// Create a stream that takes ownership of `buffer`.
    pub fn from_vec(buffer: Vec<u8>) -> Self {
        Self::from_vec_with_config(buffer, StreamConfig::default())
    }

    /// Create a stream that takes ownership of `buffer`, with the given
    /// configuration.
    pub fn from_vec_with_config(buffer: Vec<u8>, config: StreamConfig) -> Self {
        Self {
            buffer,
            cursor: BitCursor::new(),
            config,
        }
    }

    /// Create a stream holding everything `reader` yields until EOF.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_config(reader, StreamConfig::default())
    }

    /// Create a stream holding everything `reader` yields until EOF, with
    /// the given configuration.
    pub fn from_reader_with_config<R: Read>(mut reader: R, config: StreamConfig) -> Result<Self> {
        let mut buffer = Vec::new();
        reader.read_to_end(&mut buffer)?;
        Ok(Self::from_vec_with_config(buffer, config))
    }

    // ------------------------------------------------------------------
    // Configuration and accessors
    // ------------------------------------------------------------------

    /// Buffer length in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether the buffer holds no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Current byte offset.
    #[inline]
    pub fn byte_position(&self) -> usize {
        self.cursor.byte_offset()
    }

    /// Current bit offset within the byte (0-7).
    #[inline]
    pub fn bit_position(&self) -> u8 {
        self.cursor.bit_offset()
    }

    /// Current `(byte, bit)` position.
    pub fn position(&self) -> (usize, u8) {
        (self.cursor.byte_offset(), self.cursor.bit_offset())
    }

    /// The cursor itself.
    pub fn cursor(&self) -> BitCursor {
        self.cursor
    }

    /// Bit numbering of this stream. Fixed at construction.
    #[inline]
    pub fn bit_order(&self) -> BitOrder {
        self.config.bit_order
    }

    /// Whether writes at the end of the buffer extend it.
    pub fn auto_grow(&self) -> bool {
        self.config.auto_grow
    }

    /// Enable or disable growth on writes at the end of the buffer.
    pub fn set_auto_grow(&mut self, auto_grow: bool) {
        self.config.auto_grow = auto_grow;
    }

    /// Codec used by the character and string operations.
    pub fn text_codec(&self) -> TextCodec {
        self.config.text_codec
    }

    /// Replace the text codec.
    pub fn set_text_codec(&mut self, text_codec: TextCodec) {
        self.config.text_codec = text_codec;
    }

    /// Current configuration.
    pub fn config(&self) -> StreamConfig {
        self.config
    }

    /// Live view of the buffer.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Snapshot copy of the buffer.
    pub fn to_vec(&self) -> Vec<u8> {
        self.buffer.clone()
    }

    /// Consume the stream and return its buffer.
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }

    /// Resize the buffer to `length` bytes, zero-filling new bytes.
    ///
    /// A cursor left past the new end moves to `(length, 0)`.
    pub fn set_len(&mut self, length: usize) {
        log::trace!("resizing buffer from {} to {} bytes", self.buffer.len(), length);
        self.buffer.resize(length, 0);
        if self.cursor.byte_offset() > length {
            self.cursor.seek_bits(length as u64 * 8, length);
        }
    }

    /// Number of bits between the cursor and the end of the buffer.
    pub fn bits_remaining(&self) -> u64 {
        self.end_address().saturating_sub(self.cursor.bit_address())
    }

    /// Whether the cursor has no bits left to read.
    pub fn is_at_end(&self) -> bool {
        self.bits_remaining() == 0
    }

    // ------------------------------------------------------------------
    // Cursor movement
    // ------------------------------------------------------------------

    /// Move to `(byte, bit)`.
    ///
    /// Byte offsets past the end clamp to [`len`](Self::len) and negative
    /// ones to 0. Bit offsets of 8 or more become 0 and negative ones clamp
    /// to 0.
    pub fn seek(&mut self, byte: i64, bit: i32) {
        self.cursor.seek(byte, bit, self.buffer.len());
    }

    /// Move to an absolute bit address, clamped to the end of the buffer.
    pub fn seek_bits(&mut self, address: u64) {
        self.cursor.seek_bits(address, self.buffer.len());
    }

    /// Move back to `(0, 0)`.
    pub fn rewind(&mut self) {
        self.cursor = BitCursor::new();
    }

    /// Step one bit forward. The cursor does not move past the end of the
    /// buffer.
    pub fn advance_bit(&mut self) {
        if self.cursor.bit_address() < self.end_address() {
            self.cursor.advance_bit();
        }
    }

    /// Step one bit back. The cursor does not move before `(0, 0)`.
    pub fn return_bit(&mut self) {
        self.cursor.return_bit();
    }

    /// Skip `count` bits.
    pub fn skip_bits(&mut self, count: u64) -> Result<()> {
        self.check_readable(count)?;
        self.cursor.advance_bits(count);
        Ok(())
    }

    /// Move to the start of the next byte when mid-byte, clamped to the end
    /// of the buffer.
    pub fn align_to_byte(&mut self) {
        self.cursor.align_up();
        if self.cursor.byte_offset() > self.buffer.len() {
            self.cursor.seek_bits(self.end_address(), self.buffer.len());
        }
    }

    // ------------------------------------------------------------------
    // Bit primitives
    // ------------------------------------------------------------------

    /// Read the bit under the cursor and advance by one bit.
    pub fn read_bit(&mut self) -> Result<u8> {
        self.read_bit_ordered(self.bit_order())
    }

    /// Write the low bit of `value` under the cursor and advance by one bit.
    ///
    /// Values other than 0 and 1 are masked, not rejected. At the end of the
    /// buffer this grows it by one byte when auto-grow is on and fails with
    /// [`BitStreamError::OutOfRange`] otherwise.
    pub fn write_bit(&mut self, value: u8) -> Result<()> {
        self.write_bit_ordered(value, self.bit_order())
    }

    /// Read the bit under the cursor without moving.
    pub fn peek_bit(&mut self) -> Result<u8> {
        let saved = self.cursor;
        let result = self.read_bit();
        self.cursor = saved;
        result
    }

    fn read_bit_ordered(&mut self, order: BitOrder) -> Result<u8> {
        let index = self.cursor.byte_offset();
        let Some(&byte) = self.buffer.get(index) else {
            return Err(self.out_of_range_at(self.cursor.bit_address()));
        };
        let value = order.get(byte, self.cursor.bit_offset());
        self.cursor.advance_bit();
        Ok(value)
    }

    fn write_bit_ordered(&mut self, value: u8, order: BitOrder) -> Result<()> {
        let index = self.cursor.byte_offset();
        if index >= self.buffer.len() {
            if !self.config.auto_grow {
                return Err(self.out_of_range_at(self.cursor.bit_address()));
            }
            self.grow_to(index + 1);
        }
        let byte = &mut self.buffer[index];
        *byte = order.set(*byte, self.cursor.bit_offset(), value);
        self.cursor.advance_bit();
        Ok(())
    }

    fn grow_to(&mut self, length: usize) {
        log::trace!("growing buffer from {} to {} bytes", self.buffer.len(), length);
        self.buffer.resize(length, 0);
    }

    // ------------------------------------------------------------------
    // Bulk codec
    // ------------------------------------------------------------------

    /// Read `count` bits, packed into `ceil(count / 8)` bytes.
    ///
    /// Each group of up to eight bits fills one output byte in the stream's
    /// bit order; unused bits of the final byte are zero. The result is the
    /// same as `count` calls to [`read_bit`](Self::read_bit). Nothing moves
    /// if fewer than `count` bits remain.
    pub fn read_bits(&mut self, count: u64) -> Result<Vec<u8>> {
        self.read_run(count, self.bit_order())
    }

    /// Write the first `count` bits of `bytes`, unpacked in the stream's bit
    /// order.
    ///
    /// Bits missing from a short `bytes` are written as zero. Without
    /// auto-grow the whole run must fit in the buffer or nothing is written.
    pub fn write_bits(&mut self, bytes: &[u8], count: u64) -> Result<()> {
        self.write_run(bytes, count, self.bit_order())
    }

    /// Read `count` bits without moving the cursor.
    pub fn peek_bits(&mut self, count: u64) -> Result<Vec<u8>> {
        let saved = self.cursor;
        let result = self.read_bits(count);
        self.cursor = saved;
        result
    }

    /// Read a bit run packed with an explicit order.
    pub(crate) fn read_run(&mut self, count: u64, order: BitOrder) -> Result<Vec<u8>> {
        self.check_readable(count)?;

        let mut output = Vec::with_capacity(count.div_ceil(8) as usize);
        let mut remaining = count;
        while remaining > 0 {
            let group = remaining.min(8) as u8;
            let mut value = 0u8;
            for p in 0..group {
                value |= self.read_bit_ordered(order)? << order.shift(p);
            }
            output.push(value);
            remaining -= group as u64;
        }
        Ok(output)
    }

    /// Write a bit run unpacked with an explicit order.
    pub(crate) fn write_run(&mut self, bytes: &[u8], count: u64, order: BitOrder) -> Result<()> {
        self.check_writable(count)?;

        let mut remaining = count;
        let mut source = bytes.iter().copied();
        while remaining > 0 {
            let group = remaining.min(8) as u8;
            let byte = source.next().unwrap_or(0);
            for p in 0..group {
                self.write_bit_ordered(order.get(byte, p), order)?;
            }
            remaining -= group as u64;
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Range checks
    // ------------------------------------------------------------------

    #[inline]
    fn end_address(&self) -> u64 {
        self.buffer.len() as u64 * 8
    }

    /// Fail unless `count` bits can be read from the cursor.
    pub(crate) fn check_readable(&self, count: u64) -> Result<()> {
        self.check_readable_at(self.cursor, count)
    }

    /// Fail unless `count` bits can be written from the cursor, taking
    /// auto-grow into account.
    pub(crate) fn check_writable(&self, count: u64) -> Result<()> {
        if !self.config.auto_grow {
            return self.check_readable(count);
        }
        // Growth is bounded by the largest buffer a Vec can hold.
        let start = self.cursor.bit_address();
        match start.checked_add(count) {
            Some(end) if end.div_ceil(8) <= isize::MAX as u64 => Ok(()),
            _ => Err(self.out_of_range_at(start)),
        }
    }

    /// Fail unless `count` bits can be read starting at `cursor`.
    pub(crate) fn check_readable_at(&self, cursor: BitCursor, count: u64) -> Result<()> {
        let start = cursor.bit_address();
        let end = self.end_address();
        match start.checked_add(count) {
            Some(stop) if count == 0 || stop <= end => Ok(()),
            _ => Err(self.out_of_range_at(start.max(end))),
        }
    }

    /// Bit count of `units` units of `width` bytes each, or `OutOfRange` at
    /// the cursor when it does not fit in a `u64`.
    pub(crate) fn bits_for(&self, units: usize, width: usize) -> Result<u64> {
        (units as u64)
            .checked_mul(width as u64)
            .and_then(|bytes| bytes.checked_mul(8))
            .ok_or_else(|| self.out_of_range_at(self.cursor.bit_address()))
    }

    pub(crate) fn set_cursor(&mut self, cursor: BitCursor) {
        self.cursor = cursor;
    }

    fn out_of_range_at(&self, address: u64) -> BitStreamError {
        let position = BitCursor::from_bit_address(address);
        log::debug!(
            "rejected access at {}:{} (length {}, auto_grow {})",
            position.byte_offset(),
            position.bit_offset(),
            self.buffer.len(),
            self.config.auto_grow
        );
        BitStreamError::out_of_range(
            position.byte_offset(),
            position.bit_offset(),
            self.buffer.len(),
        )
    }

    // ------------------------------------------------------------------
    // Diagnostics
    // ------------------------------------------------------------------

    /// Render `count` bits starting at bit address `start` as `0`/`1` text,
    /// grouped in eights, without moving the cursor.
    pub fn bit_string(&self, start: u64, count: u64) -> Result<String> {
        let cursor = BitCursor::from_bit_address(start);
        self.check_readable_at(cursor, count)?;

        let order = self.bit_order();
        let mut text = String::with_capacity(count as usize + count as usize / 8);
        for i in 0..count {
            if i > 0 && i % 8 == 0 {
                text.push(' ');
            }
            let position = BitCursor::from_bit_address(start + i);
            let bit = order.get(self.buffer[position.byte_offset()], position.bit_offset());
            text.push(if bit == 1 { '1' } else { '0' });
        }
        Ok(text)
    }
}

impl From<Vec<u8>> for BitStream {
    fn from(buffer: Vec<u8>) -> Self {
        Self::from_vec(buffer)
    }
}

impl From<&[u8]> for BitStream {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

/// Byte-granular reads through the bulk codec, starting at the cursor.
impl Read for BitStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let available = (self.bits_remaining() / 8) as usize;
        let n = buf.len().min(available);
        if n == 0 {
            return Ok(0);
        }
        let bytes = self.read_bits(n as u64 * 8)?;
        buf[..n].copy_from_slice(&bytes);
        Ok(n)
    }
}

/// Byte-granular writes through the bulk codec, starting at the cursor.
///
/// Without auto-grow a write is cut short at the end of the buffer.
impl Write for BitStream {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = if self.config.auto_grow {
            buf.len()
        } else {
            buf.len().min((self.bits_remaining() / 8) as usize)
        };
        self.write_bits(&buf[..n], n as u64 * 8)?;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
