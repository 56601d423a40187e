//! Character encodings for text reads and writes.
//!
//! [`TextCodec`] wraps an `encoding_rs` encoding and adds the two widths the
//! stream needs: the largest number of bytes a single character can take,
//! and the size of the smallest code unit.

use encoding_rs::{
    EUC_JP, Encoding, GB18030, ISO_2022_JP, REPLACEMENT, UTF_8, UTF_16BE, UTF_16LE,
};
use std::fmt;

/// Mapping between characters and byte sequences.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct TextCodec {
    encoding: &'static Encoding,
}

impl TextCodec {
    /// Create a codec for an `encoding_rs` encoding.
    pub const fn new(encoding: &'static Encoding) -> Self {
        Self { encoding }
    }

    /// UTF-8 codec (the default).
    pub fn utf8() -> Self {
        Self::new(UTF_8)
    }

    /// UTF-16 little-endian codec.
    pub fn utf16le() -> Self {
        Self::new(UTF_16LE)
    }

    /// UTF-16 big-endian codec.
    pub fn utf16be() -> Self {
        Self::new(UTF_16BE)
    }

    /// Look up a codec by WHATWG label (`"utf-8"`, `"shift_jis"`, `"latin1"`, ...).
    pub fn for_label(label: &str) -> Option<Self> {
        Encoding::for_label(label.as_bytes()).map(Self::new)
    }

    /// The underlying encoding.
    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    /// Canonical name of the encoding.
    pub fn name(&self) -> &'static str {
        self.encoding.name()
    }

    fn is_utf16(&self) -> bool {
        self.encoding == UTF_16LE || self.encoding == UTF_16BE
    }

    /// Maximum number of bytes a single character can occupy.
    pub fn max_char_width(&self) -> usize {
        let encoding = self.encoding;
        if encoding == UTF_8 || encoding == REPLACEMENT || encoding == GB18030 || self.is_utf16() {
            4
        } else if encoding == ISO_2022_JP {
            // Escape sequence followed by a double-byte character
            5
        } else if encoding == EUC_JP {
            3
        } else if encoding.is_single_byte() {
            1
        } else {
            2
        }
    }

    /// Width in bytes of the smallest code unit.
    pub fn min_unit_width(&self) -> usize {
        if self.is_utf16() { 2 } else { 1 }
    }

    /// Decode bytes to text. Malformed sequences become U+FFFD.
    pub fn decode(&self, bytes: &[u8]) -> String {
        let (text, had_errors) = self.encoding.decode_without_bom_handling(bytes);
        if had_errors {
            log::debug!("{} decode replaced malformed input", self.name());
        }
        text.into_owned()
    }

    /// Encode text to bytes.
    ///
    /// UTF-16 is produced directly; `encoding_rs` only encodes to
    /// byte-oriented encodings. Characters the encoding cannot represent are
    /// written as HTML numeric character references.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        if self.encoding == UTF_16LE {
            return text.encode_utf16().flat_map(u16::to_le_bytes).collect();
        }
        if self.encoding == UTF_16BE {
            return text.encode_utf16().flat_map(u16::to_be_bytes).collect();
        }
        let (bytes, _, had_errors) = self.encoding.encode(text);
        if had_errors {
            log::debug!("{} encode replaced unmappable characters", self.name());
        }
        bytes.into_owned()
    }
}

impl Default for TextCodec {
    fn default() -> Self {
        Self::utf8()
    }
}

impl fmt::Debug for TextCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TextCodec").field(&self.name()).finish()
    }
}

impl fmt::Display for TextCodec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
