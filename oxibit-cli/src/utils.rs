//! Utility functions for the CLI.

use oxibit_core::{BitOrder, BitStream, StreamConfig, TextCodec};
use std::fs;
use std::path::Path;

/// Parse a byte given in decimal, `0x` hex or `0b` binary.
pub fn parse_byte(text: &str) -> Result<u8, String> {
    let text = text.trim().replace('_', "");
    let parsed = if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        u8::from_str_radix(hex, 16)
    } else if let Some(bin) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {
        u8::from_str_radix(bin, 2)
    } else {
        text.parse::<u8>()
    };
    parsed.map_err(|e| format!("invalid byte '{text}': {e}"))
}

/// Bit order selected by the `--msb` flag.
pub fn bit_order(msb: bool) -> BitOrder {
    if msb { BitOrder::Msb } else { BitOrder::Lsb }
}

/// Load a file into a stream positioned at `(offset, bit)`.
pub fn open_stream(
    path: &Path,
    msb: bool,
    encoding: Option<&str>,
    offset: i64,
    bit: i32,
) -> Result<BitStream, Box<dyn std::error::Error>> {
    let mut config = StreamConfig::default().with_bit_order(bit_order(msb));
    if let Some(label) = encoding {
        let codec =
            TextCodec::for_label(label).ok_or_else(|| format!("unknown encoding '{label}'"))?;
        config = config.with_text_codec(codec);
    }

    let file = fs::File::open(path)?;
    let mut stream = BitStream::from_reader_with_config(file, config)?;
    stream.seek(offset, bit);
    log::debug!(
        "loaded {} ({} bytes, {}), cursor at {:?}",
        path.display(),
        stream.len(),
        stream.bit_order(),
        stream.position()
    );
    Ok(stream)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_byte() {
        assert_eq!(parse_byte("255"), Ok(255));
        assert_eq!(parse_byte("0x0F"), Ok(0x0F));
        assert_eq!(parse_byte("0b1010_0101"), Ok(0xA5));
        assert!(parse_byte("256").is_err());
        assert!(parse_byte("0xZZ").is_err());
    }

    #[test]
    fn test_bit_order_flag() {
        assert_eq!(bit_order(true), BitOrder::Msb);
        assert_eq!(bit_order(false), BitOrder::Lsb);
    }
}
