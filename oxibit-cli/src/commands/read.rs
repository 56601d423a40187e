//! Read command implementation.

use crate::utils::open_stream;
use clap::ValueEnum;
use oxibit_core::BitStream;
use serde::Serialize;
use std::path::PathBuf;

/// Kind of value to decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Unsigned byte
    U8,
    /// Signed byte
    I8,
    /// Boolean byte (nonzero is true)
    Bool,
    U16,
    I16,
    U24,
    I24,
    U32,
    I32,
    U48,
    I48,
    U64,
    I64,
    /// One character in the chosen encoding
    Char,
    /// `--len` code units in the chosen encoding
    Text,
    /// `--len` raw bits, shown as packed hex bytes
    Bits,
}

/// JSON output for a decoded value.
#[derive(Debug, Serialize)]
struct ReadOutput {
    file: String,
    kind: ValueKind,
    start: [u64; 2],
    end: [u64; 2],
    bit_order: String,
    value: serde_json::Value,
}

fn decode(
    stream: &mut BitStream,
    kind: ValueKind,
    len: usize,
) -> oxibit_core::Result<serde_json::Value> {
    use serde_json::json;

    Ok(match kind {
        ValueKind::U8 => json!(stream.read_byte()?),
        ValueKind::I8 => json!(stream.read_i8()?),
        ValueKind::Bool => json!(stream.read_bool()?),
        ValueKind::U16 => json!(stream.read_u16()?),
        ValueKind::I16 => json!(stream.read_i16()?),
        ValueKind::U24 => json!(stream.read_u24()?),
        ValueKind::I24 => json!(stream.read_i24()?),
        ValueKind::U32 => json!(stream.read_u32()?),
        ValueKind::I32 => json!(stream.read_i32()?),
        ValueKind::U48 => json!(stream.read_u48()?),
        ValueKind::I48 => json!(stream.read_i48()?),
        ValueKind::U64 => json!(stream.read_u64()?),
        ValueKind::I64 => json!(stream.read_i64()?),
        ValueKind::Char => json!(stream.read_char()?.to_string()),
        ValueKind::Text => json!(stream.read_string(len)?),
        ValueKind::Bits => {
            let bytes = stream.read_bits(len as u64)?;
            let hex: Vec<String> = bytes.iter().map(|b| format!("{b:02X}")).collect();
            json!(hex.join(" "))
        }
    })
}

#[allow(clippy::too_many_arguments)]
pub fn cmd_read(
    file: &PathBuf,
    kind: ValueKind,
    offset: i64,
    bit: i32,
    len: usize,
    msb: bool,
    encoding: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut stream = open_stream(file, msb, encoding, offset, bit)?;
    let (start_byte, start_bit) = stream.position();

    let value = decode(&mut stream, kind, len)?;
    let (end_byte, end_bit) = stream.position();

    if json {
        let output = ReadOutput {
            file: file.display().to_string(),
            kind,
            start: [start_byte as u64, start_bit as u64],
            end: [end_byte as u64, end_bit as u64],
            bit_order: stream.bit_order().to_string(),
            value,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let shown = match &value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    println!(
        "{:?} at {}:{} ({}): {}",
        kind,
        start_byte,
        start_bit,
        stream.bit_order(),
        shown
    );
    println!("Cursor now at {}:{}", end_byte, end_bit);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxibit_core::StreamConfig;

    #[test]
    fn test_decode_values() {
        let mut stream =
            BitStream::from_bytes_with_config(&[0xFF, 0xFE, 0x41, 0x42], StreamConfig::msb());
        assert_eq!(decode(&mut stream, ValueKind::I16, 0).unwrap(), -2);
        assert_eq!(decode(&mut stream, ValueKind::Text, 2).unwrap(), "AB");

        stream.rewind();
        assert_eq!(decode(&mut stream, ValueKind::Bits, 12).unwrap(), "FF F0");
    }

    #[test]
    fn test_decode_out_of_range() {
        let mut stream = BitStream::from_bytes(&[0x01]);
        assert!(decode(&mut stream, ValueKind::U16, 0).is_err());
    }
}
