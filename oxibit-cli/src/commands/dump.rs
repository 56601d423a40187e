//! Dump command implementation.

use crate::utils::open_stream;
use oxibit_core::BitStream;
use std::path::PathBuf;

/// Bits shown per output line.
const BITS_PER_LINE: u64 = 64;

/// Render `bits` bits from the cursor (all remaining if `None`) as
/// `byte:bit  0101...` lines.
fn dump_lines(
    stream: &BitStream,
    bits: Option<u64>,
) -> Result<Vec<String>, Box<dyn std::error::Error>> {
    let start = stream.cursor().bit_address();
    let remaining = stream.bits_remaining();
    let count = bits.unwrap_or(remaining);
    if count > remaining {
        return Err(format!(
            "requested {} bits but only {} remain after {}:{}",
            count,
            remaining,
            stream.byte_position(),
            stream.bit_position()
        )
        .into());
    }

    let mut lines = Vec::new();
    let mut address = start;
    let end = start + count;
    while address < end {
        let line = BITS_PER_LINE.min(end - address);
        lines.push(format!(
            "{:08}:{}  {}",
            address / 8,
            address % 8,
            stream.bit_string(address, line)?
        ));
        address += line;
    }
    Ok(lines)
}

pub fn cmd_dump(
    file: &PathBuf,
    offset: i64,
    bit: i32,
    bits: Option<u64>,
    msb: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let stream = open_stream(file, msb, None, offset, bit)?;
    let lines = dump_lines(&stream, bits)?;

    println!("File: {}", file.display());
    println!("Length: {} bytes", stream.len());
    println!("Bit order: {}", stream.bit_order());
    println!();
    for line in lines {
        println!("{}", line);
    }

    Ok(())
}
