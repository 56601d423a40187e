//! Apply command implementation.

use crate::utils::open_stream;
use clap::ValueEnum;
use oxibit_core::{BitStream, ShiftDirection};
use std::fs;
use std::path::PathBuf;

/// In-place operator to apply at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Operation {
    /// AND a byte with the operand
    And,
    /// OR a byte with the operand
    Or,
    /// XOR a byte with the operand
    Xor,
    /// Invert a byte
    Not,
    /// AND a bit with the operand's low bit
    BitAnd,
    /// OR a bit with the operand's low bit
    BitOr,
    /// XOR a bit with the operand's low bit
    BitXor,
    /// Invert a bit
    BitNot,
    /// Shift a byte left by --count
    Shl,
    /// Shift a byte right by --count
    Shr,
    /// Rotate a byte left by --count
    Rol,
    /// Rotate a byte right by --count
    Ror,
}

impl Operation {
    /// Apply once, moving the cursor one unit on.
    fn apply(
        self,
        stream: &mut BitStream,
        operand: u8,
        count: u32,
        on_bit: bool,
    ) -> oxibit_core::Result<()> {
        match self {
            Self::And => stream.and(operand),
            Self::Or => stream.or(operand),
            Self::Xor => stream.xor(operand),
            Self::Not => stream.not(),
            Self::BitAnd => stream.bit_and(operand),
            Self::BitOr => stream.bit_or(operand),
            Self::BitXor => stream.bit_xor(operand),
            Self::BitNot => stream.bit_not(),
            Self::Shl | Self::Shr | Self::Rol | Self::Ror => {
                let direction = match self {
                    Self::Shl | Self::Rol => ShiftDirection::Left,
                    _ => ShiftDirection::Right,
                };
                let circular = matches!(self, Self::Rol | Self::Ror);
                match (circular, on_bit) {
                    (false, false) => stream.shift(count, direction),
                    (false, true) => stream.shift_on_bit(count, direction),
                    (true, false) => stream.circular_shift(count, direction),
                    (true, true) => stream.circular_shift_on_bit(count, direction),
                }
            }
        }
    }
}

#[allow(clippy::too_many_arguments)]
pub fn cmd_apply(
    file: &PathBuf,
    op: Operation,
    operand: u8,
    count: u32,
    repeat: usize,
    on_bit: bool,
    offset: i64,
    bit: i32,
    msb: bool,
    output: Option<&PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut stream = open_stream(file, msb, None, offset, bit)?;
    let start = stream.position();

    for _ in 0..repeat {
        op.apply(&mut stream, operand, count, on_bit)?;
    }

    let target = output.unwrap_or(file);
    fs::write(target, stream.as_bytes())?;
    log::info!(
        "applied {:?} x{} from {}:{} to {}:{}",
        op,
        repeat,
        start.0,
        start.1,
        stream.byte_position(),
        stream.bit_position()
    );

    println!(
        "Applied {:?} {} time(s) starting at {}:{}",
        op, repeat, start.0, start.1
    );
    println!("Wrote {} bytes to {}", stream.len(), target.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_walks_buffer() {
        let mut stream = BitStream::from_bytes(&[0x0F, 0xF0, 0xAA]);
        for _ in 0..3 {
            Operation::Xor.apply(&mut stream, 0xFF, 0, false).unwrap();
        }
        assert_eq!(stream.as_bytes(), &[0xF0, 0x0F, 0x55]);
        assert!(Operation::Xor.apply(&mut stream, 0xFF, 0, false).is_err());
    }

    #[test]
    fn test_apply_rotations() {
        let mut stream = BitStream::from_bytes(&[0x81, 0x81]);
        Operation::Rol.apply(&mut stream, 0, 1, false).unwrap();
        Operation::Shr.apply(&mut stream, 0, 1, false).unwrap();
        assert_eq!(stream.as_bytes(), &[0x03, 0x40]);
    }

    #[test]
    fn test_apply_bits() {
        let mut stream = BitStream::from_bytes(&[0x00]);
        Operation::BitNot.apply(&mut stream, 0, 0, false).unwrap();
        Operation::BitOr.apply(&mut stream, 1, 0, false).unwrap();
        assert_eq!(stream.as_bytes(), &[0x03]);
        assert_eq!(stream.position(), (0, 2));
    }
}
