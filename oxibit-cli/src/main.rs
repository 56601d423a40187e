//! OxiBit CLI - bit-level inspection and patching
//!
//! A Pure Rust utility for dumping, decoding and patching files at arbitrary
//! bit offsets.

mod commands;
mod utils;

use clap::{Parser, Subcommand};
use commands::{Operation, ValueKind, cmd_apply, cmd_dump, cmd_read};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "oxibit")]
#[command(author, version, about = "OxiBit - bit-level file inspection and patching")]
#[command(long_about = "
OxiBit reads and writes files at bit granularity, in LSB-first or MSB-first
bit order.

Examples:
  oxibit dump data.bin
  oxibit dump data.bin --offset 4 --bit 3 --bits 20 --msb
  oxibit read data.bin --kind i24 --offset 2 --bit 5
  oxibit read data.bin --kind text --len 8 --encoding shift_jis --json
  oxibit apply data.bin --op xor --operand 0xFF --repeat 16 -o patched.bin
  oxibit apply data.bin --op rol --count 3 --offset 1 --bit 4 --on-bit
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print bits as 0/1 text
    #[command(alias = "d")]
    Dump {
        /// File to dump
        file: PathBuf,

        /// Starting byte offset (clamped to the file length)
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i64,

        /// Starting bit within the byte (0-7)
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        bit: i32,

        /// Number of bits to print (all remaining if omitted)
        #[arg(short = 'n', long)]
        bits: Option<u64>,

        /// Use MSB-first bit order (default is LSB-first)
        #[arg(short, long)]
        msb: bool,
    },

    /// Decode one value at a bit position
    #[command(alias = "r")]
    Read {
        /// File to read
        file: PathBuf,

        /// Kind of value to decode
        #[arg(short, long, value_enum)]
        kind: ValueKind,

        /// Starting byte offset (clamped to the file length)
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i64,

        /// Starting bit within the byte (0-7)
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        bit: i32,

        /// Length for `text` (code units) and `bits` (bits)
        #[arg(short, long, default_value_t = 1)]
        len: usize,

        /// Use MSB-first bit order (default is LSB-first)
        #[arg(short, long)]
        msb: bool,

        /// Text encoding label for `char` and `text` (default UTF-8)
        #[arg(short, long)]
        encoding: Option<String>,

        /// Output as JSON (machine-readable)
        #[arg(short, long)]
        json: bool,
    },

    /// Apply an in-place operator and save the result
    #[command(alias = "a")]
    Apply {
        /// File to patch
        file: PathBuf,

        /// Operator to apply
        #[arg(short = 'p', long, value_enum)]
        op: Operation,

        /// Operand for and/or/xor (decimal, 0x hex or 0b binary)
        #[arg(short = 'x', long, default_value = "0", value_parser = utils::parse_byte)]
        operand: u8,

        /// Shift or rotation amount (0 and values above 7 change nothing)
        #[arg(short, long, default_value_t = 1)]
        count: u32,

        /// Apply the operator this many times, walking forward
        #[arg(short, long, default_value_t = 1)]
        repeat: usize,

        /// Shift from the current bit instead of the start of the byte
        #[arg(long)]
        on_bit: bool,

        /// Starting byte offset (clamped to the file length)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i64,

        /// Starting bit within the byte (0-7)
        #[arg(short, long, default_value_t = 0, allow_hyphen_values = true)]
        bit: i32,

        /// Use MSB-first bit order (default is LSB-first)
        #[arg(short, long)]
        msb: bool,

        /// Output file (the input is overwritten if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Dump {
            file,
            offset,
            bit,
            bits,
            msb,
        } => cmd_dump(&file, offset, bit, bits, msb),
        Commands::Read {
            file,
            kind,
            offset,
            bit,
            len,
            msb,
            encoding,
            json,
        } => cmd_read(&file, kind, offset, bit, len, msb, encoding.as_deref(), json),
        Commands::Apply {
            file,
            op,
            operand,
            count,
            repeat,
            on_bit,
            offset,
            bit,
            msb,
            output,
        } => cmd_apply(
            &file,
            op,
            operand,
            count,
            repeat,
            on_bit,
            offset,
            bit,
            msb,
            output.as_ref(),
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
