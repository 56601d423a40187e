//! Command implementations for OxiBit CLI.

pub mod apply;
pub mod dump;
pub mod read;

pub use apply::{Operation, cmd_apply};
pub use dump::cmd_dump;
pub use read::{ValueKind, cmd_read};
