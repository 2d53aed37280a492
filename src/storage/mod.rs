//! Storage layer for the expense ledger
//!
//! Provides JSON file storage with atomic writes and automatic directory
//! creation.

pub mod file_io;
pub mod records;

pub use file_io::{read_json_document, write_json_atomic};
pub use records::{decode_records, read_records, write_records};
