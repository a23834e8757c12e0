//! JSON output for recipe records.
//!
//! The document is a single array. Every number in it is finite: records
//! carrying NaN or an infinity are refused before any byte is written, and
//! the destination file is only replaced once the whole array is on disk.

mod error;
mod finite;
mod json;

pub use error::{OutputError, Result};
pub use finite::ensure_finite;
pub use json::{WriteOptions, temp_path, write_records, write_records_to};
