//! Capitalized Chinese monetary amounts (大写金额).
//!
//! Formats amounts as the anti-fraud numerals written on financial
//! instruments, parses such text back leniently, and converts spreadsheet
//! rows in bulk.
pub mod amount;
pub mod batch;
pub mod config;
pub mod date;

pub use amount::{Amount, FormatError, ParseError, format_amount, parse_chinese_amount};
