//! Conversion between amounts and capitalized Chinese numerals (大写金额).
mod currency;
mod format;
mod parse;
mod tables;
mod types;

pub use currency::*;
pub use format::*;
pub use parse::*;
pub use tables::*;
pub use types::*;
