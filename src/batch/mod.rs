//! Batch conversion of spreadsheet rows through a channel-fed converter task.
mod conversion;
mod converter;
mod request;
mod types;

pub use conversion::*;
pub use converter::*;
pub use request::*;
pub use types::*;
