//! Types used throughout the batch converter.

/// Row ID type, identifying a request and its conversion.
pub type RowId = u32;
