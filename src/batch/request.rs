//! Conversion requests, one per spreadsheet row.
use serde::{Deserialize, Serialize};

use crate::batch::RowId;

/// What to do with the input of a row.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RequestType {
    /// Amount to capitalized numerals.
    Format,
    /// Capitalized numerals to amount.
    Parse,
    /// Free-form date to `YYYY年MM月DD日`.
    Date,
}

/// A single conversion request.
#[derive(Deserialize, Debug, Clone)]
pub struct Request {
    /// The kind of conversion requested.
    #[serde(rename = "type")]
    request_type: RequestType,

    /// Row identifier, echoed in the output.
    row: RowId,

    /// Raw cell content; empty when the cell is missing.
    #[serde(default)]
    input: String,
}

impl Request {
    /// Gets the type of the request.
    pub fn get_type(&self) -> RequestType {
        self.request_type
    }

    /// Gets the row identifier.
    pub fn get_row(&self) -> RowId {
        self.row
    }

    /// Gets the raw input.
    pub fn get_input(&self) -> &str {
        &self.input
    }

    #[cfg(test)]
    pub fn new(request_type: RequestType, row: RowId, input: &str) -> Self {
        Request {
            request_type,
            row,
            input: input.to_string(),
        }
    }
}
