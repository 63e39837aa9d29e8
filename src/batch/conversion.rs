//! The outcome of converting one row.
use serde::Serialize;
use thiserror::Error;

use crate::{
    amount::{Amount, Currency, FormatError, Formatter, ParseError, Parser},
    batch::{Request, RequestType, RowId},
    date::{DateError, format_chinese_date, normalize_date},
};

fn serialize_amount<S>(amount: &Option<Amount>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    amount.map(|amount| amount.to_string()).serialize(serializer)
}

fn serialize_currency<S>(currency: &Option<Currency>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    currency.map(Currency::symbol).serialize(serializer)
}

/// Errors that can occur while converting a row.
#[derive(Error, Debug)]
pub enum ConversionError {
    #[error("Input '{0}' is not a number")]
    NotANumber(String),
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Date(#[from] DateError),
}

/// A converted row, as written to the output CSV.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Conversion {
    /// Row identifier of the request.
    row: RowId,

    /// The kind of conversion performed.
    #[serde(rename = "type")]
    request_type: RequestType,

    /// The amount, with two fractional digits.
    #[serde(serialize_with = "serialize_amount")]
    amount: Option<Amount>,

    /// Capitalized numerals for amounts, `YYYY年MM月DD日` for dates.
    text: Option<String>,

    /// Currency symbol detected in parsed text.
    #[serde(serialize_with = "serialize_currency")]
    currency: Option<Currency>,

    /// Why the row could not be converted.
    error: Option<String>,
}

impl Conversion {
    fn new(request: &Request) -> Self {
        Conversion {
            row: request.get_row(),
            request_type: request.get_type(),
            amount: None,
            text: None,
            currency: None,
            error: None,
        }
    }

    /// Converts a request.
    ///
    /// Parsed text is echoed back in canonical capitalized form.
    pub fn from_request(
        request: &Request,
        formatter: &Formatter,
        parser: &Parser,
    ) -> Result<Self, ConversionError> {
        let input = request.get_input();
        let mut conversion = Conversion::new(request);
        match request.get_type() {
            RequestType::Format => {
                let value: f64 = input
                    .parse()
                    .map_err(|_| ConversionError::NotANumber(input.to_string()))?;
                let amount = Amount::from_f64(value)?;
                conversion.text = Some(formatter.format(amount));
                conversion.amount = Some(amount);
            }
            RequestType::Parse => {
                let amount = parser.parse(input)?;
                conversion.text = Some(formatter.format(amount));
                conversion.amount = Some(amount);
                conversion.currency = Some(Currency::detect(input));
            }
            RequestType::Date => {
                conversion.text = Some(format_chinese_date(normalize_date(input)?));
            }
        }
        Ok(conversion)
    }

    /// Records a failed request.
    pub fn failed(request: &Request, error: &ConversionError) -> Self {
        Conversion {
            error: Some(error.to_string()),
            ..Conversion::new(request)
        }
    }

    /// Gets the row identifier.
    pub fn get_row(&self) -> RowId {
        self.row
    }

    /// Gets the amount, if the conversion produced one.
    pub fn get_amount(&self) -> Option<Amount> {
        self.amount
    }

    /// Gets the converted text, if any.
    pub fn get_text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Gets the detected currency, if any.
    pub fn get_currency(&self) -> Option<Currency> {
        self.currency
    }

    /// Gets the error message of a failed conversion.
    pub fn get_error(&self) -> Option<&str> {
        self.error.as_deref()
    }
}
