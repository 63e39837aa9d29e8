//! Normalization of the dates that accompany amounts on an instrument.
//!
//! Dates arrive as free text (`2024年1月5日`, `2024/1/5`, `2024.01.05`) or as
//! spreadsheet serial numbers and are rendered as `YYYY年MM月DD日`.
use chrono::{Days, Local, Months, NaiveDate};
use thiserror::Error;

/// Placeholder some spreadsheet exports write into empty date cells.
const MISSING: &str = "NaT";

/// Accepted layouts; `%m` and `%d` take one or two digits.
const DATE_FORMATS: [&str; 4] = ["%Y年%m月%d日", "%Y-%m-%d", "%Y/%m/%d", "%Y.%m.%d"];

/// Serial number of the fictitious 1900-02-29 in the 1900 date system.
const LEAP_BUG_SERIAL: u64 = 60;

/// Errors that can occur while normalizing a date.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Date is empty")]
    Empty,
    #[error("Unrecognized date '{0}'")]
    Unrecognized(String),
    #[error("Spreadsheet serial {0} is out of range")]
    SerialOutOfRange(u64),
}

/// Parses a date written with 年月日, `-`, `/` or `.` separators, or a
/// spreadsheet serial number.
pub fn normalize_date(text: &str) -> Result<NaiveDate, DateError> {
    let text = text.trim();
    if text.is_empty() || text == MISSING {
        return Err(DateError::Empty);
    }
    if text.bytes().all(|b| b.is_ascii_digit()) {
        let serial = text
            .parse()
            .map_err(|_| DateError::Unrecognized(text.to_string()))?;
        return from_serial(serial);
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .ok_or_else(|| DateError::Unrecognized(text.to_string()))
}

/// Converts a serial day number of the 1900 date system.
///
/// Day 1 is 1900-01-01. Day 60 is the 1900-02-29 that never existed and maps
/// to 1900-02-28.
fn from_serial(serial: u64) -> Result<NaiveDate, DateError> {
    let offset = match serial {
        0 => return Err(DateError::SerialOutOfRange(serial)),
        1..LEAP_BUG_SERIAL => serial + 1,
        _ => serial,
    };
    NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|epoch| epoch.checked_add_days(Days::new(offset)))
        .ok_or(DateError::SerialOutOfRange(serial))
}

/// Renders a date as `YYYY年MM月DD日`.
pub fn format_chinese_date(date: NaiveDate) -> String {
    date.format("%Y年%m月%d日").to_string()
}

/// Normalizes and renders `text`, falling back to today's local date.
pub fn normalize_or_today(text: &str) -> String {
    let date = normalize_date(text).unwrap_or_else(|_| Local::now().date_naive());
    format_chinese_date(date)
}

/// Adds whole calendar years, clamping 02-29 to 02-28 in non-leap years.
pub fn add_years(date: NaiveDate, years: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(years.checked_mul(12)?))
}
