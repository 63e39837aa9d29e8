//! Capitalized-numeral text back to an amount.
//!
//! The parser is lenient: glyphs it does not recognize are skipped and
//! malformed unit sequences degrade to a partial value. Only text with nothing
//! left after normalization is rejected.
use std::mem;

use thiserror::Error;

use crate::amount::{
    Amount, CENTS_PER_YUAN, Currency,
    tables::{EXACT, FEN, Glyph, JIAO, MinorUnit, YUAN, YUAN_FORMAL, classify},
};

const TEN_THOUSAND_VALUE: u64 = 10_000;
const HUNDRED_MILLION_VALUE: u64 = 100_000_000;

/// Errors that can occur while parsing numeral text.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    #[error("No numeral text to parse")]
    EmptyInput,
}

/// How a 角 or 分 that follows no digit is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BareMinorUnit {
    /// One unit: a bare 角 is 0.1, a bare 分 is 0.01.
    #[default]
    ImpliedOne,
    /// Contributes nothing.
    Ignore,
}

/// Parsing knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    pub bare_minor_unit: BareMinorUnit,
}

/// Running state of the integer scan.
///
/// `pending` is `None` while a digit or unit is expected and holds the last
/// digit otherwise.
#[derive(Debug, Default)]
struct IntegerScan {
    section: u64,
    ten_thousand: u64,
    hundred_million: u64,
    pending: Option<u64>,
}

impl IntegerScan {
    fn feed(&mut self, glyph: Glyph) {
        match glyph {
            Glyph::Digit(digit) => self.pending = Some(u64::from(digit)),
            Glyph::Place(unit) => {
                // 拾万 reads as 壹拾万
                let implied = if unit == 10 { 1 } else { 0 };
                let digit = self.pending.take().unwrap_or(implied);
                self.section = self.section.saturating_add(digit.saturating_mul(unit));
            }
            Glyph::TenThousand => {
                let group = self.take_section();
                self.ten_thousand = self.ten_thousand.saturating_add(group);
            }
            Glyph::HundredMillion => {
                let group = self.take_section();
                let tier = mem::take(&mut self.ten_thousand)
                    .saturating_mul(TEN_THOUSAND_VALUE)
                    .saturating_add(group);
                self.hundred_million = self
                    .hundred_million
                    .saturating_add(tier.saturating_mul(HUNDRED_MILLION_VALUE));
            }
            Glyph::Yuan | Glyph::Minor(_) => {}
        }
    }

    /// Closes the current group, folding in any pending digit.
    fn take_section(&mut self) -> u64 {
        let digit = self.pending.take().unwrap_or(0);
        mem::take(&mut self.section).saturating_add(digit)
    }

    fn finish(mut self) -> u64 {
        let section = self.take_section();
        self.hundred_million
            .saturating_add(self.ten_thousand.saturating_mul(TEN_THOUSAND_VALUE))
            .saturating_add(section)
    }
}

/// Converts numeral text into amounts.
#[derive(Debug, Clone, Copy, Default)]
pub struct Parser {
    options: ParseOptions,
}

impl Parser {
    pub fn new(options: ParseOptions) -> Self {
        Parser { options }
    }

    /// Parses numeral text such as `壹万贰仟叁佰肆拾伍元陆角柒分`.
    ///
    /// Lowercase numerals are accepted alongside the capitalized ones.
    /// Values beyond [`Amount::MAX`] saturate.
    pub fn parse(&self, text: &str) -> Result<Amount, ParseError> {
        let text = normalize(text);
        if text.is_empty() {
            return Err(ParseError::EmptyInput);
        }

        let text = strip_currency(text);
        let (integer, minor) = split(&text);
        let mut scan = IntegerScan::default();
        for glyph in integer.chars().filter_map(classify) {
            scan.feed(glyph);
        }
        let yuan = scan.finish();
        let cents = yuan
            .saturating_mul(CENTS_PER_YUAN)
            .saturating_add(self.scan_minor(minor));
        Ok(Amount::saturating_from_cents(cents))
    }

    /// Sums the jiao and fen terms, in cents.
    fn scan_minor(&self, text: &str) -> u64 {
        let mut cents: u64 = 0;
        let mut glyphs = text.chars().map(classify).peekable();
        while let Some(glyph) = glyphs.next() {
            match glyph {
                Some(Glyph::Digit(digit)) => {
                    let unit = glyphs.next_if(|next| matches!(next, Some(Glyph::Minor(_))));
                    if let Some(Some(Glyph::Minor(unit))) = unit {
                        cents = cents.saturating_add(u64::from(digit) * unit.cents());
                    }
                }
                Some(Glyph::Minor(unit)) => {
                    cents = cents.saturating_add(self.bare_unit_cents(unit));
                }
                _ => {}
            }
        }
        cents
    }

    fn bare_unit_cents(&self, unit: MinorUnit) -> u64 {
        match self.options.bare_minor_unit {
            BareMinorUnit::ImpliedOne => unit.cents(),
            BareMinorUnit::Ignore => 0,
        }
    }
}

/// Drops whitespace and the trailing exact-amount marker.
fn normalize(text: &str) -> String {
    let mut text: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    if text.ends_with(EXACT) {
        text.pop();
    }
    text
}

/// Drops the first currency name, so that 美元 does not split the text.
///
/// Text holding only a currency name is left empty and reads as zero.
fn strip_currency(text: String) -> String {
    match Currency::find(&text) {
        Some(currency) => text.replacen(currency.name(), "", 1),
        None => text,
    }
}

/// Splits normalized text into its integer and minor parts.
fn split(text: &str) -> (&str, &str) {
    if let Some(parts) = text.split_once([YUAN, YUAN_FORMAL]) {
        parts
    } else if text.contains([JIAO, FEN]) {
        ("", text)
    } else {
        (text, "")
    }
}

/// Parses numeral text with default options.
pub fn parse(text: &str) -> Result<Amount, ParseError> {
    Parser::default().parse(text)
}

/// Parses numeral text with default options into a float with two fractional digits.
pub fn parse_chinese_amount(text: &str) -> Result<f64, ParseError> {
    parse(text).map(|amount| amount.to_f64())
}
