//! Amount to capitalized-numeral text.
use thiserror::Error;

use crate::amount::{
    Amount,
    tables::{
        DIGIT_GLYPHS, EXACT, HUNDRED_MILLION, MinorUnit, PLACE_GLYPHS, TEN_THOUSAND, YUAN, ZERO,
    },
};

/// Value of one 4-digit group.
const GROUP_BASE: u64 = 10_000;

/// Number of 4-digit groups an [`Amount`] can span.
const GROUPS: usize = 4;

/// Errors that can occur while formatting an amount.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum FormatError {
    #[error("Amount must be a non-negative finite number, got {0}")]
    InvalidAmount(f64),
    #[error("Amount {0} exceeds the largest supported value")]
    OutOfRange(f64),
}

/// Formatting knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Write 零 before the fen term when there are no jiao (零叁分).
    pub fen_bridge: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions { fen_bridge: true }
    }
}

/// Where the integer emitter stands with respect to zero digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Zeros {
    /// Nothing written yet; zeros are silent.
    Leading,
    /// The last digit seen was written.
    Settled,
    /// Zeros seen since the last written digit; one 零 is owed.
    Pending,
}

/// Converts amounts into capitalized-numeral text.
#[derive(Debug, Clone, Copy, Default)]
pub struct Formatter {
    options: FormatOptions,
}

impl Formatter {
    pub fn new(options: FormatOptions) -> Self {
        Formatter { options }
    }

    /// Validates and formats a float amount.
    pub fn format_f64(&self, amount: f64) -> Result<String, FormatError> {
        Ok(self.format(Amount::from_f64(amount)?))
    }

    /// Formats an amount, e.g. `壹仟零伍元零叁分` for 1005.03.
    pub fn format(&self, amount: Amount) -> String {
        let mut text = String::new();
        if amount.yuan() == 0 {
            text.push(ZERO);
        } else {
            write_integer(&mut text, amount.yuan());
        }
        text.push(YUAN);

        let integer_len = text.len();
        self.write_minor(&mut text, amount.jiao(), amount.fen());
        if text.len() == integer_len {
            text.push(EXACT);
        }
        text
    }

    fn write_minor(&self, text: &mut String, jiao: u8, fen: u8) {
        if jiao != 0 {
            text.push(DIGIT_GLYPHS[jiao as usize]);
            text.push(MinorUnit::Jiao.glyph());
        }
        if fen != 0 {
            if jiao == 0 && self.options.fen_bridge {
                text.push(ZERO);
            }
            text.push(DIGIT_GLYPHS[fen as usize]);
            text.push(MinorUnit::Fen.glyph());
        }
    }
}

/// Writes a non-zero integer, group by group from the most significant one.
///
/// A run of zeros between two written digits yields exactly one 零, also when
/// the run spans a group boundary. Leading and trailing zeros yield nothing.
fn write_integer(text: &mut String, yuan: u64) {
    let mut groups = [0; GROUPS];
    let mut rest = yuan;
    for group in groups.iter_mut() {
        *group = rest % GROUP_BASE;
        rest /= GROUP_BASE;
    }

    let mut zeros = Zeros::Leading;
    for tier in (0..GROUPS).rev() {
        let group = groups[tier];
        for place in (0..PLACE_GLYPHS.len()).rev() {
            let digit = (group / 10u64.pow(place as u32)) % 10;
            if digit == 0 {
                if zeros == Zeros::Settled {
                    zeros = Zeros::Pending;
                }
                continue;
            }
            if zeros == Zeros::Pending {
                text.push(ZERO);
            }
            zeros = Zeros::Settled;
            text.push(DIGIT_GLYPHS[digit as usize]);
            if let Some(unit) = PLACE_GLYPHS[place] {
                text.push(unit);
            }
        }
        if let Some(unit) = big_unit(tier, &groups) {
            text.push(unit);
        }
    }
}

/// Big unit closing `tier`, if that tier contributes anything.
///
/// The top tier (10^12) is read as 万亿, so a non-zero top tier also forces
/// the 亿 of the tier below it.
fn big_unit(tier: usize, groups: &[u64; GROUPS]) -> Option<char> {
    match tier {
        1 | 3 if groups[tier] != 0 => Some(TEN_THOUSAND),
        2 if groups[2] != 0 || groups[3] != 0 => Some(HUNDRED_MILLION),
        _ => None,
    }
}

/// Formats `amount` with default options.
pub fn format(amount: Amount) -> String {
    Formatter::default().format(amount)
}

/// Formats a float amount with default options.
///
/// Fails for negative, NaN or infinite amounts and never returns partial text.
pub fn format_amount(amount: f64) -> Result<String, FormatError> {
    Formatter::default().format_f64(amount)
}

#[cfg(test)]
mod tests {
    use super::{FormatError, FormatOptions, Formatter, format_amount};

    fn fmt(amount: f64) -> String {
        format_amount(amount).unwrap()
    }

    #[test]
    fn test_zero() {
        assert_eq!(fmt(0.0), "零元整");
    }

    #[test]
    fn test_big_units() {
        assert_eq!(fmt(100000000.0), "壹亿元整");
        assert_eq!(fmt(10000.0), "壹万元整");
        assert_eq!(fmt(1e12), "壹万亿元整");
        assert_eq!(fmt(123450000000.0), "壹仟贰佰叁拾肆亿伍仟万元整");
    }

    #[test]
    fn test_jiao_only() {
        assert_eq!(fmt(10000.5), "壹万元伍角");
    }

    #[test]
    fn test_zero_bridging() {
        assert_eq!(fmt(1005.03), "壹仟零伍元零叁分");
        assert_eq!(fmt(10005.0), "壹万零伍元整");
        assert_eq!(fmt(100010000.0), "壹亿零壹万元整");
        assert_eq!(fmt(100000005.0), "壹亿零伍元整");
        assert_eq!(fmt(101.0), "壹佰零壹元整");
    }

    #[test]
    fn test_fen_bridge_can_be_disabled() {
        let formatter = Formatter::new(FormatOptions { fen_bridge: false });
        assert_eq!(formatter.format_f64(1005.03).unwrap(), "壹仟零伍元叁分");
    }

    #[test]
    fn test_trailing_zeros_are_silent() {
        assert_eq!(fmt(10.0), "壹拾元整");
        assert_eq!(fmt(1200.0), "壹仟贰佰元整");
        assert_eq!(fmt(20000000.0), "贰仟万元整");
    }

    #[test]
    fn test_full_amount() {
        assert_eq!(
            fmt(12345.67),
            "壹万贰仟叁佰肆拾伍元陆角柒分"
        );
        assert_eq!(
            fmt(123456789012.34),
            "壹仟贰佰叁拾肆亿伍仟陆佰柒拾捌万玖仟零壹拾贰元叁角肆分"
        );
    }

    #[test]
    fn test_minor_without_integer() {
        assert_eq!(fmt(0.5), "零元伍角");
        assert_eq!(fmt(0.03), "零元零叁分");
        assert_eq!(fmt(0.35), "零元叁角伍分");
    }

    #[test]
    fn test_rounds_minor_part() {
        assert_eq!(fmt(12.345), "壹拾贰元叁角伍分");
    }

    #[test]
    fn test_no_ascii_digits() {
        for amount in [0.0, 7.07, 90.9, 1010101.01, 9999999999999.99] {
            let text = fmt(amount);
            assert!(!text.chars().any(|c| c.is_ascii_digit()), "{text}");
            assert!(!text.contains("零零"), "{text}");
        }
    }

    #[test]
    fn test_invalid_amount() {
        assert!(matches!(
            format_amount(-1.0),
            Err(FormatError::InvalidAmount(_))
        ));
        assert!(matches!(
            format_amount(f64::NAN),
            Err(FormatError::InvalidAmount(_))
        ));
    }
}
