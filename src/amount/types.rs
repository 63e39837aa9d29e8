//! The monetary amount exchanged by the formatter and the parser.
use std::fmt;

use crate::amount::FormatError;

/// Number of cents in one yuan.
pub const CENTS_PER_YUAN: u64 = 100;

/// Number of integer digits covered by the four 4-digit groups.
const MAX_DIGITS: usize = 16;

/// A non-negative amount with exactly two fractional digits.
///
/// Stored as a whole number of yuan plus a minor part (jiao * 10 + fen), so
/// the value is exact regardless of how it was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount {
    yuan: u64,
    minor: u8,
}

impl Amount {
    /// Largest whole-yuan value that fits the 万 / 亿 / 万亿 groups.
    pub const MAX_YUAN: u64 = 9_999_9999_9999_9999;

    /// Zero yuan.
    pub const ZERO: Amount = Amount { yuan: 0, minor: 0 };

    /// Largest representable amount, [`Amount::MAX_YUAN`] yuan and 99 cents.
    pub const MAX: Amount = Amount {
        yuan: Self::MAX_YUAN,
        minor: 99,
    };

    /// Builds an amount from its parts. Returns `None` if `minor` is not a
    /// two-digit value or `yuan` is beyond [`Amount::MAX_YUAN`].
    pub fn new(yuan: u64, minor: u8) -> Option<Self> {
        (minor < 100 && yuan <= Self::MAX_YUAN).then_some(Amount { yuan, minor })
    }

    /// Builds an amount from a whole number of cents.
    pub fn from_cents(cents: u64) -> Option<Self> {
        Self::new(cents / CENTS_PER_YUAN, (cents % CENTS_PER_YUAN) as u8)
    }

    /// Like [`Amount::from_cents`], clamping to [`Amount::MAX`].
    pub fn saturating_from_cents(cents: u64) -> Self {
        Self::from_cents(cents).unwrap_or(Self::MAX)
    }

    /// Converts a float, rounding its decimal representation half away from
    /// zero to two fractional digits (12.345 becomes 12.35).
    pub fn from_f64(value: f64) -> Result<Self, FormatError> {
        if !value.is_finite() || value < 0.0 {
            return Err(FormatError::InvalidAmount(value));
        }
        if value == 0.0 {
            return Ok(Self::ZERO);
        }

        // `Display` for f64 is the shortest round-trip form and never uses an exponent.
        let repr = value.to_string();
        let (whole, fraction) = repr.split_once('.').unwrap_or((repr.as_str(), ""));
        if whole.len() > MAX_DIGITS {
            return Err(FormatError::OutOfRange(value));
        }
        let yuan: u64 = whole
            .parse()
            .map_err(|_| FormatError::OutOfRange(value))?;

        let mut fraction = fraction.bytes().map(|b| u64::from(b - b'0'));
        let mut next_digit = || fraction.next().unwrap_or(0);
        let jiao = next_digit();
        let fen = next_digit();
        let mut cents = yuan * CENTS_PER_YUAN + jiao * 10 + fen;
        if next_digit() >= 5 {
            cents += 1;
        }

        Self::from_cents(cents).ok_or(FormatError::OutOfRange(value))
    }

    /// Whole yuan.
    pub fn yuan(&self) -> u64 {
        self.yuan
    }

    /// Minor part, jiao * 10 + fen.
    pub fn minor(&self) -> u8 {
        self.minor
    }

    /// Jiao digit of the minor part.
    pub fn jiao(&self) -> u8 {
        self.minor / 10
    }

    /// Fen digit of the minor part.
    pub fn fen(&self) -> u8 {
        self.minor % 10
    }

    /// Total value in cents.
    pub fn cents(&self) -> u64 {
        self.yuan * CENTS_PER_YUAN + u64::from(self.minor)
    }

    /// Nearest `f64` to this amount.
    pub fn to_f64(&self) -> f64 {
        self.cents() as f64 / CENTS_PER_YUAN as f64
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.yuan, self.minor)
    }
}

#[cfg(test)]
mod tests {
    use super::Amount;
    use crate::amount::FormatError;

    #[test]
    fn test_from_f64_splits_parts() {
        let amount = Amount::from_f64(12345.67).unwrap();
        assert_eq!(amount.yuan(), 12345);
        assert_eq!(amount.jiao(), 6);
        assert_eq!(amount.fen(), 7);
    }

    #[test]
    fn test_from_f64_rounds_half_away_from_zero() {
        assert_eq!(Amount::from_f64(12.345).unwrap().minor(), 35);
        assert_eq!(Amount::from_f64(12.344).unwrap().minor(), 34);
        assert_eq!(Amount::from_f64(0.125).unwrap().minor(), 13);
    }

    #[test]
    fn test_from_f64_rounding_carries_into_yuan() {
        let amount = Amount::from_f64(9.999).unwrap();
        assert_eq!(amount.yuan(), 10);
        assert_eq!(amount.minor(), 0);
    }

    #[test]
    fn test_from_f64_rejects_invalid() {
        assert!(matches!(
            Amount::from_f64(-1.0),
            Err(FormatError::InvalidAmount(_))
        ));
        assert!(matches!(
            Amount::from_f64(f64::NAN),
            Err(FormatError::InvalidAmount(_))
        ));
        assert!(matches!(
            Amount::from_f64(f64::INFINITY),
            Err(FormatError::InvalidAmount(_))
        ));
        assert!(matches!(
            Amount::from_f64(1e16),
            Err(FormatError::OutOfRange(_))
        ));
    }

    #[test]
    fn test_negative_zero_is_zero() {
        assert_eq!(Amount::from_f64(-0.0).unwrap(), Amount::ZERO);
    }

    #[test]
    fn test_cents_conversions() {
        let amount = Amount::from_cents(100_503).unwrap();
        assert_eq!(amount.yuan(), 1005);
        assert_eq!(amount.minor(), 3);
        assert_eq!(amount.to_f64(), 1005.03);
        assert_eq!(amount.to_string(), "1005.03");
        assert_eq!(Amount::saturating_from_cents(u64::MAX), Amount::MAX);
        assert!(Amount::new(1, 100).is_none());
    }
}
