//! Currency markers written in front of capitalized amounts.
use std::fmt;

/// Currencies recognized by name in numeral text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Currency {
    #[default]
    Rmb,
    Usd,
    Eur,
}

impl Currency {
    /// Search order used by [`Currency::find`].
    pub const ALL: [Currency; 3] = [Currency::Rmb, Currency::Usd, Currency::Eur];

    /// Chinese name as written before the amount.
    pub const fn name(self) -> &'static str {
        match self {
            Currency::Rmb => "人民币",
            Currency::Usd => "美元",
            Currency::Eur => "欧元",
        }
    }

    /// Display symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Currency::Rmb => "￥",
            Currency::Usd => "$",
            Currency::Eur => "€",
        }
    }

    /// Returns the first currency whose name appears in `text`.
    pub fn find(text: &str) -> Option<Currency> {
        Self::ALL
            .into_iter()
            .find(|currency| text.contains(currency.name()))
    }

    /// Like [`Currency::find`], falling back to renminbi.
    pub fn detect(text: &str) -> Currency {
        Self::find(text).unwrap_or_default()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::Currency;

    #[test]
    fn test_detect() {
        assert_eq!(Currency::detect("人民币壹佰元整"), Currency::Rmb);
        assert_eq!(Currency::detect("美元伍拾元"), Currency::Usd);
        assert_eq!(Currency::detect("欧元伍拾元"), Currency::Eur);
        assert_eq!(Currency::detect("伍拾元"), Currency::Rmb);
        assert_eq!(Currency::find("伍拾元"), None);
    }

    #[test]
    fn test_symbols() {
        assert_eq!(Currency::Usd.to_string(), "$");
        assert_eq!(Currency::Eur.symbol(), "€");
        assert_eq!(Currency::Rmb.symbol(), "￥");
    }
}
