//! # Currency Formatting
//!
//! Converts integer cents into a localized display string.
//!
//! ## Conversion
//! ```text
//! Money(173000) ──► split_units(2) ──► (1730, 0)
//!                                         │
//!                     en-US               ▼               de-DE
//!                  "$1,730.00"   ◄── group + join ──►   "1.730,00 €"
//! ```
//!
//! Only integer division and remainder are used, so a total prints exactly
//! what was accumulated.

use std::fmt;
use std::str::FromStr;

use theater_core::Money;

use crate::error::RenderError;

// =============================================================================
// Strategy Trait
// =============================================================================

/// Turns an amount in minor units into display text.
pub trait CurrencyFormatter {
    fn format(&self, amount: Money) -> String;
}

// =============================================================================
// Locale Currency
// =============================================================================

/// Symbol placement and separators for one locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleCurrency {
    /// Currency symbol, e.g. `$` or `€`.
    pub symbol: String,
    /// Digits after the decimal separator (2 for cents).
    pub minor_digits: u32,
    /// Thousands separator.
    pub group_separator: char,
    /// Separator between major and minor units.
    pub decimal_separator: char,
    /// `true` renders `1,00 €`, `false` renders `$1.00`.
    pub symbol_after: bool,
}

impl LocaleCurrency {
    /// US dollars: `$1,730.00`.
    pub fn en_us() -> Self {
        LocaleCurrency {
            symbol: "$".to_string(),
            minor_digits: 2,
            group_separator: ',',
            decimal_separator: '.',
            symbol_after: false,
        }
    }

    /// German euro format: `1.730,00 €`.
    pub fn de_de() -> Self {
        LocaleCurrency {
            symbol: "€".to_string(),
            minor_digits: 2,
            group_separator: '.',
            decimal_separator: ',',
            symbol_after: true,
        }
    }
}

impl Default for LocaleCurrency {
    fn default() -> Self {
        LocaleCurrency::en_us()
    }
}

impl CurrencyFormatter for LocaleCurrency {
    fn format(&self, amount: Money) -> String {
        let (major, minor) = amount.split_units(self.minor_digits);

        let mut number = group_thousands(major, self.group_separator);
        if self.minor_digits > 0 {
            number.push(self.decimal_separator);
            number.push_str(&format!(
                "{:0width$}",
                minor,
                width = self.minor_digits as usize
            ));
        }

        let sign = if amount.is_negative() { "-" } else { "" };
        if self.symbol_after {
            format!("{}{} {}", sign, number, self.symbol)
        } else {
            format!("{}{}{}", sign, self.symbol, number)
        }
    }
}

/// Inserts `separator` between every group of three digits.
fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(ch);
    }

    grouped
}

// =============================================================================
// Locale Selection
// =============================================================================

/// Locales with a built-in currency format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    EnUs,
    DeDe,
}

impl Locale {
    /// Returns the currency format for this locale.
    pub fn currency(&self) -> LocaleCurrency {
        match self {
            Locale::EnUs => LocaleCurrency::en_us(),
            Locale::DeDe => LocaleCurrency::de_de(),
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Locale::EnUs => write!(f, "en-US"),
            Locale::DeDe => write!(f, "de-DE"),
        }
    }
}

impl FromStr for Locale {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "en-us" | "en" | "us" => Ok(Locale::EnUs),
            "de-de" | "de" => Ok(Locale::DeDe),
            _ => Err(RenderError::UnknownLocale(s.to_string())),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_en_us_format() {
        let usd = LocaleCurrency::en_us();
        assert_eq!(usd.format(Money::from_cents(65_000)), "$650.00");
        assert_eq!(usd.format(Money::from_cents(173_000)), "$1,730.00");
        assert_eq!(usd.format(Money::from_cents(123_456_789)), "$1,234,567.89");
        assert_eq!(usd.format(Money::from_cents(7)), "$0.07");
        assert_eq!(usd.format(Money::zero()), "$0.00");
        assert_eq!(usd.format(Money::from_cents(-550)), "-$5.50");
    }

    #[test]
    fn test_de_de_format() {
        let eur = LocaleCurrency::de_de();
        assert_eq!(eur.format(Money::from_cents(173_000)), "1.730,00 €");
        assert_eq!(eur.format(Money::from_cents(-99)), "-0,99 €");
    }

    #[test]
    fn test_zero_minor_digits() {
        let yen = LocaleCurrency {
            symbol: "¥".to_string(),
            minor_digits: 0,
            group_separator: ',',
            decimal_separator: '.',
            symbol_after: false,
        };
        assert_eq!(yen.format(Money::from_cents(1_500_000)), "¥1,500,000");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0, ','), "0");
        assert_eq!(group_thousands(999, ','), "999");
        assert_eq!(group_thousands(1000, ','), "1,000");
        assert_eq!(group_thousands(100_000, '.'), "100.000");
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("en-US".parse::<Locale>().unwrap(), Locale::EnUs);
        assert_eq!("de_DE".parse::<Locale>().unwrap(), Locale::DeDe);
        assert!(matches!(
            "fr-FR".parse::<Locale>(),
            Err(RenderError::UnknownLocale(l)) if l == "fr-FR"
        ));
        assert_eq!(Locale::DeDe.to_string(), "de-DE");
    }
}
