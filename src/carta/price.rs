//! Currency formatting for item prices.
//!
//! Catalog prices are stored as small magnitudes (thousands of pesos) and are
//! scaled before display. Formatting never fails: whenever the configured
//! format cannot produce a value, the raw magnitude is shown as `$<value>`.

use serde::{Deserialize, Serialize};

/// Separator between the currency symbol and the amount.
const SYMBOL_SEPARATOR: char = '\u{a0}';

/// Locale conventions for a currency amount. Defaults produce Colombian pesos
/// the way the page displays them, e.g. `$ 38.000`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    #[serde(default = "default_symbol")]
    pub symbol: String,
    #[serde(default = "default_thousands_separator")]
    pub thousands_separator: String,
    #[serde(default = "default_decimal_separator")]
    pub decimal_separator: String,
    #[serde(default)]
    pub fraction_digits: u8,
    #[serde(default = "default_scale")]
    pub scale: u32,
}

fn default_symbol() -> String {
    "$".to_string()
}

fn default_thousands_separator() -> String {
    ".".to_string()
}

fn default_decimal_separator() -> String {
    ",".to_string()
}

fn default_scale() -> u32 {
    1000
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: default_symbol(),
            thousands_separator: default_thousands_separator(),
            decimal_separator: default_decimal_separator(),
            fraction_digits: 0,
            scale: default_scale(),
        }
    }
}

impl CurrencyFormat {
    /// Formats `value * scale`, or `None` when the amount is not representable.
    pub fn format(&self, value: f64) -> Option<String> {
        if self.fraction_digits > 6 {
            return None;
        }
        let scaled = value * f64::from(self.scale);
        if !scaled.is_finite() || scaled < 0.0 {
            return None;
        }

        let unit = 10u128.pow(u32::from(self.fraction_digits));
        let rounded = (scaled * unit as f64).round();
        if rounded >= u128::MAX as f64 {
            return None;
        }
        let rounded = rounded as u128;
        let whole = group_digits(&(rounded / unit).to_string(), &self.thousands_separator);

        let mut out = format!("{}{}{}", self.symbol, SYMBOL_SEPARATOR, whole);
        if self.fraction_digits > 0 {
            let fraction = rounded % unit;
            out.push_str(&self.decimal_separator);
            out.push_str(&format!(
                "{:0width$}",
                fraction,
                width = usize::from(self.fraction_digits)
            ));
        }
        Some(out)
    }
}

fn group_digits(digits: &str, separator: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3 * separator.len());
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push_str(separator);
        }
        out.push(c);
    }
    out
}

/// Formats prices for display, falling back to the raw magnitude.
///
/// The default formatter uses [`CurrencyFormat::default`]. Only
/// [`PriceFormatter::unavailable`] (or `new(None)`) builds one without
/// currency support, where every price takes the fallback path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceFormatter {
    currency: Option<CurrencyFormat>,
}

impl Default for PriceFormatter {
    fn default() -> Self {
        Self::from(CurrencyFormat::default())
    }
}

impl PriceFormatter {
    pub fn new(currency: Option<CurrencyFormat>) -> Self {
        Self { currency }
    }

    pub fn unavailable() -> Self {
        Self { currency: None }
    }

    pub fn format(&self, value: f64) -> String {
        self.currency
            .as_ref()
            .and_then(|currency| currency.format(value))
            .unwrap_or_else(|| fallback(value))
    }
}

impl From<CurrencyFormat> for PriceFormatter {
    fn from(currency: CurrencyFormat) -> Self {
        Self::new(Some(currency))
    }
}

fn fallback(value: f64) -> String {
    format!("${}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pesos() -> PriceFormatter {
        PriceFormatter::from(CurrencyFormat::default())
    }

    #[test]
    fn scales_and_groups_thousands() {
        assert_eq!(pesos().format(38.0), "$\u{a0}38.000");
        assert_eq!(pesos().format(9.0), "$\u{a0}9.000");
        assert_eq!(pesos().format(1250.0), "$\u{a0}1.250.000");
        assert_eq!(pesos().format(0.0), "$\u{a0}0");
    }

    #[test]
    fn rounds_to_whole_pesos() {
        assert_eq!(pesos().format(12.3456), "$\u{a0}12.346");
    }

    #[test]
    fn fraction_digits_use_decimal_separator() {
        let format = CurrencyFormat {
            symbol: "€".to_string(),
            thousands_separator: ",".to_string(),
            decimal_separator: ".".to_string(),
            fraction_digits: 2,
            scale: 1,
        };
        assert_eq!(
            PriceFormatter::from(format).format(1234.5),
            "€\u{a0}1,234.50"
        );
    }

    #[test]
    fn default_formatter_formats_pesos() {
        assert_eq!(PriceFormatter::default().format(42.0), "$\u{a0}42.000");
        assert_ne!(PriceFormatter::default(), PriceFormatter::unavailable());
    }

    #[test]
    fn unavailable_formatter_uses_raw_value() {
        assert_eq!(PriceFormatter::unavailable().format(38.0), "$38");
        assert_eq!(PriceFormatter::unavailable().format(9.5), "$9.5");
    }

    #[test]
    fn unrepresentable_values_fall_back() {
        assert_eq!(pesos().format(-1.0), "$-1");
        assert_eq!(pesos().format(f64::INFINITY), "$inf");
        assert_eq!(pesos().format(f64::MAX), format!("${}", f64::MAX));
    }

    #[test]
    fn group_digits_handles_short_numbers() {
        assert_eq!(group_digits("7", "."), "7");
        assert_eq!(group_digits("123", "."), "123");
        assert_eq!(group_digits("1234", "."), "1.234");
        assert_eq!(group_digits("123456", "."), "123.456");
    }
}
