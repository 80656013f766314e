//! Currency formatting for display prices
//!
//! Amounts are rounded to 2 decimal places (half away from zero) before
//! formatting; the formatted string is what the cart shows and what the
//! order records carry as `formattedValue`.

use rust_decimal::prelude::*;
use std::str::FromStr;
use thiserror::Error;

/// Rounding for monetary values (2 decimal places, half-up)
pub const DECIMAL_PLACES: u32 = 2;

/// Round to the cent the way every displayed amount is rounded
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Unsupported currency code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unsupported currency: {0}")]
pub struct UnknownCurrency(pub String);

/// How amounts render as currency strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// ISO 4217 code
    pub code: String,
    pub symbol: String,
    pub decimal_separator: char,
    pub thousands_separator: char,
    /// Non-breaking space between symbol and digits
    pub symbol_spacing: bool,
}

impl CurrencyFormat {
    /// Brazilian real, pt-BR: `R$ 1.234,50`
    pub fn brl() -> Self {
        Self {
            code: "BRL".to_string(),
            symbol: "R$".to_string(),
            decimal_separator: ',',
            thousands_separator: '.',
            symbol_spacing: true,
        }
    }

    /// US dollar, en-US: `$1,234.50`
    pub fn usd() -> Self {
        Self {
            code: "USD".to_string(),
            symbol: "$".to_string(),
            decimal_separator: '.',
            thousands_separator: ',',
            symbol_spacing: false,
        }
    }

    /// Euro, en-IE: `€1,234.50`
    pub fn eur() -> Self {
        Self {
            code: "EUR".to_string(),
            symbol: "€".to_string(),
            decimal_separator: '.',
            thousands_separator: ',',
            symbol_spacing: false,
        }
    }

    /// Format an amount with this currency's symbol and separators
    pub fn format(&self, amount: Decimal) -> String {
        let mut rounded = round_money(amount);
        rounded.rescale(DECIMAL_PLACES);

        let negative = rounded < Decimal::ZERO;
        let digits = rounded.abs().to_string();
        let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits.as_str(), "00"));

        let mut out = String::with_capacity(digits.len() + self.symbol.len() + 4);
        if negative {
            out.push('-');
        }
        out.push_str(&self.symbol);
        if self.symbol_spacing {
            out.push('\u{a0}');
        }
        push_grouped(&mut out, int_part, self.thousands_separator);
        out.push(self.decimal_separator);
        out.push_str(frac_part);
        out
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::brl()
    }
}

impl FromStr for CurrencyFormat {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "BRL" => Ok(Self::brl()),
            "USD" => Ok(Self::usd()),
            "EUR" => Ok(Self::eur()),
            _ => Err(UnknownCurrency(s.to_string())),
        }
    }
}

fn push_grouped(out: &mut String, int_part: &str, separator: char) {
    let len = int_part.len();
    for (idx, ch) in int_part.chars().enumerate() {
        if idx > 0 && (len - idx) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
}
