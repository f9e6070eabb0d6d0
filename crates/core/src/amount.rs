//! Amount parsing for user-supplied text.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_AMOUNT;
use crate::errors::{Error, Result};
use fxconvert_conversion::Amount;

/// How user text is turned into an [`Amount`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParseMode {
    /// Blank text defaults to 1; anything else must parse as a decimal.
    #[default]
    Strict,
    /// Text without any ASCII letter defaults to 1; text with a letter is
    /// parsed and rejected if it is not a number.
    Legacy,
}

impl FromStr for ParseMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(ParseMode::Strict),
            "legacy" => Ok(ParseMode::Legacy),
            other => Err(Error::InvalidConfigValue(format!(
                "unknown amount parse mode '{}'",
                other
            ))),
        }
    }
}

impl fmt::Display for ParseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseMode::Strict => f.write_str("strict"),
            ParseMode::Legacy => f.write_str("legacy"),
        }
    }
}

/// Parses amount text into a decimal, never going through `f64`.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmountParser {
    mode: ParseMode,
}

impl AmountParser {
    pub fn new(mode: ParseMode) -> Self {
        Self { mode }
    }

    /// Amount used when the text carries no number.
    pub fn default_amount() -> Amount {
        Decimal::from(DEFAULT_AMOUNT)
    }

    pub fn parse(&self, raw: &str) -> Result<Amount> {
        match self.mode {
            ParseMode::Strict => {
                if raw.trim().is_empty() {
                    return Ok(Self::default_amount());
                }
                parse_decimal(raw)
            }
            ParseMode::Legacy => {
                if !raw.chars().any(|c| c.is_ascii_alphabetic()) {
                    return Ok(Self::default_amount());
                }
                parse_decimal(raw)
            }
        }
    }
}

/// Plain decimal first, then scientific notation (`1e3`, `2.5E-2`).
///
/// Text that does not fit a `Decimal` without rounding is rejected.
fn parse_decimal(raw: &str) -> Result<Amount> {
    let text = raw.trim();
    Decimal::from_str_exact(text)
        .ok()
        .or_else(|| parse_scientific_exact(text))
        .ok_or_else(|| Error::InvalidAmount(raw.to_string()))
}

fn parse_scientific_exact(text: &str) -> Option<Decimal> {
    let (mantissa, exponent) = text.split_once(|c| c == 'e' || c == 'E')?;
    let mut value = Decimal::from_str_exact(mantissa).ok()?;
    let exponent: i64 = exponent.parse().ok()?;

    if exponent < 0 {
        let scale = i64::from(value.scale()).checked_sub(exponent)?;
        if scale > i64::from(Decimal::MAX_SCALE) {
            return None;
        }
        value.set_scale(u32::try_from(scale).ok()?).ok()?;
        return Some(value);
    }
    if value.is_zero() {
        return Some(value);
    }
    if exponent > i64::from(Decimal::MAX_SCALE) {
        return None;
    }
    for _ in 0..exponent {
        value = value.checked_mul(Decimal::TEN)?;
    }
    Some(value)
}
