//! Currency registry: the currency constructor and the fixed main-currency list.

use crate::constants::MAIN_CURRENCY_CODES;
use fxconvert_conversion::Currency;

/// Builds a currency from a raw code.
///
/// No validation happens here; an unknown code is reported by the external
/// service when it is used.
pub fn new_currency(code: &str) -> Currency {
    Currency::new(code.to_string())
}

/// The six widely-traded currencies used as batch targets, always in the
/// same order: USD, CAD, CNY, EUR, GBP, JPY.
pub fn main_currencies() -> Vec<Currency> {
    MAIN_CURRENCY_CODES.iter().copied().map(Currency::new).collect()
}
