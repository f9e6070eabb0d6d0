/// Amount used when the user did not supply a usable number.
pub const DEFAULT_AMOUNT: i64 = 1;

/// Number of currencies in the main-currency list.
pub const MAIN_CURRENCY_COUNT: usize = 6;

/// Codes of the main currencies, in display order.
pub const MAIN_CURRENCY_CODES: [&str; MAIN_CURRENCY_COUNT] =
    ["USD", "CAD", "CNY", "EUR", "GBP", "JPY"];
