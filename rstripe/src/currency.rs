//! ISO 4217 codes for the major currencies, in the lowercase form the API expects.
//!
//! Not an exhaustive list; any code the account supports may be passed as a plain string.

/// US Dollar.
pub const USD: &str = "usd";
/// Euro.
pub const EUR: &str = "eur";
/// British Pound Sterling.
pub const GBP: &str = "gbp";
/// Japanese Yen.
pub const JPY: &str = "jpy";
/// Canadian Dollar.
pub const CAD: &str = "cad";
/// Hong Kong Dollar.
pub const HKD: &str = "hkd";
/// Chinese Yuan.
pub const CNY: &str = "cny";
/// Australian Dollar.
pub const AUD: &str = "aud";
