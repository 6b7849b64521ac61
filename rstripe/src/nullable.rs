//! Decoding of scalar fields the API may omit or send as an explicit `null`.
//!
//! Use together with `#[serde(default)]` so that both a missing key and a
//! `null` value produce the type's zero value:
//!
//! ```rust
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Refund {
//!     #[serde(default, deserialize_with = "rstripe::nullable::deserialize")]
//!     amount_refunded: i64,
//! }
//!
//! let refund: Refund = serde_json::from_str(r#"{"amount_refunded":null}"#).unwrap();
//! assert_eq!(refund.amount_refunded, 0);
//! ```
//!
//! Fields whose absence carries meaning (end dates, trial bounds) are modelled
//! as `Option<T>` instead, which serde already decodes from `null`.
//!
//! [`lenient`] goes further and also swallows values of the wrong type. It is
//! meant for best-effort payloads such as the error envelope, where one odd
//! field must not cost the others.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

/// Deserializes `T`, mapping an explicit `null` to `T::default()`.
///
/// Any other value goes through `T`'s own strict decoding, so a string where a
/// number is expected is still an error.
///
/// # Errors
///
/// Returns the deserializer's error if the value is neither `null` nor a valid `T`.
pub fn deserialize<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserializes `T`, mapping `null` or any value `T` cannot decode to `T::default()`.
///
/// The input must still be well-formed JSON; only the field's own shape is
/// forgiven.
///
/// # Errors
///
/// Returns the deserializer's error if the input is not a JSON value at all.
pub fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}
