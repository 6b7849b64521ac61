//! The account the API key belongs to.

use serde::{Deserialize, Serialize};

use crate::nullable;

/// Details of the account behind the API key.
///
/// See <https://stripe.com/docs/api#account>.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account identifier.
    #[serde(default)]
    pub id: String,
    /// Contact email.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub email: String,
    /// Text shown on customers' card statements.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub statement_descriptor: String,
    /// Whether account details have been submitted.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub details_submitted: bool,
    /// Whether the account can create live charges.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub charge_enabled: bool,
    /// Whether funds can be paid out.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub transfer_enabled: bool,
    /// Currencies the account can charge in.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub currencies_supported: Vec<String>,
}
