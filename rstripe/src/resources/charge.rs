//! Charges against a card or customer.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::card::{Card, CardSource};
use crate::form::{FormParams, ListParams, ToForm};
use crate::nullable;

/// A charge.
///
/// See <https://stripe.com/docs/api#charge_object>.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charge {
    /// Charge identifier.
    #[serde(default)]
    pub id: String,
    /// Free-form description.
    #[serde(rename = "description", default, deserialize_with = "nullable::deserialize")]
    pub desc: String,
    /// Amount in the smallest currency unit (cents).
    #[serde(default)]
    pub amount: i64,
    /// Three-letter ISO currency code.
    #[serde(default)]
    pub currency: String,
    /// Creation time, seconds since the epoch.
    #[serde(default)]
    pub created: i64,
    /// Customer the charge belongs to, if any.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub customer: String,
    /// Invoice the charge pays, if any.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub invoice: String,
    /// Fees paid for this charge, in cents.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub fee: i64,
    /// Whether the charge succeeded.
    #[serde(default)]
    pub paid: bool,
    /// Whether the charge was fully refunded. Stays `false` after a partial refund.
    #[serde(default)]
    pub refunded: bool,
    /// Amount refunded so far, in cents.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub amount_refunded: i64,
    /// Whether the charge was disputed.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub disputed: bool,
    /// Whether the charge was made in live mode.
    #[serde(default)]
    pub livemode: bool,
    /// The card that was charged.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    /// Key/value pairs attached to the charge.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub metadata: HashMap<String, String>,
}

/// Parameters for creating a charge.
///
/// Exactly one of `customer` or `card` should be set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChargeParams {
    /// Amount in cents. The API's minimum is 50.
    pub amount: i64,
    /// Three-letter ISO currency code.
    pub currency: String,
    /// (Optional) Existing customer to charge.
    pub customer: String,
    /// (Optional) Description shown alongside the charge.
    pub desc: String,
    /// (Optional) Card token or card details to charge.
    pub card: Option<CardSource>,
    /// (Optional) Key/value pairs to attach.
    pub metadata: HashMap<String, String>,
}

impl ToForm for ChargeParams {
    fn append_to(&self, form: &mut FormParams) {
        form.push("amount", self.amount)
            .push("currency", &self.currency)
            .push_str("customer", &self.customer)
            .push_str("description", &self.desc)
            .push_metadata(&self.metadata);
        if let Some(card) = &self.card {
            card.append_to(form);
        }
    }
}

/// Filters for listing charges.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChargeListParams {
    /// Paging window.
    pub page: ListParams,
    /// (Optional) Only return charges for this customer.
    pub customer: String,
}

impl ToForm for ChargeListParams {
    fn append_to(&self, form: &mut FormParams) {
        self.page.append_to(form);
        form.push_str("customer", &self.customer);
    }
}
