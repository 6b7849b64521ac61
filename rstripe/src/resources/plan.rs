//! Recurring pricing plans.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::form::{FormParams, ToForm};
use crate::nullable;

/// Billing frequency of a plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Interval {
    /// Billed weekly.
    Week,
    /// Billed monthly.
    #[default]
    Month,
    /// Billed yearly.
    Year,
    /// An interval this client does not know. Only produced by decoding.
    #[serde(other)]
    Unknown,
}

impl Interval {
    /// Wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A plan.
///
/// See <https://stripe.com/docs/api#plan_object>.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Plan identifier.
    #[serde(default)]
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Price per interval, in cents.
    #[serde(default)]
    pub amount: i64,
    /// Billing frequency.
    #[serde(default)]
    pub interval: Interval,
    /// Number of intervals between bills.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub interval_count: u32,
    /// Three-letter ISO currency code.
    #[serde(default)]
    pub currency: String,
    /// Trial length in days, 0 for none.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub trial_period_days: u32,
    /// Whether the plan exists in live mode.
    #[serde(default)]
    pub livemode: bool,
}

/// Parameters for creating a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanParams {
    /// Identifier used when subscribing customers.
    pub id: String,
    /// Price per interval in cents, 0 for a free plan.
    pub amount: i64,
    /// Three-letter ISO currency code.
    pub currency: String,
    /// Billing frequency.
    pub interval: Interval,
    /// (Optional) Number of intervals between bills.
    pub interval_count: u32,
    /// Display name.
    pub name: String,
    /// (Optional) Trial length in days.
    pub trial_period_days: u32,
}

impl ToForm for PlanParams {
    fn append_to(&self, form: &mut FormParams) {
        form.push("id", &self.id)
            .push("name", &self.name)
            .push("amount", self.amount)
            .push("interval", self.interval)
            .push("currency", &self.currency)
            .push_nonzero("interval_count", self.interval_count)
            .push_nonzero("trial_period_days", self.trial_period_days);
    }
}
