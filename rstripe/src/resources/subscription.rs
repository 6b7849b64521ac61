//! A customer's recurring subscription to a plan.

use serde::{Deserialize, Serialize};

use crate::card::CardSource;
use crate::form::{FormParams, ToForm};
use crate::nullable;
use crate::resources::plan::Plan;

/// Lifecycle state of a subscription.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionStatus {
    /// In the trial period.
    Trialing,
    /// Paid and current.
    #[default]
    Active,
    /// The latest invoice payment failed.
    PastDue,
    /// Canceled.
    Canceled,
    /// Retries were exhausted without payment.
    Unpaid,
    /// A status this client does not know.
    #[serde(other)]
    Unknown,
}

/// A subscription.
///
/// See <https://stripe.com/docs/api#subscription_object>.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subscription {
    /// Subscribed customer.
    #[serde(default)]
    pub customer: String,
    /// Lifecycle state.
    #[serde(default)]
    pub status: SubscriptionStatus,
    /// The subscribed plan.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plan: Option<Plan>,
    /// Start time.
    #[serde(default)]
    pub start: i64,
    /// When the subscription ended, if it has.
    #[serde(default)]
    pub ended_at: Option<i64>,
    /// Start of the current billing period.
    #[serde(default)]
    pub current_period_start: Option<i64>,
    /// End of the current billing period.
    #[serde(default)]
    pub current_period_end: Option<i64>,
    /// Start of the trial, if any.
    #[serde(default)]
    pub trial_start: Option<i64>,
    /// End of the trial, if any.
    #[serde(default)]
    pub trial_end: Option<i64>,
    /// When the subscription was canceled, if it was.
    #[serde(default)]
    pub canceled_at: Option<i64>,
    /// Whether the subscription ends with the current period.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub cancel_at_period_end: bool,
    /// Quantity of the plan.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub quantity: i64,
}

/// Parameters for subscribing a customer to a plan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriptionParams {
    /// Plan to subscribe to.
    pub plan: String,
    /// (Optional) Coupon to apply along with the subscription.
    pub coupon: String,
    /// (Optional) Prorate when switching plans mid-cycle.
    pub prorate: bool,
    /// (Optional) End of the trial, seconds since the epoch.
    pub trial_end: i64,
    /// (Optional) New card token or details for the customer.
    pub card: Option<CardSource>,
    /// (Optional) Quantity of the plan.
    pub quantity: i64,
}

impl ToForm for SubscriptionParams {
    fn append_to(&self, form: &mut FormParams) {
        form.push("plan", &self.plan)
            .push_str("coupon", &self.coupon)
            .push_flag("prorate", self.prorate)
            .push_nonzero("trial_end", self.trial_end)
            .push_nonzero("quantity", self.quantity);
        if let Some(card) = &self.card {
            card.append_to(form);
        }
    }
}
