//! Customers, for recurring billing and storing cards.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::card::{Card, CardSource};
use crate::form::{FormParams, ToForm};
use crate::nullable;
use crate::resources::coupon::Coupon;
use crate::resources::subscription::Subscription;

/// A customer.
///
/// See <https://stripe.com/docs/api#customer_object>.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Customer identifier.
    #[serde(default)]
    pub id: String,
    /// Free-form description.
    #[serde(rename = "description", default, deserialize_with = "nullable::deserialize")]
    pub desc: String,
    /// Email address.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub email: String,
    /// Creation time, seconds since the epoch.
    #[serde(default)]
    pub created: i64,
    /// Balance applied to the next invoice, in cents. Negative means credit.
    #[serde(rename = "account_balance", default, deserialize_with = "nullable::deserialize")]
    pub balance: i64,
    /// Whether the latest invoice charge failed.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub delinquent: bool,
    /// Whether the customer exists in live mode.
    #[serde(default)]
    pub livemode: bool,
    /// The customer's active card.
    #[serde(rename = "active_card", default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    /// Discount currently applied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<Discount>,
    /// Current subscription.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription: Option<Subscription>,
    /// Key/value pairs attached to the customer.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub metadata: HashMap<String, String>,
}

/// A coupon applied to a customer.
///
/// See <https://stripe.com/docs/api#discount_object>.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    /// Discount identifier.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub id: String,
    /// Customer the discount applies to.
    #[serde(default)]
    pub customer: String,
    /// When the coupon was applied.
    #[serde(default)]
    pub start: Option<i64>,
    /// When the discount ends; `None` for forever coupons.
    #[serde(default)]
    pub end: Option<i64>,
    /// The applied coupon.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coupon: Option<Coupon>,
}

/// Parameters for creating or updating a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerParams {
    /// (Optional) Email address.
    pub email: String,
    /// (Optional) Free-form description.
    pub desc: String,
    /// (Optional) Coupon to apply.
    pub coupon: String,
    /// (Optional) Plan to subscribe the customer to.
    pub plan: String,
    /// (Optional) Quantity for the plan subscription.
    pub quantity: i64,
    /// (Optional) End of the trial, seconds since the epoch. Overrides the plan's trial.
    pub trial_end: i64,
    /// (Optional) Starting balance, in cents.
    pub balance: i64,
    /// (Optional) Card token or details to attach.
    pub card: Option<CardSource>,
    /// (Optional) Key/value pairs to attach.
    pub metadata: HashMap<String, String>,
}

impl ToForm for CustomerParams {
    fn append_to(&self, form: &mut FormParams) {
        form.push_str("email", &self.email)
            .push_str("description", &self.desc)
            .push_str("coupon", &self.coupon)
            .push_str("plan", &self.plan)
            .push_nonzero("quantity", self.quantity)
            .push_nonzero("trial_end", self.trial_end)
            .push_nonzero("account_balance", self.balance)
            .push_metadata(&self.metadata);
        if let Some(card) = &self.card {
            card.append_to(form);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::{CardBrand, CardParams};

    #[test]
    fn minimal_customer() {
        let form = CustomerParams {
            email: "test1@test.com".into(),
            desc: "a test customer".into(),
            ..CustomerParams::default()
        }
        .to_form();
        assert_eq!(form.len(), 2);
        assert_eq!(form.get("email"), Some("test1@test.com"));
        assert_eq!(form.get("description"), Some("a test customer"));
    }

    #[test]
    fn customer_with_plan_and_card() {
        let form = CustomerParams {
            email: "test2@test.com".into(),
            coupon: "test coupon 1".into(),
            plan: "plan1".into(),
            card: Some(CardSource::Details(CardParams {
                name: "John Smith".into(),
                number: "4242424242424242".into(),
                exp_month: 1,
                exp_year: 2031,
                ..CardParams::default()
            })),
            ..CustomerParams::default()
        }
        .to_form();
        assert_eq!(form.get("coupon"), Some("test coupon 1"));
        assert_eq!(form.get("plan"), Some("plan1"));
        assert_eq!(form.get("card[exp_month]"), Some("1"));
        assert!(!form.contains_key("quantity"));
        assert!(!form.contains_key("account_balance"));
    }

    #[test]
    fn customer_decodes_nested_objects() {
        let json = r#"{
            "id": "cus_1",
            "email": "test2@test.com",
            "description": null,
            "account_balance": 0,
            "delinquent": null,
            "active_card": {"id": "card_1", "type": "Visa", "last4": "4242"},
            "discount": {"id": null, "customer": "cus_1", "start": 1381276800, "end": null,
                         "coupon": {"id": "test coupon 1", "duration": "once", "percent_off": 5}},
            "subscription": null
        }"#;
        let customer: Customer = serde_json::from_str(json).unwrap();
        assert_eq!(customer.desc, "");
        assert!(!customer.delinquent);
        assert_eq!(customer.card.as_ref().map(|c| c.brand), Some(CardBrand::Visa));
        let discount = customer.discount.unwrap();
        assert_eq!(discount.start, Some(1_381_276_800));
        assert_eq!(discount.end, None);
        assert_eq!(discount.coupon.map(|c| c.percent_off), Some(5));
        assert!(customer.subscription.is_none());
    }
}
