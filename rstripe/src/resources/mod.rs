//! Typed shapes of the API's resources and the parameter objects that create
//! or modify them.
//!
//! Response shapes decode leniently: scalars the API may send as `null` fall
//! back to their zero value (see [`crate::nullable`]), and values that may be
//! genuinely absent are `Option`s. Parameter objects implement
//! [`ToForm`](crate::form::ToForm) and leave out optional fields that are at
//! their zero value.

pub mod account;
pub mod charge;
pub mod coupon;
pub mod customer;
pub mod invoice_item;
pub mod plan;
pub mod subscription;
pub mod token;

pub use account::Account;
pub use charge::{Charge, ChargeListParams, ChargeParams};
pub use coupon::{Coupon, CouponParams, Duration};
pub use customer::{Customer, CustomerParams, Discount};
pub use invoice_item::{
    InvoiceItem, InvoiceItemListParams, InvoiceItemParams, InvoiceItemUpdateParams,
};
pub use plan::{Interval, Plan, PlanParams};
pub use subscription::{Subscription, SubscriptionParams, SubscriptionStatus};
pub use token::{Token, TokenParams};

use serde::{Deserialize, Serialize};

/// Response to a `DELETE` on a resource.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Identifier of the deleted object.
    #[serde(default)]
    pub id: String,
    /// Whether the object was deleted.
    #[serde(default, deserialize_with = "crate::nullable::deserialize")]
    pub deleted: bool,
}

/// A page of objects returned by a list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List<T> {
    /// The objects on this page.
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
    /// Total number of objects, when the API reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self {
            data: Vec::new(),
            count: None,
        }
    }
}

impl<T> List<T> {
    /// Consumes the page, returning its objects.
    #[must_use]
    pub fn into_data(self) -> Vec<T> {
        self.data
    }
}

/// Percent-encodes an identifier for use as a single path segment.
#[must_use]
pub fn path_segment(id: &str) -> String {
    url::form_urlencoded::byte_serialize(id.as_bytes())
        .collect::<String>()
        .replace('+', "%20")
}
