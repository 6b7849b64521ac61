//! Percent-off coupons applied to customers.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::form::{FormParams, ToForm};
use crate::nullable;

/// How long a coupon's discount lasts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Duration {
    /// Applies to every invoice.
    Forever,
    /// Applies to the first invoice only.
    #[default]
    Once,
    /// Applies for `duration_in_months` months.
    Repeating,
    /// A duration this client does not know. Only produced by decoding.
    #[serde(other)]
    Unknown,
}

impl Duration {
    /// Wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Forever => "forever",
            Self::Once => "once",
            Self::Repeating => "repeating",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A coupon.
///
/// See <https://stripe.com/docs/api#coupon_object>.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coupon {
    /// Coupon identifier (the code customers enter).
    #[serde(default)]
    pub id: String,
    /// How long the discount lasts.
    #[serde(default)]
    pub duration: Duration,
    /// Discount percentage, 1-100.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub percent_off: u32,
    /// Number of months the discount lasts, for repeating coupons.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub duration_in_months: u32,
    /// Maximum number of redemptions, 0 when unlimited.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub max_redemptions: u32,
    /// Last time the coupon can be redeemed, seconds since the epoch.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub redeem_by: i64,
    /// Times the coupon has been redeemed.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub times_redeemed: u32,
    /// Whether the coupon exists in live mode.
    #[serde(default)]
    pub livemode: bool,
}

/// Parameters for creating a coupon.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CouponParams {
    /// (Optional) Code identifying the coupon. Generated when empty.
    pub id: String,
    /// Discount percentage, 1-100.
    pub percent_off: u32,
    /// How long the discount lasts.
    pub duration: Duration,
    /// (Optional) Months the discount lasts, for repeating coupons.
    pub duration_in_months: u32,
    /// (Optional) Maximum number of redemptions.
    pub max_redemptions: u32,
    /// (Optional) Last redemption time, seconds since the epoch.
    pub redeem_by: i64,
}

impl ToForm for CouponParams {
    fn append_to(&self, form: &mut FormParams) {
        form.push("duration", self.duration)
            .push("percent_off", self.percent_off)
            .push_str("id", &self.id)
            .push_nonzero("duration_in_months", self.duration_in_months)
            .push_nonzero("max_redemptions", self.max_redemptions)
            .push_nonzero("redeem_by", self.redeem_by);
    }
}
