//! Invoice items: one-off charges or credits added to a customer's next invoice.

use serde::{Deserialize, Serialize};

use crate::form::{FormParams, ListParams, ToForm};
use crate::nullable;

/// An invoice item.
///
/// See <https://stripe.com/docs/api#invoiceitem_object>.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceItem {
    /// Invoice item identifier.
    #[serde(default)]
    pub id: String,
    /// Amount in cents. Negative for a credit.
    #[serde(default)]
    pub amount: i64,
    /// Three-letter ISO currency code.
    #[serde(default)]
    pub currency: String,
    /// Customer billed for the item.
    #[serde(default)]
    pub customer: String,
    /// Creation time, seconds since the epoch.
    #[serde(default)]
    pub date: i64,
    /// Description shown on the invoice.
    #[serde(rename = "description", default, deserialize_with = "nullable::deserialize")]
    pub desc: String,
    /// Invoice the item was added to, empty while pending.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub invoice: String,
    /// Whether the item exists in live mode.
    #[serde(default)]
    pub livemode: bool,
}

/// Parameters for creating an invoice item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceItemParams {
    /// Customer to bill.
    pub customer: String,
    /// Amount in cents. Negative for a credit.
    pub amount: i64,
    /// Three-letter ISO currency code.
    pub currency: String,
    /// (Optional) Description shown on the invoice.
    pub desc: String,
    /// (Optional) Existing invoice to add the item to. Defaults to the upcoming one.
    pub invoice: String,
}

impl ToForm for InvoiceItemParams {
    fn append_to(&self, form: &mut FormParams) {
        form.push("amount", self.amount)
            .push("currency", &self.currency)
            .push("customer", &self.customer)
            .push_str("description", &self.desc)
            .push_str("invoice", &self.invoice);
    }
}

/// Parameters for changing an invoice item that has not been invoiced yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceItemUpdateParams {
    /// (Optional) New amount in cents.
    pub amount: i64,
    /// (Optional) New description.
    pub desc: String,
}

impl ToForm for InvoiceItemUpdateParams {
    fn append_to(&self, form: &mut FormParams) {
        form.push_nonzero("amount", self.amount)
            .push_str("description", &self.desc);
    }
}

/// Filters for listing invoice items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvoiceItemListParams {
    /// Paging window.
    pub page: ListParams,
    /// (Optional) Only return items for this customer.
    pub customer: String,
}

impl ToForm for InvoiceItemListParams {
    fn append_to(&self, form: &mut FormParams) {
        self.page.append_to(form);
        form.push_str("customer", &self.customer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_params() {
        let form = InvoiceItemParams {
            customer: "cus_1".into(),
            amount: -500,
            currency: "usd".into(),
            desc: "loyalty credit".into(),
            ..InvoiceItemParams::default()
        }
        .to_form();
        assert_eq!(form.get("amount"), Some("-500"));
        assert_eq!(form.get("description"), Some("loyalty credit"));
        assert!(!form.contains_key("invoice"));
    }

    #[test]
    fn update_sends_amount_under_its_own_key() {
        let form = InvoiceItemUpdateParams {
            amount: 1500,
            desc: String::new(),
        }
        .to_form();
        assert_eq!(form.encode(), "amount=1500");
    }

    #[test]
    fn list_without_customer() {
        let form = InvoiceItemListParams::default().to_form();
        assert!(!form.contains_key("customer"));
    }
}
