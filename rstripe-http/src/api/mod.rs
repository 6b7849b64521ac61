//! Resource clients.
//!
//! Each client borrows a [`StripeClient`](crate::StripeClient) and maps one
//! group of endpoints onto typed calls. Obtain them through the accessors on
//! the client, e.g. `client.plans().list(ListParams::default())`.

mod account;
mod cards;
mod charges;
mod coupons;
mod customers;
mod invoice_items;
mod plans;
mod subscriptions;
mod tokens;

pub use account::AccountApi;
pub use cards::CardsApi;
pub use charges::ChargesApi;
pub use coupons::CouponsApi;
pub use customers::CustomersApi;
pub use invoice_items::InvoiceItemsApi;
pub use plans::PlansApi;
pub use subscriptions::SubscriptionsApi;
pub use tokens::TokensApi;

use rstripe::resources::path_segment;

/// Joins a collection path and an escaped identifier.
fn item_path(collection: &str, id: &str) -> String {
    format!("{collection}/{}", path_segment(id))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_path_escapes_id() {
        assert_eq!(item_path("/v1/coupons", "gold"), "/v1/coupons/gold");
        assert_eq!(
            item_path("/v1/coupons", "test coupon 1"),
            "/v1/coupons/test%20coupon%201"
        );
    }
}
