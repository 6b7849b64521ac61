use rstripe::resources::DeleteResponse;
use rstripe::{CardParams, ToForm, card::Card};

use super::item_path;
use crate::client::{ClientError, StripeClient};

/// Endpoints for cards stored on a customer.
#[derive(Debug, Clone, Copy)]
pub struct CardsApi<'a> {
    client: &'a StripeClient,
}

impl<'a> CardsApi<'a> {
    pub(crate) const fn new(client: &'a StripeClient) -> Self {
        Self { client }
    }

    /// Adds a card to a customer.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn create(&self, customer_id: &str, params: &CardParams) -> Result<Card, ClientError> {
        let path = format!("{}/cards", item_path("/v1/customers", customer_id));
        self.client.post(&path, &params.to_form()).await
    }

    /// Removes a card from a customer. Returns whether the API reports it deleted.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn delete(&self, customer_id: &str, card_id: &str) -> Result<bool, ClientError> {
        let path = item_path(
            &format!("{}/cards", item_path("/v1/customers", customer_id)),
            card_id,
        );
        let resp: DeleteResponse = self.client.delete(&path, None).await?;
        Ok(resp.deleted)
    }
}

#[cfg(test)]
mod tests {
    use rstripe::{CardBrand, CardParams};
    use wiremock::matchers::{body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::test_support::client_for;

    #[tokio::test]
    async fn create_posts_nested_card() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/customers/cus_1/cards"))
            .and(body_string_contains("card%5Bnumber%5D=4242424242424242"))
            .and(body_string_contains("card%5Bexp_month%5D=6"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"id":"card_1","type":"Visa","last4":"4242","exp_month":6,"exp_year":2030}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let params = CardParams {
            number: "4242424242424242".into(),
            exp_month: 6,
            exp_year: 2030,
            ..CardParams::default()
        };
        let card = client_for(&server)
            .cards()
            .create("cus_1", &params)
            .await
            .unwrap();
        assert_eq!(card.brand, CardBrand::Visa);
        assert_eq!(card.last4, "4242");
    }

    #[tokio::test]
    async fn delete_reports_flag() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v1/customers/cus_1/cards/card_1"))
            .respond_with(
                ResponseTemplate::new(200).set_body_string(r#"{"id":"card_1","deleted":true}"#),
            )
            .expect(1)
            .mount(&server)
            .await;

        assert!(client_for(&server).cards().delete("cus_1", "card_1").await.unwrap());
    }
}
