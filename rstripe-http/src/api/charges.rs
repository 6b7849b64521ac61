use rstripe::resources::{Charge, ChargeListParams, ChargeParams, List};
use rstripe::{FormParams, ToForm};

use super::item_path;
use crate::client::{ClientError, StripeClient};

const CHARGES: &str = "/v1/charges";

/// Endpoints for charges.
#[derive(Debug, Clone, Copy)]
pub struct ChargesApi<'a> {
    client: &'a StripeClient,
}

impl<'a> ChargesApi<'a> {
    pub(crate) const fn new(client: &'a StripeClient) -> Self {
        Self { client }
    }

    /// Charges a card or customer.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`]. Declines come back as
    /// [`ClientError::Api`] with a card error.
    pub async fn create(&self, params: &ChargeParams) -> Result<Charge, ClientError> {
        self.client.post(CHARGES, &params.to_form()).await
    }

    /// Retrieves a charge.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn retrieve(&self, id: &str) -> Result<Charge, ClientError> {
        self.client.get(&item_path(CHARGES, id), None).await
    }

    /// Refunds a charge in full.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn refund(&self, id: &str) -> Result<Charge, ClientError> {
        self.client.post(&refund_path(id), &FormParams::new()).await
    }

    /// Refunds `amount` (in the smallest currency unit) of a charge.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn refund_amount(&self, id: &str, amount: i64) -> Result<Charge, ClientError> {
        let mut form = FormParams::new();
        form.push("amount", amount);
        self.client.post(&refund_path(id), &form).await
    }

    /// Lists charges, newest first.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn list(&self, params: &ChargeListParams) -> Result<Vec<Charge>, ClientError> {
        let page: List<Charge> = self.client.get(CHARGES, Some(&params.to_form())).await?;
        Ok(page.into_data())
    }
}

fn refund_path(id: &str) -> String {
    format!("{}/refund", item_path(CHARGES, id))
}

#[cfg(test)]
mod tests {
    use rstripe::resources::{ChargeListParams, ChargeParams};
    use rstripe::{CardParams, CardSource, ErrorCode, currency};
    use wiremock::matchers::{body_string, body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::test_support::client_for;

    #[tokio::test]
    async fn create_with_card_details() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/charges"))
            .and(body_string_contains("amount=400"))
            .and(body_string_contains("currency=usd"))
            .and(body_string_contains("card%5Bnumber%5D=4242424242424242"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"id":"ch_1","amount":400,"currency":"usd","paid":true,"refunded":false,
                    "amount_refunded":null,"description":null}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let params = ChargeParams {
            amount: 400,
            currency: currency::USD.into(),
            card: Some(CardSource::Details(CardParams {
                number: "4242424242424242".into(),
                exp_month: 12,
                exp_year: 2030,
                ..CardParams::default()
            })),
            ..ChargeParams::default()
        };
        let charge = client_for(&server).charges().create(&params).await.unwrap();
        assert_eq!(charge.id, "ch_1");
        assert!(charge.paid);
        assert_eq!(charge.amount_refunded, 0);
        assert_eq!(charge.desc, "");
    }

    #[tokio::test]
    async fn declined_card_is_a_card_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/charges"))
            .respond_with(ResponseTemplate::new(402).set_body_string(
                r#"{"error":{"type":"card_error","message":"Your card was declined.",
                    "code":"card_declined","param":""}}"#,
            ))
            .mount(&server)
            .await;

        let params = ChargeParams {
            amount: 400,
            currency: currency::USD.into(),
            card: Some(CardSource::Token("tok_chargeDeclined".into())),
            ..ChargeParams::default()
        };
        let err = client_for(&server).charges().create(&params).await.unwrap_err();
        let api = err.api_error().unwrap();
        assert!(api.is_card_error());
        assert_eq!(api.code(), Some(ErrorCode::CardDeclined));
    }

    #[tokio::test]
    async fn partial_refund_sends_amount() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/charges/ch_1/refund"))
            .and(body_string("amount=150"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"id":"ch_1","amount":400,"refunded":false,"amount_refunded":150}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let charge = client_for(&server)
            .charges()
            .refund_amount("ch_1", 150)
            .await
            .unwrap();
        assert_eq!(charge.amount_refunded, 150);
    }

    #[tokio::test]
    async fn full_refund_sends_no_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/charges/ch_1/refund"))
            .and(body_string(""))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"id":"ch_1","amount":400,"refunded":true,"amount_refunded":400}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let charge = client_for(&server).charges().refund("ch_1").await.unwrap();
        assert!(charge.refunded);
    }

    #[tokio::test]
    async fn list_filters_by_customer() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/charges"))
            .and(query_param("count", "10"))
            .and(query_param("customer", "cus_1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"object":"list","count":2,"data":[{"id":"ch_1"},{"id":"ch_2"}]}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let params = ChargeListParams {
            customer: "cus_1".into(),
            ..ChargeListParams::default()
        };
        let charges = client_for(&server).charges().list(&params).await.unwrap();
        let ids: Vec<&str> = charges.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, ["ch_1", "ch_2"]);
    }
}
