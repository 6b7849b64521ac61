use rstripe::resources::{Subscription, SubscriptionParams};
use rstripe::{FormParams, ToForm};

use super::item_path;
use crate::client::{ClientError, StripeClient};

/// Endpoints for a customer's subscription.
///
/// A customer has at most one subscription, addressed through the customer id.
#[derive(Debug, Clone, Copy)]
pub struct SubscriptionsApi<'a> {
    client: &'a StripeClient,
}

impl<'a> SubscriptionsApi<'a> {
    pub(crate) const fn new(client: &'a StripeClient) -> Self {
        Self { client }
    }

    /// Subscribes the customer to a plan, or switches their plan.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn update(
        &self,
        customer_id: &str,
        params: &SubscriptionParams,
    ) -> Result<Subscription, ClientError> {
        self.client
            .post(&subscription_path(customer_id), &params.to_form())
            .await
    }

    /// Cancels the subscription immediately.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn cancel(&self, customer_id: &str) -> Result<Subscription, ClientError> {
        self.client.delete(&subscription_path(customer_id), None).await
    }

    /// Cancels the subscription at the end of the current billing period.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn cancel_at_period_end(
        &self,
        customer_id: &str,
    ) -> Result<Subscription, ClientError> {
        let mut form = FormParams::new();
        form.push_flag("at_period_end", true);
        self.client
            .delete(&subscription_path(customer_id), Some(&form))
            .await
    }
}

fn subscription_path(customer_id: &str) -> String {
    format!("{}/subscription", item_path("/v1/customers", customer_id))
}

#[cfg(test)]
mod tests {
    use rstripe::CardSource;
    use rstripe::resources::{SubscriptionParams, SubscriptionStatus};
    use wiremock::matchers::{body_string, method, path};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    use crate::api::test_support::client_for;

    #[tokio::test]
    async fn update_with_token_and_trial() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/customers/cus_1/subscription"))
            .and(body_string("plan=gold&prorate=true&trial_end=1700000000&card=tok_visa"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"customer":"cus_1","status":"trialing","plan":{"id":"gold"},
                    "trial_end":1700000000,"canceled_at":null,"quantity":1}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let params = SubscriptionParams {
            plan: "gold".into(),
            prorate: true,
            trial_end: 1_700_000_000,
            card: Some(CardSource::Token("tok_visa".into())),
            ..SubscriptionParams::default()
        };
        let sub = client_for(&server)
            .subscriptions()
            .update("cus_1", &params)
            .await
            .unwrap();
        assert_eq!(sub.status, SubscriptionStatus::Trialing);
        assert_eq!(sub.trial_end, Some(1_700_000_000));
        assert_eq!(sub.canceled_at, None);
        assert_eq!(sub.plan.unwrap().id, "gold");
    }

    #[tokio::test]
    async fn cancel_sends_no_body() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v1/customers/cus_1/subscription"))
            .respond_with(|req: &Request| {
                assert!(req.body.is_empty());
                ResponseTemplate::new(200).set_body_string(
                    r#"{"customer":"cus_1","status":"canceled","canceled_at":1700000000}"#,
                )
            })
            .expect(1)
            .mount(&server)
            .await;

        let sub = client_for(&server).subscriptions().cancel("cus_1").await.unwrap();
        assert_eq!(sub.status, SubscriptionStatus::Canceled);
        assert_eq!(sub.canceled_at, Some(1_700_000_000));
    }
}
