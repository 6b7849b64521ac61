use rstripe::resources::Account;

use crate::client::{ClientError, StripeClient};

/// Endpoints for the account behind the API key.
#[derive(Debug, Clone, Copy)]
pub struct AccountApi<'a> {
    client: &'a StripeClient,
}

impl<'a> AccountApi<'a> {
    pub(crate) const fn new(client: &'a StripeClient) -> Self {
        Self { client }
    }

    /// Retrieves the account details.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn retrieve(&self) -> Result<Account, ClientError> {
        self.client.get("/v1/account", None).await
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::api::test_support::client_for;

    #[tokio::test]
    async fn retrieve_decodes_account() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/account"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"id":"acct_1","email":"ops@example.com","statement_descriptor":null,
                    "details_submitted":true,"charge_enabled":false,"transfer_enabled":null,
                    "currencies_supported":["usd","eur"]}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let account = client_for(&server).account().retrieve().await.unwrap();
        assert_eq!(account.email, "ops@example.com");
        assert_eq!(account.statement_descriptor, "");
        assert!(account.details_submitted);
        assert!(!account.transfer_enabled);
        assert_eq!(account.currencies_supported, ["usd", "eur"]);
    }
}
