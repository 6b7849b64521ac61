use rstripe::resources::{Token, TokenParams};
use rstripe::ToForm;

use super::item_path;
use crate::client::{ClientError, StripeClient};

const TOKENS: &str = "/v1/tokens";

/// Endpoints for single-use card tokens.
#[derive(Debug, Clone, Copy)]
pub struct TokensApi<'a> {
    client: &'a StripeClient,
}

impl<'a> TokensApi<'a> {
    pub(crate) const fn new(client: &'a StripeClient) -> Self {
        Self { client }
    }

    /// Tokenizes a card.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn create(&self, params: &TokenParams) -> Result<Token, ClientError> {
        self.client.post(TOKENS, &params.to_form()).await
    }

    /// Retrieves a token.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn retrieve(&self, id: &str) -> Result<Token, ClientError> {
        self.client.get(&item_path(TOKENS, id), None).await
    }
}
