use rstripe::resources::{Customer, CustomerParams, DeleteResponse, List};
use rstripe::{ListParams, ToForm};

use super::item_path;
use crate::client::{ClientError, StripeClient};

const CUSTOMERS: &str = "/v1/customers";

/// Endpoints for customers.
#[derive(Debug, Clone, Copy)]
pub struct CustomersApi<'a> {
    client: &'a StripeClient,
}

impl<'a> CustomersApi<'a> {
    pub(crate) const fn new(client: &'a StripeClient) -> Self {
        Self { client }
    }

    /// Creates a customer.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn create(&self, params: &CustomerParams) -> Result<Customer, ClientError> {
        self.client.post(CUSTOMERS, &params.to_form()).await
    }

    /// Retrieves a customer.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn retrieve(&self, id: &str) -> Result<Customer, ClientError> {
        self.client.get(&item_path(CUSTOMERS, id), None).await
    }

    /// Updates the fields set in `params`; the rest are left untouched.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn update(&self, id: &str, params: &CustomerParams) -> Result<Customer, ClientError> {
        self.client
            .post(&item_path(CUSTOMERS, id), &params.to_form())
            .await
    }

    /// Deletes a customer. Returns whether the API reports it deleted.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn delete(&self, id: &str) -> Result<bool, ClientError> {
        let resp: DeleteResponse = self.client.delete(&item_path(CUSTOMERS, id), None).await?;
        Ok(resp.deleted)
    }

    /// Lists customers.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn list(&self, page: ListParams) -> Result<Vec<Customer>, ClientError> {
        let list: List<Customer> = self.client.get(CUSTOMERS, Some(&page.to_form())).await?;
        Ok(list.into_data())
    }
}
