use rstripe::resources::{DeleteResponse, List, Plan, PlanParams};
use rstripe::{FormParams, ListParams, ToForm};

use super::item_path;
use crate::client::{ClientError, StripeClient};

const PLANS: &str = "/v1/plans";

/// Endpoints for subscription plans.
#[derive(Debug, Clone, Copy)]
pub struct PlansApi<'a> {
    client: &'a StripeClient,
}

impl<'a> PlansApi<'a> {
    pub(crate) const fn new(client: &'a StripeClient) -> Self {
        Self { client }
    }

    /// Creates a plan.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn create(&self, params: &PlanParams) -> Result<Plan, ClientError> {
        self.client.post(PLANS, &params.to_form()).await
    }

    /// Retrieves a plan by id.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn retrieve(&self, id: &str) -> Result<Plan, ClientError> {
        self.client.get(&item_path(PLANS, id), None).await
    }

    /// Renames a plan. The name is the only mutable attribute.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn update(&self, id: &str, name: &str) -> Result<Plan, ClientError> {
        let mut form = FormParams::new();
        form.push("name", name);
        self.client.post(&item_path(PLANS, id), &form).await
    }

    /// Deletes a plan. Returns whether the API reports it deleted.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn delete(&self, id: &str) -> Result<bool, ClientError> {
        let resp: DeleteResponse = self.client.delete(&item_path(PLANS, id), None).await?;
        Ok(resp.deleted)
    }

    /// Lists plans.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn list(&self, page: ListParams) -> Result<Vec<Plan>, ClientError> {
        let list: List<Plan> = self.client.get(PLANS, Some(&page.to_form())).await?;
        Ok(list.into_data())
    }
}
