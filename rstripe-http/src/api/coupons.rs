use rstripe::resources::{Coupon, CouponParams, DeleteResponse, List};
use rstripe::{ListParams, ToForm};

use super::item_path;
use crate::client::{ClientError, StripeClient};

const COUPONS: &str = "/v1/coupons";

/// Endpoints for coupons.
#[derive(Debug, Clone, Copy)]
pub struct CouponsApi<'a> {
    client: &'a StripeClient,
}

impl<'a> CouponsApi<'a> {
    pub(crate) const fn new(client: &'a StripeClient) -> Self {
        Self { client }
    }

    /// Creates a coupon.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn create(&self, params: &CouponParams) -> Result<Coupon, ClientError> {
        self.client.post(COUPONS, &params.to_form()).await
    }

    /// Retrieves a coupon by id.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn retrieve(&self, id: &str) -> Result<Coupon, ClientError> {
        self.client.get(&item_path(COUPONS, id), None).await
    }

    /// Deletes a coupon. Returns whether the API reports it deleted.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn delete(&self, id: &str) -> Result<bool, ClientError> {
        let resp: DeleteResponse = self.client.delete(&item_path(COUPONS, id), None).await?;
        Ok(resp.deleted)
    }

    /// Lists coupons.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn list(&self, page: ListParams) -> Result<Vec<Coupon>, ClientError> {
        let list: List<Coupon> = self.client.get(COUPONS, Some(&page.to_form())).await?;
        Ok(list.into_data())
    }
}
