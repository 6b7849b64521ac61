use rstripe::resources::{
    DeleteResponse, InvoiceItem, InvoiceItemListParams, InvoiceItemParams,
    InvoiceItemUpdateParams, List,
};
use rstripe::{ListParams, ToForm};

use super::item_path;
use crate::client::{ClientError, StripeClient};

const INVOICE_ITEMS: &str = "/v1/invoiceitems";

/// Endpoints for pending invoice items.
#[derive(Debug, Clone, Copy)]
pub struct InvoiceItemsApi<'a> {
    client: &'a StripeClient,
}

impl<'a> InvoiceItemsApi<'a> {
    pub(crate) const fn new(client: &'a StripeClient) -> Self {
        Self { client }
    }

    /// Adds an item to a customer's upcoming invoice.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn create(&self, params: &InvoiceItemParams) -> Result<InvoiceItem, ClientError> {
        self.client.post(INVOICE_ITEMS, &params.to_form()).await
    }

    /// Retrieves an invoice item.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn retrieve(&self, id: &str) -> Result<InvoiceItem, ClientError> {
        self.client.get(&item_path(INVOICE_ITEMS, id), None).await
    }

    /// Changes the amount or description of an item not yet invoiced.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn update(
        &self,
        id: &str,
        params: &InvoiceItemUpdateParams,
    ) -> Result<InvoiceItem, ClientError> {
        self.client
            .post(&item_path(INVOICE_ITEMS, id), &params.to_form())
            .await
    }

    /// Deletes an invoice item. Returns whether the API reports it deleted.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn delete(&self, id: &str) -> Result<bool, ClientError> {
        let resp: DeleteResponse = self
            .client
            .delete(&item_path(INVOICE_ITEMS, id), None)
            .await?;
        Ok(resp.deleted)
    }

    /// Lists invoice items across all customers.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn list(&self, page: ListParams) -> Result<Vec<InvoiceItem>, ClientError> {
        self.list_with(&InvoiceItemListParams {
            page,
            customer: String::new(),
        })
        .await
    }

    /// Lists the invoice items of one customer.
    ///
    /// # Errors
    ///
    /// See [`StripeClient::request`].
    pub async fn list_for_customer(
        &self,
        customer_id: &str,
        page: ListParams,
    ) -> Result<Vec<InvoiceItem>, ClientError> {
        self.list_with(&InvoiceItemListParams {
            page,
            customer: customer_id.to_owned(),
        })
        .await
    }

    async fn list_with(
        &self,
        params: &InvoiceItemListParams,
    ) -> Result<Vec<InvoiceItem>, ClientError> {
        let list: List<InvoiceItem> = self
            .client
            .get(INVOICE_ITEMS, Some(&params.to_form()))
            .await?;
        Ok(list.into_data())
    }
}

#[cfg(test)]
mod tests {
    use rstripe::ListParams;
    use rstripe::resources::{InvoiceItemParams, InvoiceItemUpdateParams};
    use wiremock::matchers::{body_string, method, path, query_param};
    use wiremock::{Mock, MockServer, Request, ResponseTemplate};

    use crate::api::test_support::client_for;

    #[tokio::test]
    async fn create_credit() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/invoiceitems"))
            .and(body_string("amount=-500&currency=usd&customer=cus_1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"id":"ii_1","amount":-500,"currency":"usd","customer":"cus_1",
                    "description":null,"invoice":null}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let params = InvoiceItemParams {
            customer: "cus_1".into(),
            amount: -500,
            currency: "usd".into(),
            ..InvoiceItemParams::default()
        };
        let item = client_for(&server).invoice_items().create(&params).await.unwrap();
        assert_eq!(item.amount, -500);
        assert_eq!(item.invoice, "");
    }

    #[tokio::test]
    async fn update_posts_to_item() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/invoiceitems/ii_1"))
            .and(body_string("amount=1500&description=adjusted"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"id":"ii_1","amount":1500,"description":"adjusted"}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let params = InvoiceItemUpdateParams {
            amount: 1500,
            desc: "adjusted".into(),
        };
        let item = client_for(&server)
            .invoice_items()
            .update("ii_1", &params)
            .await
            .unwrap();
        assert_eq!(item.desc, "adjusted");
    }

    #[tokio::test]
    async fn list_for_customer_adds_filter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/invoiceitems"))
            .and(query_param("customer", "cus_1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"data":[{"id":"ii_1","customer":"cus_1"}]}"#,
            ))
            .expect(1)
            .mount(&server)
            .await;

        let items = client_for(&server)
            .invoice_items()
            .list_for_customer("cus_1", ListParams::default())
            .await
            .unwrap();
        assert_eq!(items[0].customer, "cus_1");
    }

    #[tokio::test]
    async fn list_without_customer_has_no_filter() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/invoiceitems"))
            .respond_with(|req: &Request| {
                assert_eq!(req.url.query(), Some("count=10&offset=0"));
                ResponseTemplate::new(200).set_body_string(r#"{"data":[]}"#)
            })
            .expect(1)
            .mount(&server)
            .await;

        let items = client_for(&server)
            .invoice_items()
            .list(ListParams::default())
            .await
            .unwrap();
        assert!(items.is_empty());
    }

    #[tokio::test]
    async fn delete_item() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/v1/invoiceitems/ii_1"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"ii_1","deleted":true}"#))
            .expect(1)
            .mount(&server)
            .await;

        assert!(client_for(&server).invoice_items().delete("ii_1").await.unwrap());
    }
}
