//! Authenticated request dispatch.
//!
//! Every resource client funnels through [`StripeClient::request_with_key`]:
//!
//! 1. the path is resolved against the configured base URL;
//! 2. parameters are form-encoded into the query string for `GET` and into the
//!    body for every other method;
//! 3. the `Stripe-Version` header is attached and the [`Transport`] sends the
//!    request with exactly one credential;
//! 4. the body is read in full, then a `200 OK` is decoded into the target type
//!    and anything else into an [`ApiError`].
//!
//! ## Error Handling
//!
//! [`ClientError`] keeps the failure classes apart: no credential, transport
//! failure, undecodable success body, and the API's own error envelope. An
//! error body that is not valid JSON still produces [`ClientError::Api`], with
//! an empty [`ErrorDetail`](rstripe::ErrorDetail) and the real status.

use std::fmt::Display;
use std::sync::Arc;

use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderValue, Method, StatusCode};
use rstripe::{ApiError, FormParams};
use serde::de::DeserializeOwned;

use crate::api::{
    AccountApi, CardsApi, ChargesApi, CouponsApi, CustomersApi, InvoiceItemsApi, PlansApi,
    SubscriptionsApi, TokensApi,
};
use crate::config::{ApiKey, ClientConfig};
use crate::constants::{API_VERSION, FORM_CONTENT_TYPE, VERSION_HEADER};
use crate::transport::{HttpRequest, HttpResponse, Transport, TransportError, UserInfoTransport};

#[cfg(feature = "telemetry")]
use tracing::{Span, instrument};

/// Errors returned by [`StripeClient`] calls.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Neither the call nor the configuration provided an API key.
    #[error("no API key configured: {context}")]
    MissingApiKey {
        /// The request that was attempted, e.g. `"GET /v1/account"`.
        context: String,
    },
    /// No response was obtained.
    #[error("transport error: {context}: {source}")]
    Transport {
        /// The request that was attempted.
        context: String,
        /// The underlying transport error.
        #[source]
        source: TransportError,
    },
    /// A `200 OK` body did not match the expected shape.
    #[error("failed to deserialize JSON: {context}: {source}")]
    JsonDeserialization {
        /// The request that was attempted.
        context: String,
        /// The underlying serde error.
        #[source]
        source: serde_json::Error,
    },
    /// The API answered with its error envelope.
    #[error("API error {}: {context}: {source}", .source.status)]
    Api {
        /// The request that was attempted.
        context: String,
        /// The decoded API error.
        #[source]
        source: ApiError,
    },
}

impl ClientError {
    /// The API's error, when the failure came from the API itself.
    #[must_use]
    pub const fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// A client for the Stripe REST API.
///
/// Cheap to clone; clones share configuration and transport.
#[derive(Clone)]
pub struct StripeClient {
    config: Arc<ClientConfig>,
    transport: Arc<dyn Transport>,
}

impl std::fmt::Debug for StripeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StripeClient")
            .field("config", &self.config)
            .field("transport", &self.transport)
            .finish()
    }
}

impl StripeClient {
    /// Creates a client using the default [`UserInfoTransport`].
    #[must_use]
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, UserInfoTransport::new())
    }

    /// Creates a client on a specific transport.
    #[must_use]
    pub fn with_transport(config: ClientConfig, transport: impl Transport + 'static) -> Self {
        Self {
            config: Arc::new(config),
            transport: Arc::new(transport),
        }
    }

    /// Returns a client that authenticates with `key` instead of the configured
    /// default, sharing this client's transport.
    #[must_use]
    pub fn with_api_key(&self, key: impl Into<ApiKey>) -> Self {
        Self {
            config: Arc::new(self.config.as_ref().clone().with_api_key(key)),
            transport: Arc::clone(&self.transport),
        }
    }

    /// The configuration this client was built with.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Account endpoints.
    #[must_use]
    pub const fn account(&self) -> AccountApi<'_> {
        AccountApi::new(self)
    }

    /// Card endpoints, scoped to customers.
    #[must_use]
    pub const fn cards(&self) -> CardsApi<'_> {
        CardsApi::new(self)
    }

    /// Charge endpoints.
    #[must_use]
    pub const fn charges(&self) -> ChargesApi<'_> {
        ChargesApi::new(self)
    }

    /// Coupon endpoints.
    #[must_use]
    pub const fn coupons(&self) -> CouponsApi<'_> {
        CouponsApi::new(self)
    }

    /// Customer endpoints.
    #[must_use]
    pub const fn customers(&self) -> CustomersApi<'_> {
        CustomersApi::new(self)
    }

    /// Invoice item endpoints.
    #[must_use]
    pub const fn invoice_items(&self) -> InvoiceItemsApi<'_> {
        InvoiceItemsApi::new(self)
    }

    /// Plan endpoints.
    #[must_use]
    pub const fn plans(&self) -> PlansApi<'_> {
        PlansApi::new(self)
    }

    /// Subscription endpoints.
    #[must_use]
    pub const fn subscriptions(&self) -> SubscriptionsApi<'_> {
        SubscriptionsApi::new(self)
    }

    /// Token endpoints.
    #[must_use]
    pub const fn tokens(&self) -> TokensApi<'_> {
        TokensApi::new(self)
    }

    /// Sends a request authenticated with the configured default key.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::MissingApiKey`] when no default key is
    /// configured, and otherwise see [`StripeClient::request_with_key`].
    pub async fn request<R>(
        &self,
        method: Method,
        path: &str,
        params: Option<&FormParams>,
    ) -> Result<R, ClientError>
    where
        R: DeserializeOwned,
    {
        let Some(key) = self.config.api_key() else {
            return Err(ClientError::MissingApiKey {
                context: format!("{method} {path}"),
            });
        };
        self.request_with_key(key, method, path, params).await
    }

    /// Sends a request authenticated with `key` and decodes a `200 OK` body as `R`.
    ///
    /// # Errors
    ///
    /// - [`ClientError::Transport`] if no response was obtained
    /// - [`ClientError::JsonDeserialization`] if a `200 OK` body is not a valid `R`
    /// - [`ClientError::Api`] for any other status
    #[cfg_attr(
        feature = "telemetry",
        instrument(
            name = "stripe.request",
            skip_all,
            fields(
                http.method = %method,
                http.path = path,
                http.status_code = tracing::field::Empty,
                otel.status_code = tracing::field::Empty,
                error.message = tracing::field::Empty,
            )
        )
    )]
    pub async fn request_with_key<R>(
        &self,
        key: &ApiKey,
        method: Method,
        path: &str,
        params: Option<&FormParams>,
    ) -> Result<R, ClientError>
    where
        R: DeserializeOwned,
    {
        let context = format!("{method} {path}");
        let request = self.prepare(method, path, params);
        log_request(&self.config, &request);

        let result = match self.transport.send(request, key).await {
            Ok(response) => {
                log_response(&self.config, &response);
                decode(response, context)
            }
            Err(source) => Err(ClientError::Transport { context, source }),
        };

        record_result_on_span(&result);

        result
    }

    pub(crate) async fn get<R>(&self, path: &str, params: Option<&FormParams>) -> Result<R, ClientError>
    where
        R: DeserializeOwned,
    {
        self.request(Method::GET, path, params).await
    }

    pub(crate) async fn post<R>(&self, path: &str, params: &FormParams) -> Result<R, ClientError>
    where
        R: DeserializeOwned,
    {
        self.request(Method::POST, path, Some(params)).await
    }

    pub(crate) async fn delete<R>(
        &self,
        path: &str,
        params: Option<&FormParams>,
    ) -> Result<R, ClientError>
    where
        R: DeserializeOwned,
    {
        self.request(Method::DELETE, path, params).await
    }

    /// Builds the outgoing request: URL, query or body, and fixed headers.
    fn prepare(&self, method: Method, path: &str, params: Option<&FormParams>) -> HttpRequest {
        let mut url = self.config.base_url().clone();
        url.set_path(path);

        let encoded = params.map(FormParams::encode).filter(|e| !e.is_empty());
        let mut headers = HeaderMap::new();
        headers.insert(VERSION_HEADER, HeaderValue::from_static(API_VERSION));

        let body = if method == Method::GET {
            url.set_query(encoded.as_deref());
            None
        } else {
            if encoded.is_some() {
                headers.insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
            }
            encoded
        };

        HttpRequest {
            method,
            url,
            headers,
            body,
            timeout: self.config.timeout(),
        }
    }
}

/// Classifies a response by status and decodes the matching shape.
fn decode<R>(response: HttpResponse, context: String) -> Result<R, ClientError>
where
    R: DeserializeOwned,
{
    if response.status == StatusCode::OK {
        serde_json::from_slice(&response.body)
            .map_err(|source| ClientError::JsonDeserialization { context, source })
    } else {
        let source = ApiError::from_body(response.status.as_u16(), &response.body);
        #[cfg(feature = "telemetry")]
        if source.detail == rstripe::ErrorDetail::default() {
            tracing::warn!(
                status = response.status.as_u16(),
                "error response did not contain a valid error envelope"
            );
        }
        Err(ClientError::Api { context, source })
    }
}

#[cfg(feature = "telemetry")]
fn log_request(config: &ClientConfig, request: &HttpRequest) {
    if config.log_traffic() {
        tracing::debug!(
            method = %request.method,
            url = %request.url,
            body = request.body.as_deref().unwrap_or_default(),
            "stripe request"
        );
    }
}

#[cfg(not(feature = "telemetry"))]
const fn log_request(_config: &ClientConfig, _request: &HttpRequest) {}

#[cfg(feature = "telemetry")]
fn log_response(config: &ClientConfig, response: &HttpResponse) {
    Span::current().record("http.status_code", response.status.as_u16());
    if config.log_traffic() {
        tracing::debug!(
            status = response.status.as_u16(),
            body = %response.text(),
            "stripe response"
        );
    }
}

#[cfg(not(feature = "telemetry"))]
const fn log_response(_config: &ClientConfig, _response: &HttpResponse) {}

/// Records the outcome of a request on the current span.
#[cfg(feature = "telemetry")]
fn record_result_on_span<R, E: Display>(result: &Result<R, E>) {
    let span = Span::current();
    match result {
        Ok(_) => {
            span.record("otel.status_code", "OK");
        }
        Err(err) => {
            span.record("otel.status_code", "ERROR");
            span.record("error.message", tracing::field::display(err));
            tracing::event!(tracing::Level::ERROR, error = %err, "Request to Stripe failed");
        }
    }
}

/// Records the outcome of a request on the current span.
/// Noop if telemetry feature is off.
#[cfg(not(feature = "telemetry"))]
fn record_result_on_span<R, E: Display>(_result: &Result<R, E>) {}
