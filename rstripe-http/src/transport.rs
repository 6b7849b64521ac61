//! The capability to issue one HTTP request and return its status and body.
//!
//! [`StripeClient`](crate::StripeClient) prepares the request (URL, version
//! header, encoded parameters) and hands it to a [`Transport`] together with
//! the credential. How the credential is attached is the transport's call,
//! because not every runtime supports the same mechanism:
//!
//! - [`UserInfoTransport`] embeds the key as the user-info part of the URL
//!   (`https://sk_test_123@api.stripe.com/...`). This is the default.
//! - [`HeaderAuthTransport`] sends an explicit `Authorization: Basic` header
//!   with the key as user name and an empty password, on a client supplied by
//!   the caller. Use it where the platform's outbound fetch rejects user-info
//!   in URLs.
//!
//! Both produce the same header on the wire. A transport performs exactly one
//! round trip: no retries, no redirects to follow on the caller's behalf, and
//! the full body is read before returning.

use std::fmt;
use std::time::Duration;

use http::{HeaderMap, Method, StatusCode};
use reqwest::{Client, RequestBuilder};
use url::Url;

use crate::config::ApiKey;

/// A prepared request, minus the credential.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method.
    pub method: Method,
    /// Full URL including any query string.
    pub url: Url,
    /// Headers to send.
    pub headers: HeaderMap,
    /// Encoded form body, for non-`GET` requests with parameters.
    pub body: Option<String>,
    /// Bound on the whole exchange.
    pub timeout: Option<Duration>,
}

/// Status and fully-read body of a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// HTTP status.
    pub status: StatusCode,
    /// Raw body bytes.
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Body as text, with invalid UTF-8 replaced.
    #[must_use]
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Network-level failures. None of these carry an API response.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// The credential cannot be placed into the URL (e.g. the URL has no host).
    #[error("cannot embed credential in URL {url}")]
    Credential {
        /// The URL that rejected the user-info.
        url: Url,
    },
    /// Connecting, sending or receiving headers failed.
    #[error("HTTP error: {source}")]
    Http {
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
    /// The response body could not be read.
    #[error("failed to read response body: {source}")]
    BodyRead {
        /// The underlying reqwest error.
        #[source]
        source: reqwest::Error,
    },
    /// Failure reported by a custom transport.
    #[error("{0}")]
    Other(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Issues one HTTP request with a credential attached.
#[async_trait::async_trait]
pub trait Transport: Send + Sync + fmt::Debug {
    /// Sends `request` authenticated with `credential` and reads the whole response.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if no response could be obtained.
    async fn send(
        &self,
        request: HttpRequest,
        credential: &ApiKey,
    ) -> Result<HttpResponse, TransportError>;
}

/// Default transport: reqwest, with the credential as URL user-info.
#[derive(Debug, Clone, Default)]
pub struct UserInfoTransport {
    client: Client,
}

impl UserInfoTransport {
    /// Creates a transport on a fresh reqwest client.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a transport on an existing reqwest client.
    #[must_use]
    pub const fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Transport for UserInfoTransport {
    async fn send(
        &self,
        request: HttpRequest,
        credential: &ApiKey,
    ) -> Result<HttpResponse, TransportError> {
        let HttpRequest {
            method,
            mut url,
            headers,
            body,
            timeout,
        } = request;
        if url.set_username(credential.expose()).is_err() {
            return Err(TransportError::Credential { url });
        }
        // reqwest lifts the user-info into an `Authorization: Basic` header.
        let builder = self.client.request(method, url).headers(headers);
        execute(builder, body, timeout).await
    }
}

/// Transport for runtimes whose HTTP client cannot take credentials in the URL.
///
/// Takes the platform's preconfigured reqwest client and attaches the key as
/// an explicit Basic-Auth header.
#[derive(Debug, Clone)]
pub struct HeaderAuthTransport {
    client: Client,
}

impl HeaderAuthTransport {
    /// Creates a transport on the given client.
    #[must_use]
    pub const fn new(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl Transport for HeaderAuthTransport {
    async fn send(
        &self,
        request: HttpRequest,
        credential: &ApiKey,
    ) -> Result<HttpResponse, TransportError> {
        let builder = self
            .client
            .request(request.method, request.url)
            .headers(request.headers)
            .basic_auth(credential.expose(), Some(""));
        execute(builder, request.body, request.timeout).await
    }
}

async fn execute(
    mut builder: RequestBuilder,
    body: Option<String>,
    timeout: Option<Duration>,
) -> Result<HttpResponse, TransportError> {
    if let Some(body) = body {
        builder = builder.body(body);
    }
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    let response = builder
        .send()
        .await
        .map_err(|source| TransportError::Http { source })?;
    let status = response.status();
    let body = response
        .bytes()
        .await
        .map_err(|source| TransportError::BodyRead { source })?;
    Ok(HttpResponse {
        status,
        body: body.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::prelude::*;
    use wiremock::matchers::{body_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn basic(key: &str) -> String {
        format!("Basic {}", BASE64_STANDARD.encode(format!("{key}:")))
    }

    fn request(server: &MockServer, method: Method, path_and_query: &str) -> HttpRequest {
        HttpRequest {
            method,
            url: Url::parse(&format!("{}{path_and_query}", server.uri())).unwrap(),
            headers: HeaderMap::new(),
            body: None,
            timeout: None,
        }
    }

    #[tokio::test]
    async fn user_info_transport_sends_basic_auth() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/account"))
            .and(header("authorization", basic("sk_test_123").as_str()))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"acct_1"}"#))
            .expect(1)
            .mount(&server)
            .await;

        let response = UserInfoTransport::new()
            .send(
                request(&server, Method::GET, "/v1/account"),
                &ApiKey::new("sk_test_123"),
            )
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::OK);
        assert_eq!(response.text(), r#"{"id":"acct_1"}"#);
    }

    #[tokio::test]
    async fn header_auth_transport_sends_same_header() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/v1/coupons"))
            .and(header("authorization", basic("sk_test_123").as_str()))
            .and(body_string("percent_off=5"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let mut req = request(&server, Method::POST, "/v1/coupons");
        req.body = Some("percent_off=5".to_owned());
        let response = HeaderAuthTransport::new(Client::new())
            .send(req, &ApiKey::new("sk_test_123"))
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::OK);
    }

    #[tokio::test]
    async fn non_success_status_is_returned_not_raised() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/coupons"))
            .and(query_param("count", "10"))
            .respond_with(ResponseTemplate::new(401).set_body_string("nope"))
            .mount(&server)
            .await;

        let response = UserInfoTransport::new()
            .send(
                request(&server, Method::GET, "/v1/coupons?count=10"),
                &ApiKey::new("sk_bad"),
            )
            .await
            .unwrap();

        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
        assert_eq!(response.body, b"nope");
    }

    #[tokio::test]
    async fn connection_failure_is_a_transport_error() {
        // Nothing listens on the discard port.
        let req = HttpRequest {
            method: Method::GET,
            url: Url::parse("http://127.0.0.1:9/v1/account").unwrap(),
            headers: HeaderMap::new(),
            body: None,
            timeout: Some(Duration::from_secs(5)),
        };
        let err = UserInfoTransport::new()
            .send(req, &ApiKey::new("sk_test_123"))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Http { .. }));
    }

    #[tokio::test]
    async fn url_without_host_rejects_credential() {
        let req = HttpRequest {
            method: Method::GET,
            url: Url::parse("data:text/plain,hello").unwrap(),
            headers: HeaderMap::new(),
            body: None,
            timeout: None,
        };
        let err = UserInfoTransport::new()
            .send(req, &ApiKey::new("sk_test_123"))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Credential { .. }));
    }
}
