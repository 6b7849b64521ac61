//! The error envelope returned by the API on any non-success status.
//!
//! ```json
//! { "error": { "type": "card_error", "message": "Your card was declined.", "code": "card_declined" } }
//! ```
//!
//! `code` and `param` are optional. See <https://stripe.com/docs/api#errors>.

use serde::{Deserialize, Serialize};

use crate::nullable;

/// Broad category of an API error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorType {
    /// Malformed request or missing/invalid parameters.
    #[serde(rename = "invalid_request_error")]
    InvalidRequest,
    /// A fault on the API side, not caused by the request.
    #[serde(rename = "api_error")]
    Api,
    /// The card could not be charged or failed validation.
    #[serde(rename = "card_error")]
    Card,
    /// A type this client does not know, or no type at all.
    #[default]
    #[serde(other, rename = "unknown")]
    Unknown,
}

/// Fine-grained reason attached to card errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// The card number is incorrect.
    IncorrectNumber,
    /// The card number is not a valid card number.
    InvalidNumber,
    /// The expiration month is invalid.
    InvalidExpiryMonth,
    /// The expiration year is invalid.
    InvalidExpiryYear,
    /// The security code is invalid.
    InvalidCvc,
    /// The card has expired.
    ExpiredCard,
    /// The security code is incorrect.
    IncorrectCvc,
    /// The ZIP code failed validation.
    IncorrectZip,
    /// The card was declined.
    CardDeclined,
    /// There is no card on the customer being charged.
    Missing,
    /// An error occurred while processing the card.
    ProcessingError,
    /// Any code not listed above.
    #[serde(other)]
    Other,
}

/// The body of the `error` object.
///
/// Every field decodes leniently: a `null` or mistyped value falls back to
/// its default and the remaining fields are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetail {
    /// Error category.
    #[serde(rename = "type", default, deserialize_with = "nullable::lenient")]
    pub kind: ErrorType,
    /// Human-readable description, suitable for logs.
    #[serde(default, deserialize_with = "nullable::lenient")]
    pub message: String,
    /// Fine-grained code, mostly present on card errors.
    #[serde(
        default,
        deserialize_with = "nullable::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub code: Option<ErrorCode>,
    /// Name of the offending parameter, if any.
    #[serde(
        default,
        deserialize_with = "nullable::lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub param: Option<String>,
}

/// The JSON object wrapping an [`ErrorDetail`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    /// The error itself.
    #[serde(default, deserialize_with = "nullable::lenient")]
    pub error: ErrorDetail,
}

/// An error reported by the API, together with the HTTP status it came with.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{}", .detail.message)]
pub struct ApiError {
    /// HTTP status code of the response.
    pub status: u16,
    /// Decoded error details. Empty when the body could not be decoded.
    pub detail: ErrorDetail,
}

impl ApiError {
    /// Creates an error from a status and decoded details.
    #[must_use]
    pub const fn new(status: u16, detail: ErrorDetail) -> Self {
        Self { status, detail }
    }

    /// Decodes an error response body.
    ///
    /// Decoding is best-effort: fields that decode are kept, and a body that is
    /// not JSON at all yields an empty [`ErrorDetail`], so the non-success
    /// status is never lost.
    #[must_use]
    pub fn from_body(status: u16, body: &[u8]) -> Self {
        let envelope: ErrorEnvelope = serde_json::from_slice(body).unwrap_or_default();
        Self::new(status, envelope.error)
    }

    /// Error category.
    #[must_use]
    pub const fn kind(&self) -> ErrorType {
        self.detail.kind
    }

    /// Fine-grained code, if the API sent a known one.
    #[must_use]
    pub const fn code(&self) -> Option<ErrorCode> {
        self.detail.code
    }

    /// Offending parameter name, if any.
    #[must_use]
    pub fn param(&self) -> Option<&str> {
        self.detail.param.as_deref()
    }

    /// Whether this is a card decline or card validation failure.
    #[must_use]
    pub fn is_card_error(&self) -> bool {
        self.detail.kind == ErrorType::Card
    }

    /// Whether the request itself was rejected.
    #[must_use]
    pub fn is_invalid_request(&self) -> bool {
        self.detail.kind == ErrorType::InvalidRequest
    }

    /// Whether the API failed on its side.
    #[must_use]
    pub fn is_api_error(&self) -> bool {
        self.detail.kind == ErrorType::Api
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_card_error() {
        let body = br#"{"error":{"type":"card_error","message":"Your card was declined.","code":"card_declined"}}"#;
        let err = ApiError::from_body(402, body);

        assert_eq!(err.status, 402);
        assert!(err.is_card_error());
        assert_eq!(err.code(), Some(ErrorCode::CardDeclined));
        assert_eq!(err.param(), None);
        assert_eq!(err.to_string(), "Your card was declined.");
    }

    #[test]
    fn decodes_invalid_request_with_param() {
        let body = br#"{"error":{"type":"invalid_request_error","message":"Missing required param: amount","param":"amount"}}"#;
        let err = ApiError::from_body(400, body);

        assert!(err.is_invalid_request());
        assert_eq!(err.code(), None);
        assert_eq!(err.param(), Some("amount"));
    }

    #[test]
    fn unknown_type_and_code_are_tolerated() {
        let body = br#"{"error":{"type":"rate_limit_error","message":"slow down","code":"too_many"}}"#;
        let err = ApiError::from_body(429, body);

        assert_eq!(err.kind(), ErrorType::Unknown);
        assert_eq!(err.code(), Some(ErrorCode::Other));
        assert_eq!(err.to_string(), "slow down");
    }

    #[test]
    fn malformed_body_degrades_to_empty_detail() {
        let err = ApiError::from_body(500, b"<html>Bad Gateway</html>");

        assert_eq!(err.status, 500);
        assert_eq!(err.detail, ErrorDetail::default());
        assert_eq!(err.kind(), ErrorType::Unknown);
    }

    #[test]
    fn all_listed_codes_decode() {
        let codes = [
            ("incorrect_number", ErrorCode::IncorrectNumber),
            ("invalid_number", ErrorCode::InvalidNumber),
            ("invalid_expiry_month", ErrorCode::InvalidExpiryMonth),
            ("invalid_expiry_year", ErrorCode::InvalidExpiryYear),
            ("invalid_cvc", ErrorCode::InvalidCvc),
            ("expired_card", ErrorCode::ExpiredCard),
            ("incorrect_cvc", ErrorCode::IncorrectCvc),
            ("incorrect_zip", ErrorCode::IncorrectZip),
            ("card_declined", ErrorCode::CardDeclined),
            ("missing", ErrorCode::Missing),
            ("processing_error", ErrorCode::ProcessingError),
        ];
        for (raw, expected) in codes {
            let code: ErrorCode = serde_json::from_str(&format!("\"{raw}\"")).unwrap();
            assert_eq!(code, expected, "{raw}");
        }
    }

    #[test]
    fn null_message_keeps_type_and_code() {
        let body = br#"{"error":{"type":"card_error","message":null,"code":"card_declined"}}"#;
        let err = ApiError::from_body(402, body);

        assert_eq!(err.kind(), ErrorType::Card);
        assert_eq!(err.code(), Some(ErrorCode::CardDeclined));
        assert_eq!(err.detail.message, "");
    }

    #[test]
    fn null_type_keeps_message() {
        let body = br#"{"error":{"type":null,"message":"Your card was declined."}}"#;
        let err = ApiError::from_body(402, body);

        assert_eq!(err.kind(), ErrorType::Unknown);
        assert_eq!(err.to_string(), "Your card was declined.");
    }

    #[test]
    fn mistyped_fields_are_dropped_individually() {
        let body = br#"{"error":{"type":"invalid_request_error","message":"bad","code":17,"param":["amount"]}}"#;
        let err = ApiError::from_body(400, body);

        assert!(err.is_invalid_request());
        assert_eq!(err.to_string(), "bad");
        assert_eq!(err.code(), None);
        assert_eq!(err.param(), None);
    }

    #[test]
    fn null_error_object_degrades_to_empty_detail() {
        let err = ApiError::from_body(500, br#"{"error":null}"#);
        assert_eq!(err.detail, ErrorDetail::default());
    }
}
