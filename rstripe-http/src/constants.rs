//! Fixed values of the Stripe HTTP API.

use http::HeaderName;

/// Base URL used when none is configured.
pub const DEFAULT_API_BASE: &str = "https://api.stripe.com";

/// Header pinning the API version for every request.
pub const VERSION_HEADER: HeaderName = HeaderName::from_static("stripe-version");

/// API version this client speaks.
pub const API_VERSION: &str = "2013-08-13";

/// Content type of non-`GET` request bodies.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Environment variable holding the default API key.
pub const API_KEY_ENV: &str = "STRIPE_API_KEY";

/// Environment variable overriding the base URL.
pub const API_BASE_ENV: &str = "STRIPE_API_BASE";
