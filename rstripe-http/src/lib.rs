//! HTTP layer for the Stripe REST API.
//!
//! [`StripeClient`] turns typed parameter objects from [`rstripe`] into
//! authenticated form-encoded requests, performs exactly one round trip per
//! call, and decodes either the expected resource or the API's structured
//! error.
//!
//! ```no_run
//! use rstripe::resources::CouponParams;
//! use rstripe_http::{ClientConfig, StripeClient};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = StripeClient::new(ClientConfig::from_env()?);
//! let coupon = client
//!     .coupons()
//!     .create(&CouponParams { percent_off: 10, ..CouponParams::default() })
//!     .await?;
//! println!("created {}", coupon.id);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`constants`] - API base URL, version header, environment variable names
//! - [`config`] - [`ApiKey`] and [`ClientConfig`]
//! - [`transport`] - the [`Transport`] capability and its reqwest implementations
//! - [`client`] - the authenticated dispatcher and [`ClientError`]
//! - [`api`] - per-resource clients
//!
//! # Feature Flags
//!
//! - `telemetry` - Emits `tracing` spans and events for every request

pub mod api;
pub mod client;
pub mod config;
pub mod constants;
pub mod transport;

pub use client::{ClientError, StripeClient};
pub use config::{ApiKey, ClientConfig, ConfigError};
pub use transport::{HeaderAuthTransport, Transport, TransportError, UserInfoTransport};
