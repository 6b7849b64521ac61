#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Core types for the Stripe REST API.
//!
//! This crate holds everything that does not need a network connection:
//! client-side card checks, the form encoding used for request bodies, the
//! structured error envelope returned by the API, and the typed shapes of the
//! resources the API exposes. The HTTP layer lives in `rstripe-http`.
//!
//! # Modules
//!
//! - [`card`] - Luhn checksum, card brand detection, card shapes and parameters
//! - [`form`] - Flat `application/x-www-form-urlencoded` parameter encoding
//! - [`error`] - The API error envelope and its taxonomy
//! - [`nullable`] - Decoding of scalars the API may send as `null`
//! - [`resources`] - Charges, customers, coupons, plans, subscriptions and friends
//! - [`currency`] - ISO currency codes accepted by the API

pub mod card;
pub mod currency;
pub mod error;
pub mod form;
pub mod nullable;
pub mod resources;

pub use card::{CardBrand, CardParams, CardSource, LuhnError, luhn_valid};
pub use error::{ApiError, ErrorCode, ErrorDetail, ErrorEnvelope, ErrorType};
pub use form::{FormParams, ListParams, ToForm};
