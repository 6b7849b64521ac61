//! Payment cards: client-side number checks, the card object and card parameters.
//!
//! [`luhn_valid`] and [`CardBrand::from_number`] are pure functions meant for
//! validating input before it is sent anywhere. Neither is required by the API
//! and neither is a substitute for the checks the API performs itself.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::form::{FormParams, ToForm, nested_key};
use crate::nullable;

/// Card network, as reported in the card object's `type` field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardBrand {
    /// Visa.
    Visa,
    /// MasterCard.
    MasterCard,
    /// American Express.
    #[serde(rename = "American Express")]
    AmericanExpress,
    /// Discover.
    Discover,
    /// JCB.
    #[serde(rename = "JCB")]
    Jcb,
    /// Diners Club.
    #[serde(rename = "Diners Club")]
    DinersClub,
    /// No prefix rule matched.
    #[default]
    #[serde(other)]
    Unknown,
}

impl CardBrand {
    /// Every brand, `Unknown` last.
    pub const ALL: [Self; 7] = [
        Self::Visa,
        Self::MasterCard,
        Self::AmericanExpress,
        Self::Discover,
        Self::Jcb,
        Self::DinersClub,
        Self::Unknown,
    ];

    /// Detects the brand from the leading digits of a card number.
    ///
    /// Numbers too short to evaluate a prefix rule are [`CardBrand::Unknown`].
    #[must_use]
    pub fn from_number(number: &str) -> Self {
        let prefix = |len: usize| number.get(..len);

        match prefix(1) {
            Some("4") => Self::Visa,
            Some("1" | "2") => match prefix(4) {
                Some("2131" | "1800") => Self::Jcb,
                _ => Self::Unknown,
            },
            Some("6") => match prefix(4) {
                Some("6011") => Self::Discover,
                _ => Self::Unknown,
            },
            Some("5") => match prefix(2) {
                Some("51" | "52" | "53" | "54" | "55") => Self::MasterCard,
                _ => Self::Unknown,
            },
            Some("3") => match prefix(2) {
                Some("34" | "37") => Self::AmericanExpress,
                Some("36") => Self::DinersClub,
                Some("30") => match prefix(3) {
                    Some("300" | "301" | "302" | "303" | "304" | "305") => Self::DinersClub,
                    _ => Self::Unknown,
                },
                Some(_) => Self::Jcb,
                None => Self::Unknown,
            },
            _ => Self::Unknown,
        }
    }

    /// The label the API uses for this brand.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::MasterCard => "MasterCard",
            Self::AmericanExpress => "American Express",
            Self::Discover => "Discover",
            Self::Jcb => "JCB",
            Self::DinersClub => "Diners Club",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for CardBrand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reasons a string cannot be run through the Luhn check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LuhnError {
    /// The input was empty.
    #[error("card number is empty")]
    Empty,
    /// The input contained something other than `0`-`9`.
    #[error("invalid digit {character:?} at position {position}")]
    InvalidDigit {
        /// Byte offset of the offending character.
        position: usize,
        /// The offending character.
        character: char,
    },
}

/// Checks a card number against the Luhn (mod 10) checksum.
///
/// Walking from the rightmost digit, every second digit is doubled (and reduced
/// by 9 when the product exceeds 9); the number passes when the sum of all
/// digits is a multiple of 10. Separators are not stripped.
///
/// ```rust
/// assert_eq!(rstripe::luhn_valid("4242424242424242"), Ok(true));
/// assert_eq!(rstripe::luhn_valid("4213729238347292"), Ok(false));
/// ```
///
/// # Errors
///
/// Returns [`LuhnError::Empty`] for an empty string and
/// [`LuhnError::InvalidDigit`] for the first non-digit character.
pub fn luhn_valid(number: &str) -> Result<bool, LuhnError> {
    if number.is_empty() {
        return Err(LuhnError::Empty);
    }

    let mut sum = 0_u32;
    for (i, (position, character)) in number.char_indices().rev().enumerate() {
        let digit = character
            .to_digit(10)
            .ok_or(LuhnError::InvalidDigit { position, character })?;
        sum += if i % 2 == 1 {
            let doubled = digit * 2;
            if doubled > 9 { doubled - 9 } else { doubled }
        } else {
            digit
        };
    }

    Ok(sum % 10 == 0)
}

/// A card stored on a customer or wrapped by a token.
///
/// See <https://stripe.com/docs/api#card_object>.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Card identifier.
    #[serde(default)]
    pub id: String,
    /// Cardholder name.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub name: String,
    /// Card network.
    #[serde(rename = "type", default, deserialize_with = "nullable::deserialize")]
    pub brand: CardBrand,
    /// Expiration month, 1-12.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub exp_month: u32,
    /// Four digit expiration year.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub exp_year: u32,
    /// Last four digits of the number.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub last4: String,
    /// Stable fingerprint of the card number.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub fingerprint: String,
    /// Two-letter issuing country code.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub country: String,
    /// Billing address, first line.
    #[serde(rename = "address_line1", default, deserialize_with = "nullable::deserialize")]
    pub address1: String,
    /// Billing address, second line.
    #[serde(rename = "address_line2", default, deserialize_with = "nullable::deserialize")]
    pub address2: String,
    /// Billing city.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub address_city: String,
    /// Billing state or province.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub address_state: String,
    /// Billing postal code.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub address_zip: String,
    /// Billing country.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub address_country: String,
    /// Result of the address line 1 check (`pass`, `fail`, `unchecked`).
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub address_line1_check: String,
    /// Result of the postal code check.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub address_zip_check: String,
    /// Result of the security code check.
    #[serde(default, deserialize_with = "nullable::deserialize")]
    pub cvc_check: String,
}

/// Raw card details for creating a card, token, charge or subscription.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardParams {
    /// (Optional) Cardholder's full name.
    pub name: String,
    /// Card number without separators.
    pub number: String,
    /// Expiration month, 1-12.
    pub exp_month: u32,
    /// Four digit expiration year.
    pub exp_year: u32,
    /// (Optional) Security code.
    pub cvc: String,
    /// (Optional) Billing address line 1.
    pub address1: String,
    /// (Optional) Billing address line 2.
    pub address2: String,
    /// (Optional) Billing address country.
    pub address_country: String,
    /// (Optional) Billing address state.
    pub address_state: String,
    /// (Optional) Billing address zip code.
    pub address_zip: String,
}

impl CardParams {
    /// Form key under which card details are nested.
    pub const PARENT_KEY: &'static str = "card";

    /// Runs the Luhn check on [`CardParams::number`].
    ///
    /// # Errors
    ///
    /// See [`luhn_valid`].
    pub fn luhn_valid(&self) -> Result<bool, LuhnError> {
        luhn_valid(&self.number)
    }

    /// Detects the brand of [`CardParams::number`].
    #[must_use]
    pub fn brand(&self) -> CardBrand {
        CardBrand::from_number(&self.number)
    }
}

impl ToForm for CardParams {
    fn append_to(&self, form: &mut FormParams) {
        let key = |sub: &str| nested_key(Self::PARENT_KEY, sub);
        form.push(key("number"), &self.number)
            .push(key("exp_month"), self.exp_month)
            .push(key("exp_year"), self.exp_year)
            .push_str(key("cvc"), &self.cvc)
            .push_str(key("name"), &self.name)
            .push_str(key("address_line1"), &self.address1)
            .push_str(key("address_line2"), &self.address2)
            .push_str(key("address_country"), &self.address_country)
            .push_str(key("address_state"), &self.address_state)
            .push_str(key("address_zip"), &self.address_zip);
    }
}

/// The card to charge or attach: a single-use token, or raw details.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardSource {
    /// A token from Stripe.js, Checkout or [`Token`](crate::resources::Token) creation.
    Token(String),
    /// Card details sent directly.
    Details(CardParams),
}

impl From<CardParams> for CardSource {
    fn from(params: CardParams) -> Self {
        Self::Details(params)
    }
}

impl ToForm for CardSource {
    fn append_to(&self, form: &mut FormParams) {
        match self {
            Self::Token(token) => {
                form.push_str(CardParams::PARENT_KEY, token);
            }
            Self::Details(params) => params.append_to(form),
        }
    }
}
