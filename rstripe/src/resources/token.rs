//! Single-use card tokens.

use serde::{Deserialize, Serialize};

use crate::card::{Card, CardParams};
use crate::form::{FormParams, ToForm};

/// A token wrapping card details. Usable once, in place of the card itself.
///
/// See <https://stripe.com/docs/api#token_object>.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Token identifier.
    #[serde(default)]
    pub id: String,
    /// The wrapped card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card: Option<Card>,
    /// Creation time, seconds since the epoch.
    #[serde(default)]
    pub created: i64,
    /// Whether the token has been used.
    #[serde(default)]
    pub used: bool,
    /// Whether the token was created in live mode.
    #[serde(default)]
    pub livemode: bool,
}

/// Parameters for creating a card token.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenParams {
    /// Card to tokenize.
    pub card: CardParams,
    /// (Optional) Customer whose card is being tokenized.
    pub customer: String,
}

impl ToForm for TokenParams {
    fn append_to(&self, form: &mut FormParams) {
        self.card.append_to(form);
        form.push_str("customer", &self.customer);
    }
}
