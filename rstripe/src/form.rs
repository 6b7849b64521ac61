//! Flat form encoding of request parameters.
//!
//! The API accepts parameters as `application/x-www-form-urlencoded` pairs, in
//! the query string for `GET` and in the body for everything else. Composite
//! values are flattened with bracket notation (`card[number]`,
//! `metadata[order_id]`).
//!
//! Optional parameters are never sent at their zero value: the API treats a
//! present-but-empty key differently from an absent one, so the `push_*`
//! helpers below drop empty strings, zero numbers and `false` flags.

use std::collections::HashMap;
use std::fmt;

use url::form_urlencoded;

/// An ordered list of form key/value pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormParams {
    pairs: Vec<(String, String)>,
}

impl FormParams {
    /// Creates an empty parameter list.
    #[must_use]
    pub const fn new() -> Self {
        Self { pairs: Vec::new() }
    }

    /// Appends a pair unconditionally. Use for required parameters.
    pub fn push(&mut self, key: impl Into<String>, value: impl fmt::Display) -> &mut Self {
        self.pairs.push((key.into(), value.to_string()));
        self
    }

    /// Appends a string pair unless `value` is empty.
    pub fn push_str(&mut self, key: impl Into<String>, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.pairs.push((key.into(), value.to_owned()));
        }
        self
    }

    /// Appends a numeric pair unless `value` is zero.
    pub fn push_nonzero<N>(&mut self, key: impl Into<String>, value: N) -> &mut Self
    where
        N: Default + PartialEq + fmt::Display,
    {
        if value != N::default() {
            self.pairs.push((key.into(), value.to_string()));
        }
        self
    }

    /// Appends `key=true` when `value` is set; a `false` flag is left out.
    pub fn push_flag(&mut self, key: impl Into<String>, value: bool) -> &mut Self {
        if value {
            self.pairs.push((key.into(), "true".to_owned()));
        }
        self
    }

    /// Appends `parent[sub]=value` unless `value` is empty.
    pub fn push_nested(&mut self, parent: &str, sub: &str, value: &str) -> &mut Self {
        self.push_str(nested_key(parent, sub), value)
    }

    /// Appends one `metadata[key]=value` pair per map entry.
    ///
    /// Map iteration order is not preserved; the API treats metadata as a set.
    pub fn push_metadata<S>(&mut self, metadata: &HashMap<String, String, S>) -> &mut Self
    where
        S: std::hash::BuildHasher,
    {
        for (key, value) in metadata {
            self.pairs.push((nested_key("metadata", key), value.clone()));
        }
        self
    }

    /// Returns the first value recorded for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Whether any pair uses `key`.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.pairs.iter().any(|(k, _)| k == key)
    }

    /// Number of pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether no pairs were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Iterates over the pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Encodes the pairs as `application/x-www-form-urlencoded`.
    #[must_use]
    pub fn encode(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.pairs)
            .finish()
    }
}

impl<K, V> FromIterator<(K, V)> for FormParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            pairs: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Builds a bracketed sub-key, e.g. `card[exp_month]`.
#[must_use]
pub fn nested_key(parent: &str, sub: &str) -> String {
    format!("{parent}[{sub}]")
}

/// Conversion of a parameter object into form pairs.
pub trait ToForm {
    /// Appends this object's pairs to `form`.
    fn append_to(&self, form: &mut FormParams);

    /// Encodes this object into a fresh [`FormParams`].
    fn to_form(&self) -> FormParams {
        let mut form = FormParams::new();
        self.append_to(&mut form);
        form
    }
}

/// Paging window for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListParams {
    /// Number of objects to return, between 1 and 100.
    pub count: u32,
    /// Offset into the list.
    pub offset: u32,
}

impl ListParams {
    /// Page size used when the caller does not pick one.
    pub const DEFAULT_COUNT: u32 = 10;

    /// Creates a window of `count` objects starting at `offset`.
    #[must_use]
    pub const fn new(count: u32, offset: u32) -> Self {
        Self { count, offset }
    }
}

impl Default for ListParams {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COUNT, 0)
    }
}

impl ToForm for ListParams {
    // The API reads both values even at zero, so they are always sent.
    fn append_to(&self, form: &mut FormParams) {
        form.push("count", self.count).push("offset", self.offset);
    }
}
