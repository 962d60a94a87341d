//! Flat query-parameter map
//!
//! `QueryParams` is the key → value(s) mapping the codec reads and writes.
//! Keys are kept sorted, so the rendered query string is stable.

use super::error::QueryError;
use std::collections::BTreeMap;
use std::collections::btree_map;

/// One or several values of a parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Single(String),
    Multiple(Vec<String>),
}

impl ParamValue {
    /// All values, in order
    #[must_use]
    pub fn values(&self) -> Vec<&str> {
        match self {
            Self::Single(value) => vec![value.as_str()],
            Self::Multiple(values) => values.iter().map(String::as_str).collect(),
        }
    }

    /// Last value; repeated scalar parameters resolve to this one
    #[must_use]
    pub fn last(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value.as_str()),
            Self::Multiple(values) => values.last().map(String::as_str),
        }
    }

    fn push(&mut self, value: String) {
        match self {
            Self::Single(existing) => {
                let first = std::mem::take(existing);
                *self = Self::Multiple(vec![first, value]);
            }
            Self::Multiple(values) => values.push(value),
        }
    }
}

/// Key → value(s) map parsed from, or rendered to, a URL query string
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: BTreeMap<String, ParamValue>,
}

impl QueryParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.get(key)
    }

    /// Last value of `key`
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(ParamValue::last)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Set `key` to a single value, replacing what was there
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries
            .insert(key.into(), ParamValue::Single(value.into()));
    }

    /// Set `key` to a list of values, replacing what was there
    pub fn insert_list(&mut self, key: impl Into<String>, values: Vec<String>) {
        self.entries.insert(key.into(), ParamValue::Multiple(values));
    }

    /// Add a value to `key`; a repeated key turns into a list
    pub fn append(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        match self.entries.entry(key.into()) {
            btree_map::Entry::Occupied(mut entry) => entry.get_mut().push(value),
            btree_map::Entry::Vacant(entry) => {
                entry.insert(ParamValue::Single(value));
            }
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Parse a raw query string (with or without a leading `?`)
    ///
    /// Values are percent-decoded and `+` is read as a space. Repeated keys
    /// collect into lists.
    ///
    /// # Errors
    ///
    /// Returns `QueryError::InvalidEncoding` if a component does not decode
    /// to valid UTF-8.
    pub fn from_query_string(query: &str) -> Result<Self, QueryError> {
        let mut params = Self::new();
        let query = query.strip_prefix('?').unwrap_or(query);

        for pair in query.split('&').filter(|pair| !pair.is_empty()) {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            params.append(decode_component(key)?, decode_component(value)?);
        }

        Ok(params)
    }

    /// Render as a query string without a leading `?`
    ///
    /// Values are written raw. Only `%`, `&`, `#` and `+` are escaped, since
    /// they would otherwise change how the string splits or decodes. Empty
    /// lists produce no output.
    #[must_use]
    pub fn to_query_string(&self) -> String {
        let mut pairs = Vec::new();
        for (key, value) in &self.entries {
            for item in value.values() {
                pairs.push(format!("{key}={}", escape_component(item)));
            }
        }
        pairs.join("&")
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.append(key, value);
        }
        params
    }
}

fn decode_component(raw: &str) -> Result<String, QueryError> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced)
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| QueryError::InvalidEncoding(e.to_string()))
}

fn escape_component(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '%' => escaped.push_str("%25"),
            '&' => escaped.push_str("%26"),
            '#' => escaped.push_str("%23"),
            '+' => escaped.push_str("%2B"),
            other => escaped.push(other),
        }
    }
    escaped
}
