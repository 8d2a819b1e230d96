//! Ordered query multi-map.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::decode::{decode_form_component, decode_query_text};
use crate::error::InvalidArgument;

/// Decoded query parameters grouped by key.
///
/// Keys keep the order of their first occurrence; values keep the order in
/// which they appear in the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QueryMap {
    entries: Vec<(String, Vec<String>)>,
}

impl QueryMap {
    /// Parses a raw query string as taken from the URI.
    ///
    /// `None` and `""` both give an empty map. The query is percent-decoded
    /// as a whole first, so encoded `&` and `=` act as separators. Each
    /// `&`-separated token is then split on its first `=` only (values may
    /// contain `=`) and form-decoded. A token with no `=`, or one starting
    /// with `=`, is taken whole as a key with an empty value.
    pub(crate) fn parse(query: Option<&str>) -> Result<Self, InvalidArgument> {
        let mut map = QueryMap::default();
        let query = match query {
            Some(q) if !q.is_empty() => decode_query_text(q)?,
            _ => return Ok(map),
        };

        for token in query.split('&') {
            let (key, value) = match token.find('=') {
                Some(eq) if eq > 0 => (
                    decode_form_component(&token[..eq])?,
                    decode_form_component(&token[eq + 1..])?,
                ),
                _ => (decode_form_component(token)?, String::new()),
            };
            tracing::trace!(%key, %value, "query parameter");
            map.push(key, value);
        }

        Ok(map)
    }

    fn push(&mut self, key: String, value: String) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, values)) => values.push(value),
            None => self.entries.push((key, vec![value])),
        }
    }

    /// Values recorded for `key`, in query order.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// True if `key` is present and `value` is one of its values.
    pub fn contains(&self, key: &str, value: &str) -> bool {
        self.get(key)
            .is_some_and(|values| values.iter().any(|v| v == value))
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(k, values)| (k.as_str(), values.as_slice()))
    }
}

impl<'a> IntoIterator for &'a QueryMap {
    type Item = (&'a str, &'a [String]);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

impl Serialize for QueryMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, values) in &self.entries {
            map.serialize_entry(key, values)?;
        }
        map.end()
    }
}

/// Renders as `{l=[java], q=[a, b]}`.
impl fmt::Display for QueryMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, values)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}=[{}]", key, values.join(", "))?;
        }
        write!(f, "}}")
    }
}
