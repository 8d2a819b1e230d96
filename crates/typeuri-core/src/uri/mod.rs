//! URI facade: typed, precomputed accessors over a parsed [`Url`].
//!
//! The query map and path segments are derived once when the facade is
//! built; every accessor afterwards is a pure read.

mod decode;
mod path;
mod query;

use std::fmt;
use std::str::FromStr;

use url::{Position, Url};

use crate::error::InvalidArgument;
use decode::decode_lossy;

pub use query::QueryMap;

/// A parsed URI plus its decoded query map and path segments.
///
/// Two values are equal when the URI, the query map and the path segments
/// are all equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeUri {
    uri: Url,
    query_map: QueryMap,
    path_segments: Vec<String>,
}

impl TypeUri {
    /// Wraps an already parsed URI.
    ///
    /// Fails only if a query key or value cannot be decoded.
    pub fn new(uri: Url) -> Result<Self, InvalidArgument> {
        let query_map = QueryMap::parse(uri.query())?;
        let path_segments = path::path_segments(&uri);
        tracing::debug!(
            uri = %uri,
            query_keys = query_map.len(),
            path_segments = path_segments.len(),
            "built TypeUri"
        );
        Ok(Self {
            uri,
            query_map,
            path_segments,
        })
    }

    /// Parses `input` with [`Url::parse`] and wraps the result.
    ///
    /// # Examples
    ///
    /// ```
    /// use typeuri_core::TypeUri;
    ///
    /// let uri = TypeUri::parse("https://github.com/trending?l=java").unwrap();
    /// assert!(uri.contains_query("l", "java"));
    /// assert_eq!(uri.path_segments(), ["trending"]);
    /// ```
    pub fn parse(input: &str) -> Result<Self, InvalidArgument> {
        let uri = Url::parse(input)?;
        Self::new(uri)
    }

    /// The wrapped URI, unchanged.
    pub fn uri(&self) -> &Url {
        &self.uri
    }

    pub fn into_uri(self) -> Url {
        self.uri
    }

    /// Decoded query parameters; empty when the URI has no query.
    pub fn query_map(&self) -> &QueryMap {
        &self.query_map
    }

    /// Non-empty decoded path segments; empty for `/` or no path.
    pub fn path_segments(&self) -> &[String] {
        &self.path_segments
    }

    pub fn has_empty_path(&self) -> bool {
        self.path_segments.is_empty()
    }

    /// True if the scheme is `http` or `https`.
    pub fn is_network(&self) -> bool {
        self.is_http() || self.is_https()
    }

    pub fn is_http(&self) -> bool {
        self.is_scheme("http")
    }

    pub fn is_https(&self) -> bool {
        self.is_scheme("https")
    }

    pub fn is_host(&self, host: &str) -> bool {
        self.uri.host_str() == Some(host)
    }

    pub fn is_scheme(&self, scheme: &str) -> bool {
        self.uri.scheme() == scheme
    }

    /// True if the URI has a query component, even an empty one (`...?`).
    pub fn has_query(&self) -> bool {
        self.uri.query().is_some()
    }

    pub fn has_query_key(&self, key: &str) -> bool {
        self.query_map.contains_key(key)
    }

    /// True if `key` has `value` among its values.
    pub fn contains_query(&self, key: &str, value: &str) -> bool {
        self.query_map.contains(key, value)
    }

    /// True if at least one of the given pairs is present. An empty input
    /// is never contained.
    ///
    /// Accepts maps as well as slices of pairs:
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use typeuri_core::TypeUri;
    ///
    /// let uri = TypeUri::parse("https://github.com/trending?l=java").unwrap();
    /// let wanted = HashMap::from([("l", "ruby"), ("since", "daily")]);
    /// assert!(!uri.contains_any_query(&wanted));
    /// assert!(uri.contains_any_query([("l", "ruby"), ("l", "java")]));
    /// ```
    pub fn contains_any_query<I, K, V>(&self, pairs: I) -> bool
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        pairs
            .into_iter()
            .any(|(k, v)| self.contains_query(k.as_ref(), v.as_ref()))
    }

    pub fn scheme(&self) -> &str {
        self.uri.scheme()
    }

    pub fn host(&self) -> Option<&str> {
        self.uri.host_str()
    }

    pub fn raw_query(&self) -> Option<&str> {
        self.uri.query()
    }

    /// Percent-decoded query text. `+` is left as is.
    pub fn query(&self) -> Option<String> {
        self.uri.query().map(decode_lossy)
    }

    pub fn raw_path(&self) -> &str {
        self.uri.path()
    }

    pub fn path(&self) -> String {
        decode_lossy(self.uri.path())
    }

    /// Everything between `scheme:` and the fragment, still encoded.
    pub fn raw_scheme_specific_part(&self) -> &str {
        let part = &self.uri[Position::AfterScheme..Position::AfterQuery];
        part.strip_prefix(':').unwrap_or(part)
    }

    pub fn scheme_specific_part(&self) -> String {
        decode_lossy(self.raw_scheme_specific_part())
    }

    /// True for URIs without a hierarchical path, such as `mailto:` or `data:`.
    pub fn is_opaque(&self) -> bool {
        self.uri.cannot_be_a_base()
    }
}

impl FromStr for TypeUri {
    type Err = InvalidArgument;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<Url> for TypeUri {
    type Error = InvalidArgument;

    fn try_from(uri: Url) -> Result<Self, Self::Error> {
        Self::new(uri)
    }
}

impl fmt::Display for TypeUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.uri.as_str())
    }
}
