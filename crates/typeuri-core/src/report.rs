//! Inspection report: one snapshot of every accessor for a single input.

use std::fmt;

use serde::Serialize;

use crate::error::InvalidArgument;
use crate::uri::{QueryMap, TypeUri};

/// Everything the demo front-end shows for one URI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UriReport {
    pub input: String,
    pub is_opaque: bool,
    pub query_map: QueryMap,
    pub has_query: bool,
    pub query: Option<String>,
    pub raw_query: Option<String>,
    pub has_empty_path: bool,
    pub path: String,
    pub raw_path: String,
    pub path_segments: Vec<String>,
    pub host: Option<String>,
    pub raw_scheme_specific_part: String,
    pub scheme_specific_part: String,
    pub is_network: bool,
    pub is_http: bool,
    pub is_https: bool,
}

impl UriReport {
    pub fn new(input: &str, uri: &TypeUri) -> Self {
        Self {
            input: input.to_string(),
            is_opaque: uri.is_opaque(),
            query_map: uri.query_map().clone(),
            has_query: uri.has_query(),
            query: uri.query(),
            raw_query: uri.raw_query().map(str::to_string),
            has_empty_path: uri.has_empty_path(),
            path: uri.path(),
            raw_path: uri.raw_path().to_string(),
            path_segments: uri.path_segments().to_vec(),
            host: uri.host().map(str::to_string),
            raw_scheme_specific_part: uri.raw_scheme_specific_part().to_string(),
            scheme_specific_part: uri.scheme_specific_part(),
            is_network: uri.is_network(),
            is_http: uri.is_http(),
            is_https: uri.is_https(),
        }
    }

    /// Parses `input` and builds the report.
    pub fn from_input(input: &str) -> Result<Self, InvalidArgument> {
        let uri = TypeUri::parse(input)?;
        Ok(Self::new(input, &uri))
    }
}

fn opt(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("null")
}

/// One `name=value` line per field; absent values print as `null`.
impl fmt::Display for UriReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "input={}", self.input)?;
        writeln!(f, "isOpaque={}", self.is_opaque)?;
        writeln!(f, "queryMap={}", self.query_map)?;
        writeln!(f, "hasQuery={}", self.has_query)?;
        writeln!(f, "query={}", opt(&self.query))?;
        writeln!(f, "rawQuery={}", opt(&self.raw_query))?;
        writeln!(f, "hasEmptyPath={}", self.has_empty_path)?;
        writeln!(f, "path={}", self.path)?;
        writeln!(f, "rawPath={}", self.raw_path)?;
        writeln!(f, "pathSegments=[{}]", self.path_segments.join(", "))?;
        writeln!(f, "host={}", opt(&self.host))?;
        writeln!(f, "rawSchemeSpecificPart={}", self.raw_scheme_specific_part)?;
        writeln!(f, "schemeSpecificPart={}", self.scheme_specific_part)?;
        writeln!(f, "isNetwork={}", self.is_network)?;
        writeln!(f, "isHttp={}", self.is_http)?;
        write!(f, "isHttps={}", self.is_https)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_for_default_input() {
        let report = UriReport::from_input("https://github.com/shaunkawano/typeuri").unwrap();
        assert!(!report.is_opaque);
        assert!(!report.has_query);
        assert!(report.query.is_none());
        assert!(report.query_map.is_empty());
        assert_eq!(report.path_segments, ["shaunkawano", "typeuri"]);
        assert_eq!(report.host.as_deref(), Some("github.com"));
        assert!(report.is_network && report.is_https && !report.is_http);
    }

    #[test]
    fn text_rendering() {
        let report = UriReport::from_input("http://example.com/?l=java&l=rust").unwrap();
        let text = report.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "input=http://example.com/?l=java&l=rust");
        assert!(lines.contains(&"queryMap={l=[java, rust]}"));
        assert!(lines.contains(&"hasEmptyPath=true"));
        assert!(lines.contains(&"pathSegments=[]"));
        assert!(lines.contains(&"rawSchemeSpecificPart=//example.com/?l=java&l=rust"));
        assert_eq!(lines.last(), Some(&"isHttps=false"));
    }

    #[test]
    fn absent_fields_render_null() {
        let report = UriReport::from_input("mailto:someone@example.com").unwrap();
        let text = report.to_string();
        assert!(text.contains("host=null"));
        assert!(text.contains("query=null"));
        assert!(text.contains("isOpaque=true"));
    }

    #[test]
    fn json_rendering() {
        let report = UriReport::from_input("https://github.com/trending?l=java").unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["query_map"]["l"][0], "java");
        assert_eq!(json["path_segments"][0], "trending");
        assert_eq!(json["has_query"], true);
        assert_eq!(json["raw_query"], "l=java");
    }

    #[test]
    fn invalid_input_fails() {
        assert!(UriReport::from_input("::nope").is_err());
    }
}
