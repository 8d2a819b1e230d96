//! `typeuri query` – print the decoded query map.

use anyhow::Result;
use typeuri_core::TypeUri;

pub fn run_query(input: &str, key: Option<&str>) -> Result<()> {
    let uri = TypeUri::parse(input)?;
    for line in render_query(&uri, key) {
        println!("{line}");
    }
    Ok(())
}

/// One `key=value` line per value; with `key`, just its values.
pub(crate) fn render_query(uri: &TypeUri, key: Option<&str>) -> Vec<String> {
    match key {
        Some(k) => uri
            .query_map()
            .get(k)
            .map(|values| values.to_vec())
            .unwrap_or_default(),
        None => uri
            .query_map()
            .iter()
            .flat_map(|(k, values)| values.iter().map(move |v| format!("{k}={v}")))
            .collect(),
    }
}
