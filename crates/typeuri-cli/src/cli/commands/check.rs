//! `typeuri check` – evaluate scheme/host/query predicates.

use anyhow::{bail, Result};
use typeuri_core::TypeUri;

/// Predicates requested on the command line; unset ones are skipped.
#[derive(Debug, Default)]
pub struct Checks {
    pub scheme: Option<String>,
    pub host: Option<String>,
    pub key: Option<String>,
    pub params: Vec<(String, String)>,
    pub network: bool,
    pub http: bool,
    pub https: bool,
}

pub fn run_check(input: &str, checks: &Checks) -> Result<()> {
    let uri = TypeUri::parse(input)?;
    let results = evaluate(&uri, checks);
    for (name, ok) in &results {
        println!("{name}={ok}");
    }
    let failed = results.iter().filter(|(_, ok)| !ok).count();
    if failed > 0 {
        bail!("{failed} of {} checks failed for {input}", results.len());
    }
    Ok(())
}

pub(crate) fn evaluate(uri: &TypeUri, checks: &Checks) -> Vec<(String, bool)> {
    let mut results = Vec::new();
    if let Some(scheme) = &checks.scheme {
        results.push((format!("scheme({scheme})"), uri.is_scheme(scheme)));
    }
    if let Some(host) = &checks.host {
        results.push((format!("host({host})"), uri.is_host(host)));
    }
    if let Some(key) = &checks.key {
        results.push((format!("hasQuery({key})"), uri.has_query_key(key)));
    }
    if !checks.params.is_empty() {
        results.push((
            "containsAnyQuery".to_string(),
            uri.contains_any_query(checks.params.iter().map(|(k, v)| (k, v))),
        ));
    }
    if checks.network {
        results.push(("isNetwork".to_string(), uri.is_network()));
    }
    if checks.http {
        results.push(("isHttp".to_string(), uri.is_http()));
    }
    if checks.https {
        results.push(("isHttps".to_string(), uri.is_https()));
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_checks_requested() {
        let uri = TypeUri::parse("https://github.com").unwrap();
        assert!(evaluate(&uri, &Checks::default()).is_empty());
    }

    #[test]
    fn mixed_results() {
        let uri = TypeUri::parse("http://shaunkawano.com/?l=java").unwrap();
        let checks = Checks {
            scheme: Some("http".to_string()),
            host: Some("github.com".to_string()),
            params: vec![
                ("l".to_string(), "ruby".to_string()),
                ("l".to_string(), "java".to_string()),
            ],
            https: true,
            ..Checks::default()
        };
        assert_eq!(
            evaluate(&uri, &checks),
            vec![
                ("scheme(http)".to_string(), true),
                ("host(github.com)".to_string(), false),
                ("containsAnyQuery".to_string(), true),
                ("isHttps".to_string(), false),
            ]
        );
    }

    #[test]
    fn run_check_fails_when_any_false() {
        let checks = Checks {
            https: true,
            ..Checks::default()
        };
        assert!(run_check("http://shaunkawano.com", &checks).is_err());
        assert!(run_check("https://github.com", &checks).is_ok());
    }
}
