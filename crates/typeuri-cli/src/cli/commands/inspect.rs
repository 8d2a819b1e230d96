//! `typeuri inspect` – print the full report for a URI.

use anyhow::{Context, Result};
use typeuri_core::config::OutputFormat;
use typeuri_core::UriReport;

pub fn run_inspect(input: &str, json: bool, configured: OutputFormat) -> Result<()> {
    let format = if json { OutputFormat::Json } else { configured };
    println!("{}", render_inspect(input, format)?);
    Ok(())
}

pub(crate) fn render_inspect(input: &str, format: OutputFormat) -> Result<String> {
    let report = UriReport::from_input(input).with_context(|| format!("inspect {input}"))?;
    match format {
        OutputFormat::Text => Ok(report.to_string()),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&report)?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_report() {
        let out = render_inspect("https://github.com/shaunkawano/typeuri", OutputFormat::Text)
            .unwrap();
        assert!(out.starts_with("input=https://github.com/shaunkawano/typeuri\n"));
        assert!(out.contains("pathSegments=[shaunkawano, typeuri]"));
    }

    #[test]
    fn json_report() {
        let out = render_inspect("https://github.com/trending?l=java", OutputFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(v["query_map"]["l"][0], "java");
    }

    #[test]
    fn invalid_input_has_context() {
        let err = render_inspect("nope", OutputFormat::Text).unwrap_err();
        let msg = format!("{:#}", err);
        assert!(msg.starts_with("inspect nope: invalid argument"), "{msg}");
    }
}
