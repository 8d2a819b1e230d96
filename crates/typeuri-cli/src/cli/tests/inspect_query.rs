//! Tests for inspect, query and segments subcommands.

use super::parse;
use crate::cli::{Cli, CliCommand};
use clap::Parser;

#[test]
fn cli_parse_inspect_default() {
    match parse(&["typeuri", "inspect"]) {
        CliCommand::Inspect { uri, json } => {
            assert!(uri.is_none());
            assert!(!json);
        }
        _ => panic!("expected Inspect"),
    }
}

#[test]
fn cli_parse_inspect_json() {
    match parse(&["typeuri", "inspect", "https://github.com", "--json"]) {
        CliCommand::Inspect { uri, json } => {
            assert_eq!(uri.as_deref(), Some("https://github.com"));
            assert!(json);
        }
        _ => panic!("expected Inspect with --json"),
    }
}

#[test]
fn cli_parse_query() {
    match parse(&["typeuri", "query", "https://github.com/trending?l=java"]) {
        CliCommand::Query { uri, key } => {
            assert_eq!(uri, "https://github.com/trending?l=java");
            assert!(key.is_none());
        }
        _ => panic!("expected Query"),
    }
}

#[test]
fn cli_parse_query_key() {
    match parse(&["typeuri", "query", "https://github.com/trending?l=java", "l"]) {
        CliCommand::Query { key, .. } => assert_eq!(key.as_deref(), Some("l")),
        _ => panic!("expected Query with key"),
    }
}

#[test]
fn cli_parse_segments() {
    match parse(&["typeuri", "segments", "https://github.com/shaunkawano/typeuri"]) {
        CliCommand::Segments { uri } => {
            assert_eq!(uri, "https://github.com/shaunkawano/typeuri")
        }
        _ => panic!("expected Segments"),
    }
}

#[test]
fn cli_parse_segments_requires_uri() {
    assert!(Cli::try_parse_from(["typeuri", "segments"]).is_err());
}
