//! CLI for the typeuri demo.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use typeuri_core::config;

use commands::{run_check, run_inspect, run_query, run_segments, Checks};

/// Top-level CLI for exploring URIs with typeuri.
#[derive(Debug, Parser)]
#[command(name = "typeuri")]
#[command(about = "typeuri: inspect the query map, path segments and scheme/host of a URI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print every accessor for a URI.
    Inspect {
        /// URI to inspect (defaults to `default_input` from the config file).
        uri: Option<String>,
        /// Print JSON instead of the configured output format.
        #[arg(long)]
        json: bool,
    },

    /// Print the decoded query map, or the values of one key.
    Query {
        /// URI to read the query from.
        uri: String,
        /// Only print the values recorded for this key.
        key: Option<String>,
    },

    /// Print the non-empty path segments, one per line.
    Segments {
        /// URI to split.
        uri: String,
    },

    /// Evaluate predicates; fails unless all of them hold.
    Check {
        /// URI to test.
        uri: String,
        /// Scheme must equal this value exactly.
        #[arg(long)]
        scheme: Option<String>,
        /// Host must equal this value exactly.
        #[arg(long)]
        host: Option<String>,
        /// Query must contain this key.
        #[arg(long)]
        key: Option<String>,
        /// Query must contain at least one of these KEY=VALUE pairs.
        #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
        params: Vec<(String, String)>,
        /// Scheme must be http or https.
        #[arg(long)]
        network: bool,
        /// Scheme must be http.
        #[arg(long)]
        http: bool,
        /// Scheme must be https.
        #[arg(long)]
        https: bool,
    },
}

/// Splits `KEY=VALUE` on the first `=`.
fn parse_key_value(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((k, v)) if !k.is_empty() => Ok((k.to_string(), v.to_string())),
        _ => Err(format!("expected KEY=VALUE, got `{s}`")),
    }
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Inspect { uri, json } => {
                let input = uri.unwrap_or_else(|| cfg.default_input.clone());
                run_inspect(&input, json, cfg.output)?;
            }
            CliCommand::Query { uri, key } => run_query(&uri, key.as_deref())?,
            CliCommand::Segments { uri } => run_segments(&uri)?,
            CliCommand::Check {
                uri,
                scheme,
                host,
                key,
                params,
                network,
                http,
                https,
            } => {
                let checks = Checks {
                    scheme,
                    host,
                    key,
                    params,
                    network,
                    http,
                    https,
                };
                run_check(&uri, &checks)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
