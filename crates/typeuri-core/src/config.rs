use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Input shown when `typeuri inspect` is run without an argument.
pub const DEFAULT_INPUT: &str = "https://github.com/shaunkawano/typeuri";

/// How the CLI prints reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Global configuration loaded from `~/.config/typeuri/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TypeUriConfig {
    /// URI inspected when none is given on the command line.
    #[serde(default = "default_input")]
    pub default_input: String,
    /// Report format: "text" (default) or "json".
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_input() -> String {
    DEFAULT_INPUT.to_string()
}

impl Default for TypeUriConfig {
    fn default() -> Self {
        Self {
            default_input: default_input(),
            output: OutputFormat::default(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix(crate::APP_NAME)?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<TypeUriConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = TypeUriConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit file.
pub fn load_from(path: &Path) -> Result<TypeUriConfig> {
    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: TypeUriConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
