use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use slidealign::SearchConfig;

use crate::cli::TuningArgs;

/// Contents of a `--config` file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub search: SearchConfig,
}

pub fn load(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

fn parse(content: &str) -> Result<ConfigFile> {
    Ok(toml::from_str(content)?)
}

/// CLI > file > defaults, validated.
pub fn resolve(path: Option<&Path>, cli: &TuningArgs) -> Result<SearchConfig> {
    let mut search = match path {
        Some(path) => load(path)?.search,
        None => SearchConfig::default(),
    };
    apply(&mut search, cli);
    search.validate().context("Invalid search configuration")?;
    Ok(search)
}

fn apply(search: &mut SearchConfig, cli: &TuningArgs) {
    if let Some(th) = cli.thumbnail_height {
        search.thumbnail_height = th;
    }
    if let Some(pw) = cli.padding {
        search.padding = pw;
    }
    if let Some(t) = cli.dark_threshold {
        search.dark_threshold = t;
    }
    if let Some(n) = cli.min_component_size {
        search.min_component_size = n;
    }
}
