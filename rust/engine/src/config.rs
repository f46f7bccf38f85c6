//! Session configuration.
//!
//! The ruleset itself is fixed; the only tunable is the shuffle seed, which
//! comes from (in increasing priority) the built-in default, a TOML file named
//! by `ELEVENS_CONFIG`, and the `ELEVENS_SEED` environment variable.

use serde::{Deserialize, Serialize};
use std::fs;
use thiserror::Error;

pub const CONFIG_ENV: &str = "ELEVENS_CONFIG";
pub const SEED_ENV: &str = "ELEVENS_SEED";

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Shuffle seed; `None` draws one from OS entropy
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ValueSource {
    #[default]
    Default,
    File,
    Env,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConfigSources {
    pub seed: ValueSource,
}

#[derive(Debug, Clone)]
pub struct ConfigResolved {
    pub config: Config,
    pub sources: ConfigSources,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub fn load() -> Result<Config, ConfigError> {
    load_with_sources().map(|resolved| resolved.config)
}

pub fn load_with_sources() -> Result<ConfigResolved, ConfigError> {
    let mut cfg = Config::default();
    let mut sources = ConfigSources::default();

    if let Ok(path) = std::env::var(CONFIG_ENV) {
        let s = fs::read_to_string(path)?;
        if let Some(seed) = from_toml_str(&s)?.seed {
            cfg.seed = Some(seed);
            sources.seed = ValueSource::File;
        }
    }

    if let Ok(seed) = std::env::var(SEED_ENV) {
        if !seed.is_empty() {
            cfg.seed = Some(parse_seed(&seed)?);
            sources.seed = ValueSource::Env;
        }
    }

    Ok(ConfigResolved {
        config: cfg,
        sources,
    })
}

pub fn from_toml_str(s: &str) -> Result<Config, ConfigError> {
    let f: FileConfig = toml::from_str(s)?;
    Ok(Config { seed: f.seed })
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    seed: Option<u64>,
}

fn parse_seed(s: &str) -> Result<u64, ConfigError> {
    s.trim()
        .parse()
        .map_err(|_| ConfigError::Invalid(format!("seed must be an unsigned integer, got {s:?}")))
}
