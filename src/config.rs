//! Environment-driven configuration for nucleus-export.
//!
//! All settings come from environment variables, read once at startup into
//! an explicit [`Config`] that is passed into the pipeline (never ambient
//! global state). The lookup is injectable so tests can exercise every
//! combination without touching the process environment.

use std::path::PathBuf;

use crate::shared::error::ExportError;
use crate::shared::Result;

/// Nucleus API key, sent as the `x-apikey` header.
pub const ENV_API_KEY: &str = "NUCLEUS_API_KEY";
/// Numeric project id the asset group lives under.
pub const ENV_PROJECT_ID: &str = "NUCLEUS_PROJECT_ID";
/// Asset-group identifier used to scope the asset listing.
pub const ENV_PROJECT_GROUP: &str = "NUCLEUS_PROJECT_GROUP";
/// Base URL of the Nucleus REST API, e.g. `https://nucleus-us3.nucleussec.com/nucleus/api`.
pub const ENV_API_ENDPOINT: &str = "NUCLEUS_API_ENDPOINT";
/// Folder that receives every output file.
pub const ENV_DATA_FOLDER: &str = "NUCLEUS_DATAFOLDER";
/// Log verbosity (`debug`, `info`, `warning`/`warn`, `error`). Optional.
pub const ENV_LOG_LEVEL: &str = "LOGLEVEL";

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Process-wide configuration, resolved once in `main` and borrowed from
/// there on.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub project_id: String,
    pub asset_group: String,
    /// Base URL with any trailing `/` trimmed so path joining stays clean.
    pub api_endpoint: String,
    pub data_dir: PathBuf,
    /// Normalized tracing filter directive derived from `LOGLEVEL`.
    pub log_level: String,
}

impl Config {
    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through an arbitrary lookup function.
    ///
    /// The five `NUCLEUS_*` variables are required; a missing or blank value
    /// yields [`ExportError::MissingEnv`] naming the variable. `LOGLEVEL` is
    /// optional and defaults to `warn`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = require(&lookup, ENV_API_KEY)?;
        let project_id = require(&lookup, ENV_PROJECT_ID)?;
        let asset_group = require(&lookup, ENV_PROJECT_GROUP)?;
        let api_endpoint = require(&lookup, ENV_API_ENDPOINT)?
            .trim_end_matches('/')
            .to_string();
        let data_dir = PathBuf::from(require(&lookup, ENV_DATA_FOLDER)?);

        let log_level = lookup(ENV_LOG_LEVEL)
            .map(|raw| normalize_level(&raw))
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            api_key,
            project_id,
            asset_group,
            api_endpoint,
            data_dir,
            log_level,
        })
    }
}

fn require<F>(lookup: &F, name: &'static str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ExportError::MissingEnv { name }.into()),
    }
}

/// Maps `LOGLEVEL` spellings onto tracing directives. `WARNING` is accepted
/// as an alias for `warn`.
fn normalize_level(raw: &str) -> String {
    let lower = raw.trim().to_lowercase();
    if lower == "warning" {
        "warn".to_string()
    } else {
        lower
    }
}
