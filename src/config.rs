//! Configuration loading
//!
//! Reads `config.toml` from the platform config directory (or an explicit
//! path). A broken config never stops the app from starting: defaults are
//! used and a warning is surfaced in the status line instead.

mod types;

use std::fs;
use std::path::{Path, PathBuf};

use reqwest::Url;

use crate::error::BookfindError;

pub use types::{Config, DEFAULT_TIMEOUT_MS, SuggestConfig};

/// Outcome of loading the config file
#[derive(Debug, Clone, Default)]
pub struct ConfigResult {
    pub config: Config,
    /// Set when the file existed but could not be used
    pub warning: Option<String>,
}

/// Default location: `<config_dir>/bookfind/config.toml`
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("bookfind").join("config.toml"))
}

/// Load the config from `path`, or from the default location when `None`
pub fn load_config(path: Option<&Path>) -> ConfigResult {
    match path {
        Some(path) => load_config_from_path(path),
        None => match default_config_path() {
            Some(path) => load_config_from_path(&path),
            None => ConfigResult::default(),
        },
    }
}

/// Load the config from an explicit path
///
/// A missing file is not an error. Read or parse failures fall back to the
/// default config and report a warning; so does a zero `timeout_ms`, which is
/// replaced by the default.
pub fn load_config_from_path(path: &Path) -> ConfigResult {
    let mut config = match read_config(path) {
        Ok(config) => config,
        Err(e) => return warn_with(Config::default(), e),
    };

    // A zero timeout would fail every lookup before it is sent
    if config.suggest.timeout_ms == 0 {
        config.suggest.timeout_ms = DEFAULT_TIMEOUT_MS;
        let e = BookfindError::Config(format!(
            "{}: timeout_ms must be greater than 0, using {}",
            path.display(),
            DEFAULT_TIMEOUT_MS
        ));
        return warn_with(config, e);
    }

    ConfigResult {
        config,
        warning: None,
    }
}

fn warn_with(config: Config, error: BookfindError) -> ConfigResult {
    let warning = error.to_string();
    log::warn!("{}", warning);
    ConfigResult {
        config,
        warning: Some(warning),
    }
}

fn read_config(path: &Path) -> Result<Config, BookfindError> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)
        .map_err(|e| BookfindError::Io(format!("could not read {}: {}", path.display(), e)))?;

    toml::from_str::<Config>(&content)
        .map_err(|e| BookfindError::Config(format!("{}: {}", path.display(), e.message())))
}

/// Resolve the suggestion endpoint
///
/// A command-line value wins over the config file. The result must be an
/// absolute http(s) URL.
pub fn resolve_endpoint(
    cli_endpoint: Option<&str>,
    config: &Config,
) -> Result<Url, BookfindError> {
    let raw = cli_endpoint
        .or(config.suggest.endpoint.as_deref())
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .ok_or(BookfindError::MissingEndpoint)?;

    let url = Url::parse(raw).map_err(|e| BookfindError::InvalidEndpoint {
        endpoint: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(BookfindError::InvalidEndpoint {
            endpoint: raw.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;
