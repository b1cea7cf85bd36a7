//! Configuration loader
//!
//! Loads the sender configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. If `NYLAS_API_KEY` is set, loads from environment variables only
//! 2. Otherwise falls back to loading from file
//! 3. Probes multiple paths for config files
//! 4. Supports JSON and TOML formats
//!
//! ## Environment Variables
//! - `NYLAS_API_KEY`: API key (required for environment loading)
//! - `NYLAS_API_URL`: API base URL (defaults to the US region)
//! - `NYLAS_GRANT_ID`: Default grant id
//! - `NYLAS_HTTP_TIMEOUT_SECS`: Request timeout in seconds
//! - `NYLAS_HTTP_CONNECT_TIMEOUT_SECS`: Connect timeout in seconds
//! - `NYLAS_USER_AGENT`: User agent sent by the bundled transport
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./nylas.json` or `./nylas.toml` (current working directory)
//! 2. `./config.json` or `./config.toml` (current working directory)
//! 3. The same names in the parent and grandparent directories
//! 4. The same names in the executable's directory, its parent and grandparent
//!
//! Zero timeouts are rejected from either source.

use std::path::{Path, PathBuf};

use nylas_domain::constants::DEFAULT_API_URL;
use nylas_domain::{HttpConfig, NylasConfig, NylasError, PartialCredentials, Result};

use crate::errors::InfraError;

const CONFIG_FILE_NAMES: [&str; 4] = ["nylas.json", "nylas.toml", "config.json", "config.toml"];
const SEARCH_DIRS: [&str; 3] = [".", "..", "../.."];

/// Load configuration with automatic fallback strategy
///
/// Uses environment variables when `NYLAS_API_KEY` is set; errors in the
/// other variables are returned as is. Without the key, falls back to a
/// probed config file.
///
/// # Errors
/// Returns `NylasError::Config` if:
/// - An environment variable is invalid
/// - No config file is found when the API key is absent
/// - File format is invalid
pub fn load() -> Result<NylasConfig> {
    if env_opt("NYLAS_API_KEY").is_none() {
        tracing::debug!("NYLAS_API_KEY not set, trying config file");
        return load_from_file(None);
    }

    let config = load_from_env()?;
    tracing::info!("Configuration loaded from environment variables");
    Ok(config)
}

/// Load configuration from environment variables
///
/// `NYLAS_API_KEY` must be present; everything else has a default.
///
/// # Errors
/// Returns `NylasError::Config` if the API key is missing, a numeric
/// variable cannot be parsed, or a timeout is zero.
pub fn load_from_env() -> Result<NylasConfig> {
    let api_key = env_var("NYLAS_API_KEY")?;
    let api_url = env_opt("NYLAS_API_URL").unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let grant_id = env_opt("NYLAS_GRANT_ID");

    let defaults = HttpConfig::default();
    let timeout_secs = env_u64("NYLAS_HTTP_TIMEOUT_SECS")?.unwrap_or(defaults.timeout_secs);
    let connect_timeout_secs =
        env_u64("NYLAS_HTTP_CONNECT_TIMEOUT_SECS")?.unwrap_or(defaults.connect_timeout_secs);
    let user_agent = env_opt("NYLAS_USER_AGENT").unwrap_or(defaults.user_agent);

    let http = HttpConfig { timeout_secs, connect_timeout_secs, user_agent };
    http.validate()?;

    Ok(NylasConfig {
        credentials: PartialCredentials { api_key: Some(api_key), api_url: Some(api_url), grant_id },
        http,
    })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes multiple locations for config files.
/// Supports both JSON and TOML formats (detected by file extension).
///
/// # Errors
/// Returns `NylasError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid or a timeout is zero
pub fn load_from_file(path: Option<PathBuf>) -> Result<NylasConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(NylasError::Config(format!("Config file not found: {}", p.display())));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            NylasError::Config("No config file found in any of the standard locations".to_string())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| NylasError::Config(format!("Failed to read config file: {}", e)))?;

    let config = parse_config(&contents, &config_path)?;
    config.http.validate()?;
    Ok(config)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`).
fn parse_config(contents: &str, path: &Path) -> Result<NylasConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents).map_err(|e| InfraError::from(e).into()),
        "json" => serde_json::from_str(contents)
            .map_err(|e| NylasError::Config(format!("Invalid JSON format: {}", e))),
        _ => Err(NylasError::Config(format!("Unsupported config format: {}", extension))),
    }
}

/// Probe multiple paths for configuration files
///
/// Searches the current working directory, its two parents, and the same
/// three levels relative to the executable.
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut roots = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        roots.push(cwd);
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            roots.push(exe_dir.to_path_buf());
        }
    }

    roots
        .iter()
        .flat_map(|root| {
            SEARCH_DIRS.iter().flat_map(move |dir| {
                CONFIG_FILE_NAMES.iter().map(move |name| root.join(dir).join(name))
            })
        })
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `NylasError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| NylasError::Config(format!("Missing required environment variable: {}", key)))
}

/// Optional environment variable; unset and empty are both `None`.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.is_empty())
}

fn env_u64(key: &str) -> Result<Option<u64>> {
    env_opt(key)
        .map(|raw| {
            raw.trim()
                .parse::<u64>()
                .map_err(|e| NylasError::Config(format!("Invalid value for {}: {}", key, e)))
        })
        .transpose()
}
