use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variables consulted for the generator credential, in order
pub const API_KEY_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Get the generator API key, if any is configured.
///
/// Absence is not an error here: the first generator call reports it.
pub fn get_api_key() -> Option<String> {
    API_KEY_VARS
        .iter()
        .filter_map(|name| env::var(name).ok())
        .map(|value| value.trim().to_string())
        .find(|value| !value.is_empty())
}

/// Get the default log file path (`<cache dir>/startup-sunsets/startup-sunsets.log`)
pub fn default_log_path() -> Result<PathBuf> {
    let cache = dirs::cache_dir().context("Could not determine a cache directory")?;
    Ok(cache.join("startup-sunsets").join("startup-sunsets.log"))
}
