//! Runtime configuration assembled from command-line flags and environment.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;

use crate::cli::GeneratorArgs;
use crate::generator::GeminiConfig;
use crate::utils::{default_log_path, get_api_key};

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini: GeminiConfig,
    /// Explicit log file; `None` means the per-user default
    pub log_file: Option<PathBuf>,
}

impl AppConfig {
    /// Build the configuration. The API key is read from the environment but
    /// not required: a missing key surfaces as a failed retrieval.
    pub fn from_args(args: &GeneratorArgs, log_file: Option<PathBuf>) -> Self {
        Self::with_api_key(args, log_file, get_api_key())
    }

    fn with_api_key(args: &GeneratorArgs, log_file: Option<PathBuf>, api_key: Option<String>) -> Self {
        Self {
            gemini: GeminiConfig {
                api_key,
                model: args.model.clone(),
                base_url: args.base_url.clone(),
                timeout: args.timeout_secs.map(Duration::from_secs),
            },
            log_file,
        }
    }

    /// Where the interactive UI writes its log
    pub fn log_path(&self) -> Result<PathBuf> {
        match &self.log_file {
            Some(path) => Ok(path.clone()),
            None => default_log_path(),
        }
    }
}
