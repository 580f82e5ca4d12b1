//! Configuration file support for reputation-recon.
//!
//! Provides YAML-based configuration through `reputation-recon.config.yml`
//! files, and the merge of file values with command-line arguments into the
//! effective [`Settings`] (CLI > config file > defaults).

use anyhow::{bail, Context};
use reputation_recon::adapters::outbound::network::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use reputation_recon::application::dto::OutputFormat;
use reputation_recon::assessment::policies::HISTORY_DISPLAY_LIMIT;
use reputation_recon::assessment::domain::MAX_TRUST_SCORE;
use reputation_recon::shared::error::ReconError;
use reputation_recon::shared::security::{validate_regular_file, MAX_CONFIG_FILE_SIZE};
use reputation_recon::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::cli::Args;

pub const CONFIG_FILENAME: &str = "reputation-recon.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub history_limit: Option<usize>,
    pub format: Option<String>,
    pub min_score: Option<u32>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    validate_regular_file(path, "config file", MAX_CONFIG_FILE_SIZE).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is a regular file.",
            path.display()
        )
    })?;

    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file parses as YAML null
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if std::fs::symlink_metadata(&config_path).is_err() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref format) = config.format {
        if let Err(e) = format.parse::<OutputFormat>() {
            bail!(
                "Invalid config: format: {}\n\n💡 Hint: Use one of: text, markdown, json.",
                e
            );
        }
    }
    if config.timeout_secs == Some(0) {
        bail!("Invalid config: timeout_secs must be greater than 0.\n\n💡 Hint: The default is {} seconds.", DEFAULT_TIMEOUT_SECS);
    }
    if let Some(history_limit) = config.history_limit {
        if history_limit == 0 || history_limit > HISTORY_DISPLAY_LIMIT {
            bail!(
                "Invalid config: history_limit must be between 1 and {} (got {}).\n\n💡 Hint: At most the {} most recent assessments are listed.",
                HISTORY_DISPLAY_LIMIT,
                history_limit,
                HISTORY_DISPLAY_LIMIT
            );
        }
    }
    if let Some(min_score) = config.min_score {
        if min_score > MAX_TRUST_SCORE {
            bail!(
                "Invalid config: min_score must be between 0 and {} (got {}).",
                MAX_TRUST_SCORE,
                min_score
            );
        }
    }
    if let Some(ref api_url) = config.api_url {
        if api_url.trim().is_empty() {
            bail!("Invalid config: api_url must not be empty.\n\n💡 Hint: Remove the key to use {}.", DEFAULT_BASE_URL);
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}

/// Effective settings for one run
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub api_url: String,
    pub timeout: Duration,
    pub history_limit: usize,
    pub format: OutputFormat,
    pub min_score: Option<u32>,
    pub output: Option<PathBuf>,
}

impl Settings {
    /// Merges command-line arguments over config file values over defaults
    ///
    /// # Errors
    /// Returns a `ReconError::Validation` for out-of-range argument values
    pub fn resolve(args: &Args, config: Option<&ConfigFile>) -> Result<Self> {
        if args.timeout == Some(0) {
            return Err(ReconError::Validation {
                message: "--timeout must be greater than 0".to_string(),
            }
            .into());
        }
        if let Some(min_score) = args.min_score {
            if min_score > MAX_TRUST_SCORE {
                return Err(ReconError::Validation {
                    message: format!(
                        "--min-score must be between 0 and {} (got {})",
                        MAX_TRUST_SCORE, min_score
                    ),
                }
                .into());
            }
        }
        if args.select == Some(0) {
            return Err(ReconError::Validation {
                message: "--select is 1-based; use 1 for the most recent assessment".to_string(),
            }
            .into());
        }

        let config_format = config
            .and_then(|c| c.format.as_deref())
            .map(str::parse::<OutputFormat>)
            .transpose()
            .map_err(|e| anyhow::anyhow!(e))?;

        Ok(Self {
            api_url: args
                .api_url
                .clone()
                .or_else(|| config.and_then(|c| c.api_url.clone()))
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: Duration::from_secs(
                args.timeout
                    .or_else(|| config.and_then(|c| c.timeout_secs))
                    .unwrap_or(DEFAULT_TIMEOUT_SECS),
            ),
            history_limit: config
                .and_then(|c| c.history_limit)
                .unwrap_or(HISTORY_DISPLAY_LIMIT),
            format: args.format.or(config_format).unwrap_or_default(),
            min_score: args.min_score.or_else(|| config.and_then(|c| c.min_score)),
            output: args.output.clone(),
        })
    }
}
