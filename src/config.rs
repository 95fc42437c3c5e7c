//! Configuration file support for npm-registry.
//!
//! Provides YAML-based configuration through `npm-registry.config.yml` files,
//! environment overrides, and the validated [`Settings`] the binary runs with.

use anyhow::Context;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::{debug, warn};

use crate::application::dto::TransformRequest;
use crate::dataset::contract::DEFAULT_MIN_ROWS;
use crate::registry_ingest::domain::ingest_plan::{DEFAULT_SEARCH_URL, MAX_PAGE_SIZE};
use crate::registry_ingest::domain::{IngestPlan, RankingWeights};
use crate::registry_ingest::policies::{BackoffPolicy, RateLimitPolicy, RetryPolicy};
use crate::shared::error::RegistryError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "npm-registry.config.yml";

/// Env var naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "NPM_REGISTRY_CONFIG";

/// Env var overriding `data_dir`
pub const DATA_DIR_ENV: &str = "NPM_REGISTRY_DATA_DIR";

const DEFAULT_DATA_DIR: &str = "data";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub data_dir: Option<PathBuf>,
    pub search_url: Option<String>,
    pub target_count: Option<usize>,
    pub page_size: Option<u32>,
    pub search_terms: Option<Vec<String>>,
    pub saturation_pages: Option<u32>,
    pub page_delay_ms: Option<u64>,
    pub weights: Option<WeightsConfig>,
    pub rate_limit: Option<RateLimitConfig>,
    pub retry: Option<RetryConfig>,
    pub min_rows: Option<usize>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Search ranking weights; missing entries keep their defaults.
#[derive(Debug, Deserialize, Default)]
pub struct WeightsConfig {
    pub quality: Option<f64>,
    pub popularity: Option<f64>,
    pub maintenance: Option<f64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RateLimitConfig {
    pub max_calls: Option<u32>,
    pub period_secs: Option<u64>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RetryConfig {
    pub max_attempts: Option<u32>,
    pub multiplier: Option<f64>,
    pub min_delay_secs: Option<u64>,
    pub max_delay_secs: Option<u64>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    // An empty file is a valid, empty config.
    if content.trim().is_empty() {
        return Ok(ConfigFile::default());
    }

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        warn!(field = %key, "unknown config field will be ignored");
    }
}

/// Fully resolved run settings
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub search_url: String,
    pub plan: IngestPlan,
    pub rate_limit: RateLimitPolicy,
    pub retry: RetryPolicy,
    pub transform: TransformRequest,
}

impl Settings {
    /// Resolves settings from the process environment and `cwd`.
    ///
    /// `NPM_REGISTRY_CONFIG` names the config file (which must then exist);
    /// otherwise `npm-registry.config.yml` in `cwd` is used when present.
    pub fn load(cwd: &Path) -> Result<Self> {
        let config_path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
        let data_dir = std::env::var_os(DATA_DIR_ENV).map(PathBuf::from);
        Self::resolve(cwd, config_path.as_deref(), data_dir)
    }

    /// Same as [`Settings::load`] with the environment passed in explicitly.
    pub fn resolve(
        cwd: &Path,
        config_path: Option<&Path>,
        data_dir_override: Option<PathBuf>,
    ) -> Result<Self> {
        let config = match config_path {
            Some(path) => {
                debug!(path = %path.display(), "loading config from {}", CONFIG_PATH_ENV);
                load_config_from_path(path)?
            }
            None => discover_config(cwd)?.unwrap_or_default(),
        };
        Self::from_config(config, data_dir_override)
    }

    /// Applies defaults, the data directory override and validation.
    pub fn from_config(config: ConfigFile, data_dir_override: Option<PathBuf>) -> Result<Self> {
        let defaults = IngestPlan::default();

        let target_count = config.target_count.unwrap_or(defaults.target_count);
        if target_count == 0 {
            return Err(invalid("target_count must be at least 1"));
        }

        let page_size = config.page_size.unwrap_or(defaults.page_size);
        if page_size == 0 || page_size > MAX_PAGE_SIZE {
            return Err(invalid(format!(
                "page_size must be between 1 and {}, got {}",
                MAX_PAGE_SIZE, page_size
            )));
        }

        let search_terms = config.search_terms.unwrap_or(defaults.search_terms);
        if search_terms.is_empty() {
            return Err(invalid("search_terms must name at least one term"));
        }
        if search_terms.iter().any(|term| term.trim().is_empty()) {
            return Err(invalid("search_terms must not contain empty terms"));
        }

        let saturation_pages = config.saturation_pages.unwrap_or(defaults.saturation_pages);
        if saturation_pages == 0 {
            return Err(invalid("saturation_pages must be at least 1"));
        }

        let weights = resolve_weights(config.weights.unwrap_or_default(), defaults.weights)?;
        let rate_limit = resolve_rate_limit(config.rate_limit.unwrap_or_default())?;
        let retry = resolve_retry(config.retry.unwrap_or_default())?;

        let search_url = config
            .search_url
            .unwrap_or_else(|| DEFAULT_SEARCH_URL.to_string());

        let data_dir = data_dir_override
            .or(config.data_dir)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let plan = IngestPlan {
            search_terms,
            target_count,
            page_size,
            saturation_pages,
            page_delay: config
                .page_delay_ms
                .map(Duration::from_millis)
                .unwrap_or(defaults.page_delay),
            weights,
            ..defaults
        };

        let transform = TransformRequest {
            min_rows: config.min_rows.unwrap_or(DEFAULT_MIN_ROWS),
            raw_slug: plan.raw_slug.clone(),
        };

        Ok(Self {
            data_dir,
            search_url,
            plan,
            rate_limit,
            retry,
            transform,
        })
    }

    /// Checkpoint directory
    pub fn state_dir(&self) -> PathBuf {
        self.data_dir.join("state")
    }

    /// Raw artifact directory
    pub fn raw_dir(&self) -> PathBuf {
        self.data_dir.join("raw")
    }

    /// Uploaded and published datasets
    pub fn datasets_dir(&self) -> PathBuf {
        self.data_dir.join("datasets")
    }
}

fn invalid(message: impl Into<String>) -> anyhow::Error {
    RegistryError::Validation {
        message: format!("Invalid config: {}", message.into()),
    }
    .into()
}

fn resolve_weights(config: WeightsConfig, defaults: RankingWeights) -> Result<RankingWeights> {
    let weights = RankingWeights {
        quality: config.quality.unwrap_or(defaults.quality),
        popularity: config.popularity.unwrap_or(defaults.popularity),
        maintenance: config.maintenance.unwrap_or(defaults.maintenance),
    };

    for (name, value) in [
        ("quality", weights.quality),
        ("popularity", weights.popularity),
        ("maintenance", weights.maintenance),
    ] {
        if !(0.0..=1.0).contains(&value) {
            return Err(invalid(format!(
                "weights.{} must be between 0.0 and 1.0, got {}",
                name, value
            )));
        }
    }

    Ok(weights)
}

fn resolve_rate_limit(config: RateLimitConfig) -> Result<RateLimitPolicy> {
    let defaults = RateLimitPolicy::default();
    let max_calls = config.max_calls.unwrap_or(defaults.max_calls);
    let period = config
        .period_secs
        .map(Duration::from_secs)
        .unwrap_or(defaults.period);

    RateLimitPolicy::new(max_calls, period).map_err(|e| invalid(format!("rate_limit: {}", e)))
}

fn resolve_retry(config: RetryConfig) -> Result<RetryPolicy> {
    let defaults = RetryPolicy::default();
    let backoff_defaults = defaults.backoff();

    let multiplier = config.multiplier.unwrap_or(backoff_defaults.multiplier());
    let min = config
        .min_delay_secs
        .map(Duration::from_secs)
        .unwrap_or(backoff_defaults.min());
    let max = config
        .max_delay_secs
        .map(Duration::from_secs)
        .unwrap_or(backoff_defaults.max());

    let backoff = BackoffPolicy::new(multiplier, min, max)
        .map_err(|e| invalid(format!("retry: {}", e)))?;
    RetryPolicy::new(
        config.max_attempts.unwrap_or(defaults.max_attempts()),
        backoff,
    )
    .map_err(|e| invalid(format!("retry: {}", e)))
}
