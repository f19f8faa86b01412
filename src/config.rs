// =============================================================================
// Generator configuration
// =============================================================================
//
// Tunable knobs for the synthetic data source, loadable from a JSON file so
// demo deployments can reshape the simulated market without a rebuild.
//
// Persistence uses an atomic tmp + rename pattern to prevent corruption on
// crash.  All fields carry serde defaults so that adding new fields never
// breaks loading an older config file.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_volatility() -> f64 {
    0.015
}

fn default_price_min() -> u32 {
    50
}

fn default_price_max() -> u32 {
    500
}

fn default_volume_min() -> u64 {
    100
}

fn default_volume_max() -> u64 {
    10_000
}

fn default_event_days() -> usize {
    5
}

// =============================================================================
// GeneratorConfig
// =============================================================================

/// Tunable parameters for the synthetic OHLCV generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Standard deviation of the daily percentage return draw.
    #[serde(default = "default_volatility")]
    pub volatility: f64,

    /// Lower bound (inclusive) of the uniform starting-price draw.
    #[serde(default = "default_price_min")]
    pub price_min: u32,

    /// Upper bound (exclusive) of the uniform starting-price draw.
    #[serde(default = "default_price_max")]
    pub price_max: u32,

    /// Lower bound (inclusive) of the uniform daily volume draw.
    #[serde(default = "default_volume_min")]
    pub volume_min: u64,

    /// Upper bound (exclusive) of the uniform daily volume draw.
    #[serde(default = "default_volume_max")]
    pub volume_max: u64,

    /// Number of high-volatility event days injected per series.
    #[serde(default = "default_event_days")]
    pub event_days: usize,

    /// Fixed final calendar day of every generated series.  `None` means
    /// "today" (UTC); tests pin this for reproducible date indices.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            volatility: default_volatility(),
            price_min: default_price_min(),
            price_max: default_price_max(),
            volume_min: default_volume_min(),
            volume_max: default_volume_max(),
            event_days: default_event_days(),
            end_date: None,
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a JSON file at `path`.
    ///
    /// If the file does not exist, returns an error so the caller can fall
    /// back to defaults with a warning.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read generator config from {}", path.display()))?;

        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse generator config from {}", path.display()))?;

        info!(
            path = %path.display(),
            volatility = config.volatility,
            "generator config loaded"
        );

        Ok(config)
    }

    /// Persist the current configuration to `path` using an atomic write
    /// (write to `.tmp`, then rename).
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        let content = serde_json::to_string_pretty(self)
            .context("failed to serialise generator config to JSON")?;

        let tmp_path = path.with_extension("json.tmp");

        std::fs::write(&tmp_path, &content)
            .with_context(|| format!("failed to write tmp config to {}", tmp_path.display()))?;

        std::fs::rename(&tmp_path, path)
            .with_context(|| format!("failed to rename tmp config to {}", path.display()))?;

        info!(path = %path.display(), "generator config saved (atomic)");
        Ok(())
    }
}
