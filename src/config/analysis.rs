//! Analysis and computation configuration

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::error::{SrError, SrResult};

/// Settings for compression zone scanning
pub struct CompressionSettings {
    // Consecutive bars forming one candidate window
    pub window: usize,
    // Max spread of window closes (price units) for the window to count as compressed
    pub compression_threshold: f64,
    // Min excursion beyond the zone (price units) within the lookahead to classify it
    pub breakout_threshold: f64,
    // Bars after the window inspected for the breakout
    pub lookahead: usize,
}

/// Settings for merging nearby zone prices
pub struct ClusterSettings {
    // Max relative distance (fractional) for two prices to share a cluster
    // 0.002 corresponds to 0.2%
    pub cluster_pct: f64,
}

/// Settings for the final level selection
pub struct SelectionSettings {
    // Only the most recent `min_candles` bars are analysed, and fewer is an error
    pub min_candles: usize,
    // Levels kept per side after clustering
    pub top_n: usize,
}

/// The Master Analysis Configuration
pub struct AnalysisConfig {
    pub compression: CompressionSettings,
    pub cluster: ClusterSettings,
    pub selection: SelectionSettings,
}

pub const ANALYSIS: AnalysisConfig = AnalysisConfig {
    compression: CompressionSettings {
        window: 5,
        compression_threshold: 50.0,
        breakout_threshold: 70.0,
        lookahead: 10,
    },

    cluster: ClusterSettings { cluster_pct: 0.002 },

    selection: SelectionSettings {
        min_candles: 240,
        top_n: 3,
    },
};

/// How a compression zone's representative price is derived.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ZonePriceMode {
    /// Support at the window low, resistance at the window high; breakouts measured on wicks.
    #[default]
    Extremes,
    /// Zone price is the mean window close; breakouts measured on lookahead closes.
    MeanClose,
}

/// Membership test used when merging zone prices.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ClusterStrategy {
    /// Compare against each cluster's first (lowest) member. Order sensitive.
    #[default]
    FirstMember,
    /// Compare against each cluster's running mean.
    Centroid,
}

/// Runtime configuration for a detector instance. Immutable once handed to a detector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    pub window: usize,
    pub compression_threshold: f64,
    pub breakout_threshold: f64,
    pub lookahead: usize,
    pub cluster_pct: f64,
    pub min_candles: usize,
    pub top_n: usize,
    pub zone_price_mode: ZonePriceMode,
    pub cluster_strategy: ClusterStrategy,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            window: ANALYSIS.compression.window,
            compression_threshold: ANALYSIS.compression.compression_threshold,
            breakout_threshold: ANALYSIS.compression.breakout_threshold,
            lookahead: ANALYSIS.compression.lookahead,
            cluster_pct: ANALYSIS.cluster.cluster_pct,
            min_candles: ANALYSIS.selection.min_candles,
            top_n: ANALYSIS.selection.top_n,
            zone_price_mode: ZonePriceMode::default(),
            cluster_strategy: ClusterStrategy::default(),
        }
    }
}

impl DetectorConfig {
    /// Reads a JSON config file. Missing fields fall back to the defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> SrResult<()> {
        let invalid = |msg: String| Err(SrError::InvalidConfig(msg));

        if self.window == 0 {
            return invalid("window must be at least 1".to_string());
        }
        if self.lookahead == 0 {
            return invalid("lookahead must be at least 1".to_string());
        }
        if self.compression_threshold.is_nan() || self.compression_threshold < 0.0 {
            return invalid(format!(
                "compression_threshold must be >= 0, got {}",
                self.compression_threshold
            ));
        }
        if self.breakout_threshold.is_nan() || self.breakout_threshold < 0.0 {
            return invalid(format!(
                "breakout_threshold must be >= 0, got {}",
                self.breakout_threshold
            ));
        }
        if self.cluster_pct.is_nan() || self.cluster_pct <= 0.0 {
            return invalid(format!("cluster_pct must be > 0, got {}", self.cluster_pct));
        }
        if self.min_candles < self.window + self.lookahead {
            return invalid(format!(
                "min_candles ({}) must cover window + lookahead ({})",
                self.min_candles,
                self.window + self.lookahead
            ));
        }
        Ok(())
    }
}
