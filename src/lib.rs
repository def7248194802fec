#![allow(clippy::collapsible_if)]

// Core modules
pub mod analysis;
pub mod config;
pub mod data;
pub mod domain;
pub mod error;
pub mod models;
pub mod report;
pub mod utils;

// The engine
pub mod engine;

// Re-export commonly used types
pub use analysis::{CompressionZoneDetector, LevelClusterer, SupportResistanceDetector};
pub use config::{ClusterStrategy, DetectorConfig, ZonePriceMode};
pub use domain::{Candle, Zone, ZoneType};
pub use error::{SrError, SrResult};
pub use models::{CandleSeries, SrLevels};

use std::path::PathBuf;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Support & resistance levels from price compression zones", long_about = None)]
pub struct Cli {
    /// Candle files to analyse (.csv, .json or .bin cache)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// JSON detector config; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Bars per compression window
    #[arg(long)]
    pub window: Option<usize>,

    /// Max close spread inside a window (price units)
    #[arg(long)]
    pub compression_threshold: Option<f64>,

    /// Min breakout beyond the zone (price units)
    #[arg(long)]
    pub breakout_threshold: Option<f64>,

    /// Max relative distance for merging levels (0.002 = 0.2%)
    #[arg(long)]
    pub cluster_pct: Option<f64>,

    #[arg(long, value_enum)]
    pub zone_price: Option<ZonePriceMode>,

    #[arg(long, value_enum)]
    pub cluster_strategy: Option<ClusterStrategy>,

    /// Current market price, used to highlight the nearest levels
    #[arg(long)]
    pub current_price: Option<f64>,

    /// Print reports as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// Include the raw (unclustered) zones in the report
    #[arg(long, default_value_t = false)]
    pub zones: bool,
}

impl Cli {
    /// Defaults, then the config file (if any), then individual flags.
    pub fn detector_config(&self) -> anyhow::Result<DetectorConfig> {
        let mut config = match &self.config {
            Some(path) => DetectorConfig::load_from_path(path)?,
            None => DetectorConfig::default(),
        };

        if let Some(window) = self.window {
            config.window = window;
        }
        if let Some(threshold) = self.compression_threshold {
            config.compression_threshold = threshold;
        }
        if let Some(threshold) = self.breakout_threshold {
            config.breakout_threshold = threshold;
        }
        if let Some(pct) = self.cluster_pct {
            config.cluster_pct = pct;
        }
        if let Some(mode) = self.zone_price {
            config.zone_price_mode = mode;
        }
        if let Some(strategy) = self.cluster_strategy {
            config.cluster_strategy = strategy;
        }

        Ok(config)
    }
}
