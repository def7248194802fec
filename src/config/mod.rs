//! Configuration module for the sr-levels crate.

pub mod analysis;

mod debug; // Private: callers go through the crate::config re-exports
pub use debug::{PRINT_CLUSTERING, PRINT_SERDE, PRINT_ZONE_DETECTION};

pub mod demo;
pub mod persistence;

// Re-export commonly used items
pub use analysis::{ANALYSIS, ClusterStrategy, DetectorConfig, ZonePriceMode};
pub use demo::DEMO;
pub use persistence::{
    CANDLE_CACHE_VERSION, CANDLE_FILENAME_WITHOUT_EXT, CANDLE_PATH, candle_cache_filename,
};
