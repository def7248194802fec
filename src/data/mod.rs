// Candle file loading and caching
pub mod cache_file;
pub mod candle_source;
pub mod csv_version;
pub mod demo;
pub mod json_version;

// Re-export commonly used types
pub use cache_file::CandleCache;
pub use candle_source::{CandleSource, load_candles, source_for_path};
