//! File persistence and serialization configuration

/// Directory path for storing candle cache files
pub const CANDLE_PATH: &str = "candle_data";

/// Base filename for candle cache files (without extension)
pub const CANDLE_FILENAME_WITHOUT_EXT: &str = "candles";

/// Current version of the candle cache serialization format
pub const CANDLE_CACHE_VERSION: f64 = 1.0;

/// Generate symbol-specific cache filename
/// Example: "candles_NSEI_v1.bin"
pub fn candle_cache_filename(symbol: &str) -> String {
    let symbol: String = symbol
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect();
    format!(
        "{}_{}_v{}.bin",
        CANDLE_FILENAME_WITHOUT_EXT, symbol, CANDLE_CACHE_VERSION
    )
}
