use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow, bail};

use crate::config::PRINT_SERDE;
use crate::data::cache_file::CandleCache;
use crate::data::csv_version::CsvVersion;
use crate::data::json_version::JsonVersion;
use crate::domain::Candle;
use crate::utils::time_utils::{epoch_ms_to_utc, how_many_seconds_ago};

pub trait CandleSource {
    // Either load the candles (oldest first) OR return an anyhow::error
    fn load_candles(&self) -> Result<Vec<Candle>>;

    /// A unique identifier for this implementation (so that afterwards we know which one we used).
    fn signature(&self) -> &'static str;
}

pub struct CacheVersion {
    pub path: PathBuf,
}

impl CandleSource for CacheVersion {
    fn signature(&self) -> &'static str {
        "Bincode Cache"
    }

    fn load_candles(&self) -> Result<Vec<Candle>> {
        let cache = CandleCache::load_from_path(&self.path)?;
        if PRINT_SERDE {
            log::info!(
                "Cache {:?} holds {} candles for {} (written {}, {}s ago)",
                self.path,
                cache.candles.len(),
                cache.symbol,
                epoch_ms_to_utc(cache.timestamp_ms),
                how_many_seconds_ago(cache.timestamp_ms)
            );
        }

        for (idx, candle) in cache.candles.iter().enumerate() {
            candle
                .validate()
                .with_context(|| format!("{:?} candle {}", self.path, idx))?;
        }

        Ok(cache.candles)
    }
}

/// Picks a source from the file extension (`csv`, `json` or `bin`).
pub fn source_for_path(path: &Path) -> Result<Box<dyn CandleSource + Send + Sync>> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .map(|s| s.to_ascii_lowercase())
        .ok_or_else(|| anyhow!("Candle file {:?} has no extension", path))?;

    let path = path.to_path_buf();
    match extension.as_str() {
        "csv" => Ok(Box::new(CsvVersion { path })),
        "json" => Ok(Box::new(JsonVersion { path })),
        "bin" => Ok(Box::new(CacheVersion { path })),
        other => bail!("Unsupported candle file extension '{}' for {:?}", other, path),
    }
}

/// Loads candles from `path`, choosing the parser by extension.
pub fn load_candles(path: &Path) -> Result<Vec<Candle>> {
    let source = source_for_path(path)?;
    let candles = source.load_candles()?;
    log::info!(
        "Loaded {} candles from {:?} ({})",
        candles.len(),
        path,
        source.signature()
    );
    Ok(candles)
}
