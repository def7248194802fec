use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::config::{CANDLE_CACHE_VERSION, CANDLE_PATH, candle_cache_filename};
use crate::domain::Candle;
use crate::utils::time_utils::utc_now_as_timestamp_ms;

/// Serialized candle cache, written by `make_demo_cache` and readable by the CLI.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CandleCache {
    pub version: f64,
    pub timestamp_ms: i64,
    pub symbol: String,
    pub candles: Vec<Candle>,
}

impl CandleCache {
    pub fn new(symbol: impl Into<String>, candles: Vec<Candle>) -> Self {
        Self {
            version: CANDLE_CACHE_VERSION,
            timestamp_ms: utc_now_as_timestamp_ms(),
            symbol: symbol.into(),
            candles,
        }
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let file = File::open(path).context(format!("Failed to open cache file: {:?}", path))?;
        let mut reader = BufReader::new(file);
        let cache: Self = bincode::deserialize_from(&mut reader)
            .context(format!("Failed to deserialize cache: {:?}", path))?;

        if cache.version != CANDLE_CACHE_VERSION {
            bail!(
                "Cache {:?} has version {}, expected {}",
                path,
                cache.version,
                CANDLE_CACHE_VERSION
            );
        }
        Ok(cache)
    }

    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .context(format!("Failed to create directory: {}", parent.display()))?;
        }
        let file =
            File::create(path).context(format!("Failed to create file: {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        bincode::serialize_into(&mut writer, self)
            .context(format!("Failed to serialize cache to: {}", path.display()))
    }

    pub fn default_cache_path(symbol: &str) -> PathBuf {
        PathBuf::from(CANDLE_PATH).join(candle_cache_filename(symbol))
    }
}
