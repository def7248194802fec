use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::data::candle_source::CandleSource;
use crate::domain::Candle;

/// Reads a JSON array of `{open, high, low, close}` objects, oldest first.
pub struct JsonVersion {
    pub path: PathBuf,
}

impl CandleSource for JsonVersion {
    fn signature(&self) -> &'static str {
        "JSON File"
    }

    fn load_candles(&self) -> Result<Vec<Candle>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open JSON file: {:?}", self.path))?;
        let candles: Vec<Candle> = serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Failed to parse candles from {:?}", self.path))?;

        for (idx, candle) in candles.iter().enumerate() {
            candle
                .validate()
                .with_context(|| format!("{:?} candle {}", self.path, idx))?;
        }

        Ok(candles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn load(contents: &str) -> Result<Vec<Candle>> {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        JsonVersion {
            path: file.path().to_path_buf(),
        }
        .load_candles()
    }

    #[test]
    fn test_reads_candle_array() {
        let candles = load(
            r#"[
                {"open": 100, "high": 110, "low": 95, "close": 105},
                {"open": 105, "high": 112, "low": 102, "close": 108}
            ]"#,
        )
        .unwrap();
        assert_eq!(candles.len(), 2);
        assert_eq!(candles[1], Candle::new(105.0, 112.0, 102.0, 108.0));
    }

    #[test]
    fn test_rejects_invalid_candle() {
        let err = load(r#"[{"open": 100, "high": 90, "low": 95, "close": 92}]"#).unwrap_err();
        assert!(err.to_string().contains("candle 0"));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(load("{not json").is_err());
    }
}
