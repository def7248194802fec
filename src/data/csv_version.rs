use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use csv::{Reader, StringRecord};

use crate::data::candle_source::CandleSource;
use crate::domain::Candle;

/// Reads a CSV export (e.g. from yfinance) with `Open`, `High`, `Low`, `Close`
/// columns. Header matching ignores case; any other columns are ignored.
pub struct CsvVersion {
    pub path: PathBuf,
}

/// Column positions of the four price fields within a record
#[derive(Debug, PartialEq)]
struct OhlcColumns {
    open: usize,
    high: usize,
    low: usize,
    close: usize,
}

impl OhlcColumns {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or_else(|| anyhow!("Missing '{}' column in headers {:?}", name, headers))
        };
        Ok(Self {
            open: find("open")?,
            high: find("high")?,
            low: find("low")?,
            close: find("close")?,
        })
    }

    fn parse(&self, record: &StringRecord) -> Result<Candle> {
        let field = |idx: usize| -> Result<f64> {
            let raw = record
                .get(idx)
                .ok_or_else(|| anyhow!("Record has no column {}", idx))?;
            raw.trim()
                .parse::<f64>()
                .with_context(|| format!("Invalid price '{}'", raw))
        };
        let candle = Candle::try_new(
            field(self.open)?,
            field(self.high)?,
            field(self.low)?,
            field(self.close)?,
        )?;
        Ok(candle)
    }
}

impl CandleSource for CsvVersion {
    fn signature(&self) -> &'static str {
        "CSV File"
    }

    fn load_candles(&self) -> Result<Vec<Candle>> {
        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open CSV file: {:?}", self.path))?;
        let mut rdr = Reader::from_reader(file);
        let columns = OhlcColumns::from_headers(rdr.headers()?)?;

        let mut candles = Vec::new();
        for (row, result) in rdr.records().enumerate() {
            let record = result?;
            // Row numbers are 1-based and skip the header line
            let candle = columns
                .parse(&record)
                .with_context(|| format!("{:?} row {}", self.path, row + 2))?;
            candles.push(candle);
        }

        Ok(candles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_reads_yfinance_style_export() {
        let file = write_csv(
            "Datetime,Open,High,Low,Close,Volume\n\
             2024-01-02 09:15:00+05:30,21700.5,21755.0,21690.1,21740.2,0\n\
             2024-01-02 09:45:00+05:30,21740.2,21760.0,21720.0,21725.3,0\n",
        );

        let candles = CsvVersion {
            path: file.path().to_path_buf(),
        }
        .load_candles()
        .unwrap();

        assert_eq!(candles.len(), 2);
        assert_eq!(candles[0], Candle::new(21700.5, 21755.0, 21690.1, 21740.2));
        assert_eq!(candles[1].close, 21725.3);
    }

    #[test]
    fn test_column_order_and_case_do_not_matter() {
        let file = write_csv("close,low,HIGH,open\n105,95,110,100\n");
        let candles = CsvVersion {
            path: file.path().to_path_buf(),
        }
        .load_candles()
        .unwrap();
        assert_eq!(candles, vec![Candle::new(100.0, 110.0, 95.0, 105.0)]);
    }

    #[test]
    fn test_missing_column_is_an_error() {
        let file = write_csv("Open,High,Low\n1,2,0.5\n");
        let err = CsvVersion {
            path: file.path().to_path_buf(),
        }
        .load_candles()
        .unwrap_err();
        assert!(err.to_string().contains("Missing 'close' column"));
    }

    #[test]
    fn test_bad_row_reports_row_number() {
        let file = write_csv("Open,High,Low,Close\n100,110,95,105\n100,110,95,abc\n");
        let err = CsvVersion {
            path: file.path().to_path_buf(),
        }
        .load_candles()
        .unwrap_err();
        assert!(err.to_string().contains("row 3"));
    }

    #[test]
    fn test_inconsistent_candle_is_an_error() {
        let file = write_csv("Open,High,Low,Close\n100,110,95,120\n");
        assert!(
            CsvVersion {
                path: file.path().to_path_buf(),
            }
            .load_candles()
            .is_err()
        );
    }
}
