use std::time::Instant;

use anyhow::Result;

use super::messages::{FileReport, JobRequest, JobResult};
use crate::analysis::SupportResistanceDetector;
use crate::data::load_candles;

pub fn run_job(detector: &SupportResistanceDetector, req: JobRequest) -> JobResult {
    let start = Instant::now();

    // 1. Run the heavy calculation (Pure function apart from the file read)
    let result = analyse_file(detector, &req);

    let elapsed = start.elapsed().as_millis();
    if let Err(e) = &result {
        log::error!("⚠️  Failed to analyse {:?}: {:#}", req.path, e);
    }

    JobResult {
        path: req.path,
        duration_ms: elapsed,
        result,
    }
}

fn analyse_file(detector: &SupportResistanceDetector, req: &JobRequest) -> Result<FileReport> {
    let candles = load_candles(&req.path)?;

    let mut zones = detector.detect_zones(&candles)?;
    let levels = detector.levels_from_zones(&zones)?;
    if !req.include_zones {
        zones.clear();
    }

    let (nearest_support, nearest_resistance) = match req.current_price {
        Some(price) => (
            levels.nearest_support(price),
            levels.nearest_resistance(price),
        ),
        None => (None, None),
    };

    Ok(FileReport {
        path: req.path.clone(),
        candle_count: candles.len(),
        levels,
        current_price: req.current_price,
        nearest_support,
        nearest_resistance,
        zones,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::CandleCache;
    use crate::domain::Candle;
    use crate::error::SrError;

    fn write_cache(dir: &std::path::Path, candles: Vec<Candle>) -> std::path::PathBuf {
        let path = dir.join("series.bin");
        CandleCache::new("TEST", candles).save_to_path(&path).unwrap();
        path
    }

    #[test]
    fn test_short_file_reports_insufficient_data() {
        let dir = tempfile::tempdir().unwrap();
        let candles = vec![Candle::new(100.0, 101.0, 99.0, 100.0); 10];
        let path = write_cache(dir.path(), candles);

        let result = run_job(
            &SupportResistanceDetector::default(),
            JobRequest {
                path,
                current_price: None,
                include_zones: false,
            },
        );

        let err = result.result.unwrap_err();
        assert_eq!(
            err.downcast_ref::<SrError>(),
            Some(&SrError::InsufficientData {
                available: 10,
                required: 240
            })
        );
    }

    #[test]
    fn test_report_includes_nearest_levels_and_zones() {
        let dir = tempfile::tempdir().unwrap();
        let mut candles = vec![Candle::new(1000.0, 1002.0, 998.0, 1000.0); 240];
        for candle in candles.iter_mut().skip(200).take(5) {
            candle.high = 1200.0;
        }
        let path = write_cache(dir.path(), candles);

        let result = run_job(
            &SupportResistanceDetector::default(),
            JobRequest {
                path: path.clone(),
                current_price: Some(1100.0),
                include_zones: true,
            },
        );
        let report = result.result.unwrap();

        assert_eq!(report.path, path);
        assert_eq!(report.candle_count, 240);
        assert_eq!(report.levels.support, vec![998.0]);
        assert_eq!(report.nearest_support, Some(998.0));
        assert_eq!(report.nearest_resistance, None);
        assert!(!report.zones.is_empty());
    }

    #[test]
    fn test_zones_flag_does_not_change_levels() {
        let dir = tempfile::tempdir().unwrap();
        let mut candles = vec![Candle::new(1000.0, 1002.0, 998.0, 1000.0); 240];
        for candle in candles.iter_mut().skip(120).take(5) {
            candle.low = 800.0;
        }
        let path = write_cache(dir.path(), candles);

        let run = |include_zones| {
            run_job(
                &SupportResistanceDetector::default(),
                JobRequest {
                    path: path.clone(),
                    current_price: None,
                    include_zones,
                },
            )
            .result
            .unwrap()
        };
        let with_zones = run(true);
        let without_zones = run(false);

        assert_eq!(with_zones.levels, without_zones.levels);
        assert_eq!(with_zones.levels.resistance, vec![1002.0]);
        assert!(!with_zones.zones.is_empty());
        assert!(without_zones.zones.is_empty());
    }

    #[test]
    fn test_corrupt_cache_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut candles = vec![Candle::new(1000.0, 1002.0, 998.0, 1000.0); 240];
        candles[0] = Candle::new(1000.0, 900.0, 1100.0, f64::NAN);
        let path = write_cache(dir.path(), candles);

        let result = run_job(
            &SupportResistanceDetector::default(),
            JobRequest {
                path,
                current_price: None,
                include_zones: false,
            },
        );
        assert!(result.result.is_err());
    }
}
