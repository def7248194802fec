use itertools::{Either, Itertools};

use crate::analysis::clustering::LevelClusterer;
use crate::analysis::compression::CompressionZoneDetector;
use crate::config::DetectorConfig;
use crate::domain::{Candle, Zone, ZoneType};
use crate::error::{SrError, SrResult};
use crate::models::{CandleSeries, SrLevels};

/// Finds support and resistance levels in the most recent `min_candles` bars.
///
/// Holds only its immutable configuration, so one instance can be shared
/// across threads and every call is independent of the previous ones.
#[derive(Debug, Clone, PartialEq)]
pub struct SupportResistanceDetector {
    config: DetectorConfig,
    zone_detector: CompressionZoneDetector,
    clusterer: LevelClusterer,
}

impl SupportResistanceDetector {
    pub fn new(config: DetectorConfig) -> SrResult<Self> {
        config.validate()?;
        Ok(Self {
            zone_detector: CompressionZoneDetector::new(&config),
            clusterer: LevelClusterer::from_config(&config),
            config,
        })
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Returns `(support_levels, resistance_levels)`, each ascending with at most
    /// `top_n` entries. Truncation keeps the lowest levels on both sides.
    pub fn get_sr(&self, candles: &[Candle]) -> SrResult<(Vec<f64>, Vec<f64>)> {
        self.get_levels(candles).map(SrLevels::into_pair)
    }

    pub fn get_levels(&self, candles: &[Candle]) -> SrResult<SrLevels> {
        let zones = self.detect_zones(candles)?;
        self.levels_from_zones(&zones)
    }

    /// Clusters already detected zones into levels, for callers that also keep the zones.
    pub fn levels_from_zones(&self, zones: &[Zone]) -> SrResult<SrLevels> {
        let (support_prices, resistance_prices): (Vec<f64>, Vec<f64>) =
            zones.iter().partition_map(|zone| match zone.zone_type {
                ZoneType::Support => Either::Left(zone.price),
                ZoneType::Resistance => Either::Right(zone.price),
            });

        let mut support = self.clusterer.cluster(&support_prices)?;
        let mut resistance = self.clusterer.cluster(&resistance_prices)?;

        log::debug!(
            "Clustered {} support zones into {} levels, {} resistance zones into {} levels",
            support_prices.len(),
            support.len(),
            resistance_prices.len(),
            resistance.len()
        );

        support.truncate(self.config.top_n);
        resistance.truncate(self.config.top_n);

        Ok(SrLevels::new(support, resistance))
    }

    /// Raw classified zones over the analysed tail of `candles`, before clustering.
    /// `Zone::start_index` is relative to that tail.
    pub fn detect_zones(&self, candles: &[Candle]) -> SrResult<Vec<Zone>> {
        let required = self.config.min_candles;
        if candles.len() < required {
            return Err(SrError::InsufficientData {
                available: candles.len(),
                required,
            });
        }

        let recent = &candles[candles.len() - required..];
        let series = CandleSeries::from(recent);
        Ok(self.zone_detector.detect(&series))
    }
}

impl Default for SupportResistanceDetector {
    fn default() -> Self {
        let config = DetectorConfig::default();
        Self {
            zone_detector: CompressionZoneDetector::new(&config),
            clusterer: LevelClusterer::from_config(&config),
            config,
        }
    }
}
