//! Compression zone scanning.
//!
//! Slides a fixed window over the series looking for runs of bars whose closes
//! sit inside a narrow band, then looks a fixed number of bars ahead to see
//! which way price left the band. The side that held becomes the zone type.

use crate::config::{DetectorConfig, PRINT_ZONE_DETECTION, ZonePriceMode};
use crate::domain::{Zone, ZoneType};
use crate::models::CandleSeries;
use crate::utils::maths_utils::{get_max, get_min, mean, spread};

#[derive(Debug, Clone, PartialEq)]
pub struct CompressionZoneDetector {
    window: usize,
    compression_threshold: f64,
    breakout_threshold: f64,
    lookahead: usize,
    price_mode: ZonePriceMode,
}

impl CompressionZoneDetector {
    pub fn new(config: &DetectorConfig) -> Self {
        Self {
            window: config.window,
            compression_threshold: config.compression_threshold,
            breakout_threshold: config.breakout_threshold,
            lookahead: config.lookahead,
            price_mode: config.zone_price_mode,
        }
    }

    /// Scans every window start where the window and its lookahead both fit.
    /// Overlapping windows are evaluated independently, so one consolidation
    /// typically yields several zones at nearly the same price.
    pub fn detect(&self, series: &CandleSeries) -> Vec<Zone> {
        let span = self.window + self.lookahead;
        let total = series.klines();
        if self.window == 0 || self.lookahead == 0 || total < span {
            log::info!("Detected 0 compression zones ({} bars, need {})", total, span);
            return Vec::new();
        }

        let zones: Vec<Zone> = (0..=total - span)
            .filter(|&start| self.is_compressed(series, start))
            .filter_map(|start| match self.price_mode {
                ZonePriceMode::Extremes => self.classify_extremes(series, start),
                ZonePriceMode::MeanClose => self.classify_mean_close(series, start),
            })
            .collect();

        if PRINT_ZONE_DETECTION {
            for zone in &zones {
                log::info!(
                    "   zone @ bar {}: {} at {:.2}",
                    zone.start_index,
                    zone.zone_type,
                    zone.price
                );
            }
        }
        log::info!("Detected {} compression zones before clustering.", zones.len());

        zones
    }

    fn is_compressed(&self, series: &CandleSeries, start: usize) -> bool {
        let closes = &series.close_prices[start..start + self.window];
        spread(closes) <= self.compression_threshold
    }

    /// Support at the window low if price broke up, resistance at the window
    /// high if it broke down. The larger excursion must also clear the threshold.
    fn classify_extremes(&self, series: &CandleSeries, start: usize) -> Option<Zone> {
        let window_end = start + self.window;
        let lookahead_end = window_end + self.lookahead;

        let zone_low = get_min(&series.low_prices[start..window_end]);
        let zone_high = get_max(&series.high_prices[start..window_end]);

        let up_move = get_max(&series.high_prices[window_end..lookahead_end]) - zone_high;
        let down_move = zone_low - get_min(&series.low_prices[window_end..lookahead_end]);

        if up_move > self.breakout_threshold && up_move > down_move {
            Some(Zone::new(zone_low, ZoneType::Support, start))
        } else if down_move > self.breakout_threshold && down_move > up_move {
            Some(Zone::new(zone_high, ZoneType::Resistance, start))
        } else {
            None
        }
    }

    /// Zone price is the mean close of the window; excursions use lookahead closes.
    /// An upward excursion wins whenever it clears the threshold.
    fn classify_mean_close(&self, series: &CandleSeries, start: usize) -> Option<Zone> {
        let window_end = start + self.window;
        let lookahead_end = window_end + self.lookahead;

        let zone_price = mean(&series.close_prices[start..window_end]);
        let future = &series.close_prices[window_end..lookahead_end];

        let up_move = get_max(future) - zone_price;
        let down_move = zone_price - get_min(future);

        if up_move > self.breakout_threshold {
            Some(Zone::new(zone_price, ZoneType::Support, start))
        } else if down_move > self.breakout_threshold {
            Some(Zone::new(zone_price, ZoneType::Resistance, start))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Candle;

    fn flat(price: f64, count: usize) -> Vec<Candle> {
        (0..count)
            .map(|_| Candle::new(price, price + 2.0, price - 2.0, price))
            .collect()
    }

    fn detector() -> CompressionZoneDetector {
        CompressionZoneDetector::new(&DetectorConfig::default())
    }

    #[test]
    fn test_upward_breakout_is_support_at_window_low() {
        // 5 compressed bars then a lookahead that spikes 100 points higher
        let mut candles = flat(1000.0, 5);
        candles[2] = Candle::new(1000.0, 1003.0, 990.0, 1001.0);
        candles.extend(flat(1000.0, 9));
        candles.push(Candle::new(1000.0, 1105.0, 999.0, 1100.0));

        let series = CandleSeries::from(candles.as_slice());
        let zones = detector().detect(&series);

        assert_eq!(zones.len(), 1, "only one start index fits");
        assert_eq!(zones[0].zone_type, ZoneType::Support);
        assert_eq!(zones[0].price, 990.0);
        assert_eq!(zones[0].start_index, 0);
    }

    #[test]
    fn test_downward_breakout_is_resistance_at_window_high() {
        let mut candles = flat(1000.0, 5);
        candles[4] = Candle::new(1000.0, 1010.0, 998.0, 1002.0);
        candles.extend(flat(1000.0, 9));
        candles.push(Candle::new(1000.0, 1001.0, 880.0, 890.0));

        let series = CandleSeries::from(candles.as_slice());
        let zones = detector().detect(&series);

        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].zone_type, ZoneType::Resistance);
        assert_eq!(zones[0].price, 1010.0);
    }

    #[test]
    fn test_wide_window_is_not_compressed() {
        let mut candles = flat(1000.0, 5);
        candles[3] = Candle::new(1060.0, 1062.0, 1058.0, 1060.0);
        candles.extend(flat(1000.0, 9));
        candles.push(Candle::new(1000.0, 1300.0, 999.0, 1290.0));

        let series = CandleSeries::from(candles.as_slice());
        assert!(detector().detect(&series).is_empty());
    }

    #[test]
    fn test_two_sided_tie_emits_nothing() {
        // Up and down excursions both clear the threshold by the same amount
        let mut candles = flat(1000.0, 5);
        candles.extend(flat(1000.0, 8));
        candles.push(Candle::new(1000.0, 1102.0, 999.0, 1000.0));
        candles.push(Candle::new(1000.0, 1001.0, 898.0, 1000.0));

        let series = CandleSeries::from(candles.as_slice());
        assert!(detector().detect(&series).is_empty());
    }

    #[test]
    fn test_small_move_emits_nothing() {
        let mut candles = flat(1000.0, 14);
        candles.push(Candle::new(1000.0, 1070.0, 999.0, 1060.0));

        // up_move = 1070 - 1002 = 68, below the 70 threshold
        let series = CandleSeries::from(candles.as_slice());
        assert!(detector().detect(&series).is_empty());
    }

    #[test]
    fn test_every_fitting_start_is_scanned() {
        // 16 bars = window 5 + lookahead 10 + 1, so starts 0 and 1 both fit.
        let mut candles = flat(1000.0, 15);
        candles.push(Candle::new(1000.0, 1200.0, 999.0, 1190.0));
        let series = CandleSeries::from(candles.as_slice());

        let zones = detector().detect(&series);
        // Start 0 sees only flat lookahead; start 1 sees the spike at bar 15
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].start_index, 1);
    }

    #[test]
    fn test_short_series_yields_no_zones() {
        let series = CandleSeries::from(flat(1000.0, 14).as_slice());
        assert!(detector().detect(&series).is_empty());
    }

    #[test]
    fn test_mean_close_mode_uses_average_close() {
        let config = DetectorConfig {
            zone_price_mode: ZonePriceMode::MeanClose,
            ..Default::default()
        };
        let detector = CompressionZoneDetector::new(&config);

        let mut candles: Vec<Candle> = [1000.0, 1010.0, 1020.0, 1010.0, 1010.0]
            .iter()
            .map(|&c| Candle::new(c, c + 1.0, c - 1.0, c))
            .collect();
        candles.extend(flat(1010.0, 9));
        candles.push(Candle::new(1010.0, 1101.0, 1009.0, 1100.0));

        let series = CandleSeries::from(candles.as_slice());
        let zones = detector.detect(&series);

        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].zone_type, ZoneType::Support);
        assert!((zones[0].price - 1010.0).abs() < 1e-9);
    }
}
