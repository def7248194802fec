use serde::{Deserialize, Serialize};

use crate::domain::candle::Candle;

// ============================================================================
// CandleSeries: Column-oriented view of the bars the zone scan reads, oldest first
// ============================================================================

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CandleSeries {
    pub high_prices: Vec<f64>,
    pub low_prices: Vec<f64>,
    pub close_prices: Vec<f64>,
}

impl From<&[Candle]> for CandleSeries {
    fn from(candles: &[Candle]) -> Self {
        let n = candles.len();
        let mut series = CandleSeries {
            high_prices: Vec::with_capacity(n),
            low_prices: Vec::with_capacity(n),
            close_prices: Vec::with_capacity(n),
        };
        for candle in candles {
            series.high_prices.push(candle.high);
            series.low_prices.push(candle.low);
            series.close_prices.push(candle.close);
        }
        series
    }
}

impl CandleSeries {
    pub fn klines(&self) -> usize {
        self.close_prices.len()
    }
}
