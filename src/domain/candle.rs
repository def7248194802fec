use serde::{Deserialize, Serialize};

use crate::error::{SrError, SrResult};

/// A single OHLC bar. Fields are read-only once constructed.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Candle {
    #[serde(alias = "Open")]
    pub open: f64,
    #[serde(alias = "High")]
    pub high: f64,
    #[serde(alias = "Low")]
    pub low: f64,
    #[serde(alias = "Close")]
    pub close: f64,
}

impl Candle {
    /// Builds a candle without checking `low <= {open, close} <= high`.
    /// Intended for synthetic series and data already validated upstream.
    pub fn new(open: f64, high: f64, low: f64, close: f64) -> Self {
        Candle {
            open,
            high,
            low,
            close,
        }
    }

    /// Builds a candle, rejecting non-finite prices and bars whose body escapes the wicks.
    pub fn try_new(open: f64, high: f64, low: f64, close: f64) -> SrResult<Self> {
        let candle = Self::new(open, high, low, close);
        candle.validate()?;
        Ok(candle)
    }

    pub fn validate(&self) -> SrResult<()> {
        let reason = if ![self.open, self.high, self.low, self.close]
            .iter()
            .all(|p| p.is_finite())
        {
            Some("prices must be finite")
        } else if self.low > self.high {
            Some("low is above high")
        } else if self.open < self.low || self.open > self.high {
            Some("open outside low..high")
        } else if self.close < self.low || self.close > self.high {
            Some("close outside low..high")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(SrError::InvalidCandle {
                open: self.open,
                high: self.high,
                low: self.low,
                close: self.close,
                reason,
            }),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_candle() {
        let candle = Candle::try_new(100.0, 110.0, 95.0, 105.0).unwrap();
        assert_eq!(candle, Candle::new(100.0, 110.0, 95.0, 105.0));
        // Body touching the wicks is still valid
        assert!(Candle::try_new(95.0, 110.0, 95.0, 110.0).is_ok());
    }

    #[test]
    fn test_rejects_close_above_high() {
        let err = Candle::try_new(100.0, 110.0, 95.0, 111.0).unwrap_err();
        assert!(matches!(
            err,
            SrError::InvalidCandle {
                reason: "close outside low..high",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_inverted_wicks_and_nan() {
        assert!(Candle::try_new(100.0, 90.0, 95.0, 92.0).is_err());
        assert!(Candle::try_new(f64::NAN, 110.0, 95.0, 105.0).is_err());
    }

    #[test]
    fn test_deserialize_capitalised_fields() {
        let candle: Candle =
            serde_json::from_str(r#"{"Open": 1.0, "High": 2.0, "Low": 0.5, "Close": 1.5}"#)
                .unwrap();
        assert_eq!(candle, Candle::new(1.0, 2.0, 0.5, 1.5));
    }
}
