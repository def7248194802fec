use serde::{Deserialize, Serialize};

/// Final clustered levels for one series. Both sides are ascending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SrLevels {
    pub support: Vec<f64>,
    pub resistance: Vec<f64>,
}

impl SrLevels {
    pub fn new(support: Vec<f64>, resistance: Vec<f64>) -> Self {
        Self {
            support,
            resistance,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.support.is_empty() && self.resistance.is_empty()
    }

    /// Highest support level at or below `current_price`, if any.
    pub fn nearest_support(&self, current_price: f64) -> Option<f64> {
        self.support
            .iter()
            .rev()
            .copied()
            .find(|&level| level <= current_price)
    }

    /// Lowest resistance level at or above `current_price`, if any.
    pub fn nearest_resistance(&self, current_price: f64) -> Option<f64> {
        self.resistance
            .iter()
            .copied()
            .find(|&level| level >= current_price)
    }

    pub fn into_pair(self) -> (Vec<f64>, Vec<f64>) {
        (self.support, self.resistance)
    }
}

impl From<SrLevels> for (Vec<f64>, Vec<f64>) {
    fn from(levels: SrLevels) -> Self {
        levels.into_pair()
    }
}
