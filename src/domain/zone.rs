use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Which side of price a compression zone ended up defending.
#[derive(
    Copy, Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Display, EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ZoneType {
    /// Price broke upward out of the compression, so the floor held.
    Support,
    /// Price broke downward out of the compression, so the ceiling held.
    Resistance,
}

/// A classified compression zone, prior to clustering.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Zone {
    pub price: f64,
    pub zone_type: ZoneType,
    /// Index of the first window bar within the analysed series
    pub start_index: usize,
}

impl Zone {
    pub fn new(price: f64, zone_type: ZoneType, start_index: usize) -> Self {
        Self {
            price,
            zone_type,
            start_index,
        }
    }

    pub fn is_support(&self) -> bool {
        self.zone_type == ZoneType::Support
    }
}
