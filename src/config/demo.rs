//! config/demo.rs Demo cache configuration knobs.
//!
//! These keep the synthetic demo series small and deterministic so the demo
//! cache can be regenerated byte-for-byte (apart from its timestamp).

/// Shape of the synthetic series written by `make_demo_cache`
pub struct DemoSeries {
    /// Symbol stored in the cache header
    pub symbol: &'static str,
    /// Total number of bars generated
    pub total_bars: usize,
    /// Price the series oscillates around
    pub base_price: f64,
    /// Peak-to-peak close oscillation (kept under the compression threshold)
    pub oscillation: f64,
    /// Bars between consecutive breakout legs
    pub breakout_every: usize,
    /// Size of each breakout leg in price units
    pub breakout_size: f64,
}

/// The Master Demo Configuration
pub struct DemoConfig {
    pub series: DemoSeries,
}

pub const DEMO: DemoConfig = DemoConfig {
    series: DemoSeries {
        symbol: "DEMO",
        total_bars: 300,
        base_price: 22_000.0,
        oscillation: 10.0,
        breakout_every: 60,
        breakout_size: 150.0,
    },
};
