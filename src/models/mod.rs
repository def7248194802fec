// Data models for level analysis
// These modules contain plain data independent of I/O and presentation

pub mod sr_levels;
pub mod timeseries;

// Re-export key types for convenience
pub use sr_levels::SrLevels;
pub use timeseries::CandleSeries;
