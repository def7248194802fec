//! Debugging feature flags.
//!
//! Toggle individual diagnostics here; keep them `false` by default so release
//! builds remain quiet.

/// Emit one line per classified compression zone (index, type, price).
pub const PRINT_ZONE_DETECTION: bool = false;

/// Emit cluster membership (first member, size, mean) for each side.
pub const PRINT_CLUSTERING: bool = false;

/// Emit candle file load timings and counts.
pub const PRINT_SERDE: bool = false;
