// Level detection algorithms
pub mod clustering;
pub mod compression;
pub mod sr_detector;

// Re-export commonly used types
pub use clustering::LevelClusterer;
pub use compression::CompressionZoneDetector;
pub use sr_detector::SupportResistanceDetector;
