// Domain types and value objects
pub mod candle;
pub mod zone;

// Re-export commonly used types
pub use candle::Candle;
pub use zone::{Zone, ZoneType};
