use thiserror::Error;

/// Errors raised by the level detection core.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SrError {
    /// The candle series is shorter than the analysis window.
    #[error("Insufficient data: got {available} candles, need at least {required}")]
    InsufficientData { available: usize, required: usize },

    #[error("Invalid candle (o={open}, h={high}, l={low}, c={close}): {reason}")]
    InvalidCandle {
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        reason: &'static str,
    },

    /// A cluster reference price must be strictly positive for the relative distance test.
    #[error("Cannot cluster around non-positive price {0}")]
    NonPositivePrice(f64),

    #[error("Invalid detector config: {0}")]
    InvalidConfig(String),
}

pub type SrResult<T> = std::result::Result<T, SrError>;
