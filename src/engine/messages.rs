use std::path::PathBuf;

use serde::Serialize;

use crate::domain::Zone;
use crate::models::SrLevels;

/// A request to analyse one candle file
#[derive(Debug, Clone)]
pub struct JobRequest {
    pub path: PathBuf,
    /// Optional live price used only to pick the nearest levels for display
    pub current_price: Option<f64>,
    /// Keep the raw zones in the report
    pub include_zones: bool,
}

/// Everything the presentation layer needs for one file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub candle_count: usize,
    pub levels: SrLevels,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_support: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nearest_resistance: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub zones: Vec<Zone>,
}

/// The result returned by the worker
#[derive(Debug)]
pub struct JobResult {
    pub path: PathBuf,
    pub duration_ms: u128,

    // Success: the report
    // Failure: the full error chain
    pub result: anyhow::Result<FileReport>,
}
