use std::path::PathBuf;
use std::sync::Arc;

use rayon::prelude::*;

use super::messages::{JobRequest, JobResult};
use super::worker;
use crate::analysis::SupportResistanceDetector;

/// Runs one detector over many candle files.
///
/// The detector carries no mutable state, so every file is analysed on the
/// rayon pool against the same shared instance. Results come back in request order.
pub struct LevelEngine {
    detector: Arc<SupportResistanceDetector>,
}

impl LevelEngine {
    pub fn new(detector: SupportResistanceDetector) -> Self {
        Self {
            detector: Arc::new(detector),
        }
    }

    pub fn requests_for(
        paths: &[PathBuf],
        current_price: Option<f64>,
        include_zones: bool,
    ) -> Vec<JobRequest> {
        paths
            .iter()
            .map(|path| JobRequest {
                path: path.clone(),
                current_price,
                include_zones,
            })
            .collect()
    }

    pub fn run(&self, requests: Vec<JobRequest>) -> Vec<JobResult> {
        log::info!("Analysing {} candle file(s)...", requests.len());
        requests
            .into_par_iter()
            .map(|req| worker::run_job(&self.detector, req))
            .collect()
    }
}
