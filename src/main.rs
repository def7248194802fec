use anyhow::{Context, Result, bail};
use clap::Parser;

use sr_levels::engine::LevelEngine;
use sr_levels::report::{render_json, render_text};
use sr_levels::{Cli, SupportResistanceDetector};

fn main() -> Result<()> {
    // A. Init Logging
    // Info by default; RUST_LOG still wins since it is parsed last
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::debug!("Parsed arguments: {:?}", args);

    // C. Build the detector
    let config = args.detector_config()?;
    let detector =
        SupportResistanceDetector::new(config).context("Refusing to run with invalid config")?;
    log::info!("Detector config: {:?}", detector.config());

    // D. Analyse every file
    let engine = LevelEngine::new(detector);
    let results = engine.run(LevelEngine::requests_for(
        &args.files,
        args.current_price,
        args.zones,
    ));

    // E. Present
    if args.json {
        println!("{}", render_json(&results)?);
    } else {
        for result in &results {
            if let Ok(report) = &result.result {
                println!("{}", render_text(report));
                log::debug!("{:?} analysed in {} ms", result.path, result.duration_ms);
            }
        }
    }

    let failures = results.iter().filter(|r| r.result.is_err()).count();
    if failures > 0 {
        bail!("{} of {} file(s) could not be analysed", failures, results.len());
    }

    Ok(())
}
