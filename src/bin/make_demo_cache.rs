use anyhow::{Context, Result};
use sr_levels::SupportResistanceDetector;
use sr_levels::config::DEMO;
use sr_levels::data::CandleCache;
use sr_levels::data::demo::demo_candles;

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    build_demo_cache()
}

fn build_demo_cache() -> Result<()> {
    let spec = &DEMO.series;
    let candles = demo_candles(spec);
    log::info!(
        "Generated {} demo candles for {} around {:.2}",
        candles.len(),
        spec.symbol,
        spec.base_price
    );

    // Sanity check: the demo should always produce levels on both sides
    let (support, resistance) = SupportResistanceDetector::default()
        .get_sr(&candles)
        .context("Demo series failed analysis")?;
    log::info!("Demo support: {:?}, resistance: {:?}", support, resistance);

    let output_path = CandleCache::default_cache_path(spec.symbol);
    let cache = CandleCache::new(spec.symbol, candles);
    cache.save_to_path(&output_path)?;

    println!(
        "✅ Demo cache written to {:?} with {} candles.",
        output_path,
        cache.candles.len()
    );
    Ok(())
}
