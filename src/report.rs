//! Plain-text and JSON rendering of analysis results.

use anyhow::Result;

use crate::engine::{FileReport, JobResult};

/// Prices are shown to two decimals, matching typical index quotes.
fn price(value: f64) -> String {
    format!("{:.2}", value)
}

fn push_levels(out: &mut String, heading: &str, levels: &[f64]) {
    out.push_str(&format!("\n===== {} =====\n", heading));
    if levels.is_empty() {
        out.push_str("(none)\n");
    }
    for level in levels {
        out.push_str(&format!("{}\n", price(*level)));
    }
}

pub fn render_text(report: &FileReport) -> String {
    let mut out = format!(
        "{} ({} candles)\n",
        report.path.display(),
        report.candle_count
    );

    push_levels(&mut out, "SUPPORT LEVELS", &report.levels.support);
    push_levels(&mut out, "RESISTANCE LEVELS", &report.levels.resistance);

    if let Some(current) = report.current_price {
        let describe = |level: Option<f64>| match level {
            Some(level) => format!(
                "{} ({:+.2}%)",
                price(level),
                (level - current) / current * 100.0
            ),
            None => "-".to_string(),
        };
        out.push_str(&format!("\nCurrent price: {}\n", price(current)));
        out.push_str(&format!(
            "Nearest support:    {}\n",
            describe(report.nearest_support)
        ));
        out.push_str(&format!(
            "Nearest resistance: {}\n",
            describe(report.nearest_resistance)
        ));
    }

    if !report.zones.is_empty() {
        out.push_str(&format!("\nRaw zones ({}):\n", report.zones.len()));
        for zone in &report.zones {
            out.push_str(&format!(
                "  bar {:>3}  {:<10} {}\n",
                zone.start_index,
                zone.zone_type.to_string(),
                price(zone.price)
            ));
        }
    }

    out
}

/// Successful reports as a pretty JSON array; failures are left to the caller.
pub fn render_json(results: &[JobResult]) -> Result<String> {
    let reports: Vec<&FileReport> = results
        .iter()
        .filter_map(|r| r.result.as_ref().ok())
        .collect();
    Ok(serde_json::to_string_pretty(&reports)?)
}
