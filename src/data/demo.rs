//! Deterministic synthetic series used by `make_demo_cache` and tests.

use crate::config::demo::DemoSeries;
use crate::domain::Candle;

/// Flat, tightly oscillating closes with a step move every `breakout_every` bars.
/// Steps alternate up and down, so both support and resistance show up.
pub fn demo_candles(spec: &DemoSeries) -> Vec<Candle> {
    let mut candles = Vec::with_capacity(spec.total_bars);
    let mut level = spec.base_price;
    let mut going_up = true;
    let mut prev_close = spec.base_price;

    for i in 0..spec.total_bars {
        if i > 0 && spec.breakout_every > 0 && i % spec.breakout_every == 0 {
            level += if going_up {
                spec.breakout_size
            } else {
                -spec.breakout_size
            };
            going_up = !going_up;
        }

        let close = level + if i % 2 == 0 { 0.0 } else { spec.oscillation };
        let open = prev_close;
        let high = open.max(close) + 2.0;
        let low = open.min(close) - 2.0;

        candles.push(Candle::new(open, high, low, close));
        prev_close = close;
    }

    candles
}
