//! MACD (Moving Average Convergence Divergence) indicator.

use crate::types::Series;

/// MACD output:
/// - line = EMA(fast) - EMA(slow)
/// - signal = EMA(signal) of the line
/// - histogram = line - signal; its sign is the directional cue
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacdValue {
    pub line: f64,
    pub signal: f64,
    pub histogram: f64,
}

/// MACD over close prices. `None` until `slow + signal` bars are available.
pub fn macd(series: &Series, fast: usize, slow: usize, signal: usize) -> Option<MacdValue> {
    let closes = series.closes();
    if fast == 0 || slow <= fast || signal == 0 || closes.len() < slow + signal {
        return None;
    }

    let fast_ema = ema_sequence(&closes, fast);
    let slow_ema = ema_sequence(&closes, slow);
    if fast_ema.is_empty() || slow_ema.is_empty() {
        return None;
    }

    // Align the EMAs (fast starts earlier)
    let offset = slow - fast;
    let line: Vec<f64> = fast_ema
        .iter()
        .skip(offset)
        .zip(slow_ema.iter())
        .map(|(f, s)| f - s)
        .collect();
    if line.len() < signal {
        return None;
    }

    let signal_line = ema_sequence(&line, signal);
    let line_now = *line.last()?;
    let signal_now = *signal_line.last()?;

    Some(MacdValue {
        line: line_now,
        signal: signal_now,
        histogram: line_now - signal_now,
    })
}

/// EMA sequence for a series of values, one entry per bar from the seed on.
fn ema_sequence(values: &[f64], period: usize) -> Vec<f64> {
    if values.len() < period {
        return Vec::new();
    }

    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut out = Vec::with_capacity(values.len() - period + 1);

    // First EMA is the SMA of the seed window
    let sma: f64 = values.iter().take(period).sum::<f64>() / period as f64;
    out.push(sma);

    for value in values.iter().skip(period) {
        let prev = out[out.len() - 1];
        out.push((value - prev) * multiplier + prev);
    }

    out
}
