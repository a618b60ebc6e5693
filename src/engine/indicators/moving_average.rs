//! Simple and exponential moving averages.

/// SMA of the last `window` values. `None` during warm-up.
pub fn sma(values: &[f64], window: usize) -> Option<f64> {
    if window == 0 || values.len() < window {
        return None;
    }
    let tail = &values[values.len() - window..];
    Some(tail.iter().sum::<f64>() / window as f64)
}

/// EMA seeded with the SMA of the first `window` values, then rolled
/// forward over the rest. `None` during warm-up.
pub fn ema(values: &[f64], window: usize) -> Option<f64> {
    if window == 0 || values.len() < window {
        return None;
    }

    let multiplier = 2.0 / (window as f64 + 1.0);
    let mut ema: f64 = values.iter().take(window).sum::<f64>() / window as f64;
    for value in values.iter().skip(window) {
        ema = (value - ema) * multiplier + ema;
    }
    Some(ema)
}
