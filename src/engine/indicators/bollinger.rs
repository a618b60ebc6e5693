//! Bollinger Bands indicator.

use crate::types::Series;

/// Band levels: mid = SMA(window), upper/lower = mid +/- k * stddev.
///
/// A zero-variance window collapses all three levels to the mean; the
/// signal generator fires nothing for collapsed bands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BollingerValue {
    pub upper: f64,
    pub mid: f64,
    pub lower: f64,
}

/// Bollinger Bands over close prices. `None` during warm-up.
pub fn bollinger(series: &Series, window: usize, k: f64) -> Option<BollingerValue> {
    let closes = series.closes();
    if window == 0 || closes.len() < window {
        return None;
    }

    let tail = &closes[closes.len() - window..];
    let mid = tail.iter().sum::<f64>() / window as f64;
    let variance = tail.iter().map(|v| (v - mid).powi(2)).sum::<f64>() / window as f64;
    let std_dev = variance.sqrt();

    Some(BollingerValue {
        upper: mid + k * std_dev,
        mid,
        lower: mid - k * std_dev,
    })
}
