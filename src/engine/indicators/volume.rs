//! Volume moving average.

use crate::types::Series;

/// SMA of traded volume over the last `window` bars. `None` during
/// warm-up; the signal generator then skips volume confirmation entirely.
pub fn volume_sma(series: &Series, window: usize) -> Option<f64> {
    let bars = series.bars();
    if window == 0 || bars.len() < window {
        return None;
    }
    let tail = &bars[bars.len() - window..];
    Some(tail.iter().map(|b| b.volume).sum::<f64>() / window as f64)
}
