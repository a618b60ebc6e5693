//! Rate-of-change momentum.

use crate::types::Series;

/// Percentage move of the close over the last `window` bars.
///
/// `None` during warm-up or when the reference close is zero (the rate is
/// undefined, not infinite).
pub fn momentum(series: &Series, window: usize) -> Option<f64> {
    let bars = series.bars();
    if window == 0 || bars.len() < window + 1 {
        return None;
    }

    let past = bars[bars.len() - 1 - window].close;
    let now = bars.last()?.close;
    if past == 0.0 {
        return None;
    }
    Some((now - past) / past * 100.0)
}
