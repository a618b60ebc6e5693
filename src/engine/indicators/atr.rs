//! Average True Range (ATR) indicator.

use crate::types::{Bar, Series};

/// Wilder-smoothed ATR over `window` periods.
///
/// TR = max(high - low, |high - prevClose|, |low - prevClose|). ATR scales
/// the expected-variation estimate; it is never a directional signal.
pub fn atr(series: &Series, window: usize) -> Option<f64> {
    let bars = series.bars();
    if window == 0 || bars.len() < window + 1 {
        return None;
    }

    let mut true_ranges = Vec::with_capacity(bars.len() - 1);
    for pair in bars.windows(2) {
        true_ranges.push(true_range(&pair[1], &pair[0]));
    }

    let mut atr: f64 = true_ranges.iter().take(window).sum::<f64>() / window as f64;
    for tr in true_ranges.iter().skip(window) {
        atr = (atr * (window - 1) as f64 + tr) / window as f64;
    }

    Some(atr)
}

fn true_range(current: &Bar, previous: &Bar) -> f64 {
    let hl = current.high - current.low;
    let hc = (current.high - previous.close).abs();
    let lc = (current.low - previous.close).abs();
    hl.max(hc).max(lc)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Series;

    fn swinging_series(count: usize) -> Series {
        let bars = (0..count)
            .map(|i| {
                let base = 100.0 + i as f64 * 1.5;
                Bar {
                    time: 1_000_000 + i as i64 * 60_000,
                    open: base,
                    high: base + 2.0,
                    low: base - 1.0,
                    close: base + 1.0,
                    volume: 1000.0,
                }
            })
            .collect();
        Series::new(bars, 0)
    }

    #[test]
    fn test_atr_insufficient_data() {
        assert!(atr(&swinging_series(10), 14).is_none());
    }

    #[test]
    fn test_atr_positive_value() {
        let value = atr(&swinging_series(30), 14).unwrap();
        assert!(value > 0.0, "ATR should be positive, got {}", value);
    }

    #[test]
    fn test_true_range_uses_gap() {
        let previous = Bar {
            time: 0,
            open: 100.0,
            high: 101.0,
            low: 99.0,
            close: 100.0,
            volume: 1.0,
        };
        // gap up: range to previous close dominates high - low
        let current = Bar {
            time: 1,
            open: 110.0,
            high: 111.0,
            low: 109.0,
            close: 110.0,
            volume: 1.0,
        };
        assert_eq!(true_range(&current, &previous), 11.0);
    }
}
