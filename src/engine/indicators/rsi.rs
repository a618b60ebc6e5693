//! Relative Strength Index (RSI) indicator.

use crate::types::Series;

/// RSI over `window` periods using Wilder's smoothing.
///
/// Values range 0-100:
/// - Below 30: oversold (potential buy)
/// - Above 70: overbought (potential sell)
///
/// A window with zero average loss returns exactly 100 — the all-gains
/// degenerate case is a value, not an error.
pub fn rsi(series: &Series, window: usize) -> Option<f64> {
    let bars = series.bars();
    if window == 0 || bars.len() < window + 1 {
        return None;
    }

    let mut gains = Vec::with_capacity(bars.len() - 1);
    let mut losses = Vec::with_capacity(bars.len() - 1);
    for pair in bars.windows(2) {
        let change = pair[1].close - pair[0].close;
        if change > 0.0 {
            gains.push(change);
            losses.push(0.0);
        } else {
            gains.push(0.0);
            losses.push(-change);
        }
    }

    // Seed with plain averages, then apply Wilder's smoothing
    let mut avg_gain: f64 = gains.iter().take(window).sum::<f64>() / window as f64;
    let mut avg_loss: f64 = losses.iter().take(window).sum::<f64>() / window as f64;

    for i in window..gains.len() {
        avg_gain = (avg_gain * (window - 1) as f64 + gains[i]) / window as f64;
        avg_loss = (avg_loss * (window - 1) as f64 + losses[i]) / window as f64;
    }

    if avg_loss == 0.0 {
        return Some(100.0);
    }

    let rs = avg_gain / avg_loss;
    Some(100.0 - (100.0 / (1.0 + rs)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Bar, Series};

    fn uptrend_series(count: usize) -> Series {
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

    fn downtrend_series(count: usize) -> Series {
        let bars = (0..count)
            .map(|i| {
                let base = 200.0 - i as f64 * 1.5;
                Bar {
                    time: 1_000_000 + i as i64 * 60_000,
                    open: base,
                    high: base + 1.0,
                    low: base - 2.0,
                    close: base - 1.0,
                    volume: 1000.0,
                }
            })
            .collect();
        Series::new(bars, 0)
    }

    #[test]
    fn test_rsi_insufficient_data() {
        assert!(rsi(&uptrend_series(10), 14).is_none());
    }

    #[test]
    fn test_rsi_all_rising_is_100() {
        // strictly rising closes: zero losses, RSI pinned at 100
        let value = rsi(&uptrend_series(50), 14).unwrap();
        assert_eq!(value, 100.0);
    }

    #[test]
    fn test_rsi_downtrend_low_value() {
        let value = rsi(&downtrend_series(50), 14).unwrap();
        assert!(value < 50.0, "RSI in downtrend should be < 50, got {}", value);
    }

    #[test]
    fn test_rsi_value_range() {
        for count in [15, 30, 50] {
            let up = rsi(&uptrend_series(count), 14).unwrap();
            let down = rsi(&downtrend_series(count), 14).unwrap();
            assert!((0.0..=100.0).contains(&up));
            assert!((0.0..=100.0).contains(&down));
        }
    }

    #[test]
    fn test_rsi_custom_window() {
        assert!(rsi(&uptrend_series(8), 7).is_some());
        assert!(rsi(&uptrend_series(7), 7).is_none());
    }
}
