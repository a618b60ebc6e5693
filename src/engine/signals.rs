//! Profile-driven signal generation.
//!
//! A single generic routine walks the profile's weight table in priority
//! order and applies each indicator's threshold rules. Horizon differences
//! live entirely in the profile data, not in branching here.

use tracing::debug;

use crate::engine::indicators::IndicatorSet;
use crate::engine::profile::{HorizonProfile, IndicatorKind};
use crate::types::{Signal, SignalDirection};

/// Directional weight keeps at least half its mass in a dead-volume market.
const VOLUME_FLOOR: f64 = 0.5;
/// Rate-of-change band (percent) treated as noise.
const MOMENTUM_THRESHOLD: f64 = 1.0;
/// Distance from MA50 (percent) the long-horizon rule treats as flat.
const LONG_MA_THRESHOLD: f64 = 2.0;

/// Apply the profile's threshold rules to the computed indicator values.
///
/// Emits at most one signal per enabled indicator, in profile priority
/// order; the order is stable and preserved into the final result.
/// Indicators still in their warm-up period emit nothing.
pub fn generate(set: &IndicatorSet, profile: &HorizonProfile) -> Vec<Signal> {
    let volume_factor = confirmation_factor(set);
    let mut signals = Vec::with_capacity(profile.weights.len());

    for entry in profile.weights {
        let fired = match entry.kind {
            IndicatorKind::Rsi => rsi_signal(set),
            IndicatorKind::Macd => macd_signal(set),
            IndicatorKind::Trend => trend_signal(set),
            IndicatorKind::LongMa => long_ma_signal(set),
            IndicatorKind::Bollinger => bollinger_signal(set),
            IndicatorKind::Momentum => momentum_signal(set, profile.momentum_window),
        };

        if let Some((name, direction, reason)) = fired {
            let weight = match direction {
                SignalDirection::Neutral => entry.weight,
                _ => entry.weight * volume_factor,
            };
            signals.push(Signal {
                name,
                direction,
                weight,
                reason,
            });
        }
    }

    debug!(
        horizon = profile.horizon.name(),
        count = signals.len(),
        "signals generated"
    );
    signals
}

/// Volume confirmation: a directional signal on below-average volume is
/// weighted down, clamped to [VOLUME_FLOOR, 1.0]. Warm-up means factor 1.
fn confirmation_factor(set: &IndicatorSet) -> f64 {
    match set.volume_sma {
        Some(avg) if avg > 0.0 => (set.last_volume / avg).clamp(VOLUME_FLOOR, 1.0),
        _ => 1.0,
    }
}

type Fired = Option<(String, SignalDirection, String)>;

fn rsi_signal(set: &IndicatorSet) -> Fired {
    let rsi = set.rsi?;
    let (direction, reason) = if rsi < 30.0 {
        (
            SignalDirection::Buy,
            format!("RSI {:.1} is oversold (below 30)", rsi),
        )
    } else if rsi > 70.0 {
        (
            SignalDirection::Sell,
            format!("RSI {:.1} is overbought (above 70)", rsi),
        )
    } else {
        (
            SignalDirection::Neutral,
            format!("RSI {:.1} inside the 30-70 band", rsi),
        )
    };
    Some(("RSI (14)".to_string(), direction, reason))
}

fn macd_signal(set: &IndicatorSet) -> Fired {
    let macd = set.macd?;
    let (direction, reason) = if macd.histogram > 0.0 {
        (
            SignalDirection::Buy,
            format!("MACD histogram {:+.4} above the signal line", macd.histogram),
        )
    } else if macd.histogram < 0.0 {
        (
            SignalDirection::Sell,
            format!("MACD histogram {:+.4} below the signal line", macd.histogram),
        )
    } else {
        (
            SignalDirection::Neutral,
            "MACD histogram flat on the signal line".to_string(),
        )
    };
    Some(("MACD".to_string(), direction, reason))
}

fn trend_signal(set: &IndicatorSet) -> Fired {
    let ma20 = set.ma20?;
    let ma50 = set.ma50?;
    let price = set.last_close;
    let (direction, reason) = if price > ma20 && ma20 > ma50 {
        (
            SignalDirection::Buy,
            format!(
                "bullish alignment: price {:.2} > MA20 {:.2} > MA50 {:.2}",
                price, ma20, ma50
            ),
        )
    } else if price < ma20 && ma20 < ma50 {
        (
            SignalDirection::Sell,
            format!(
                "bearish alignment: price {:.2} < MA20 {:.2} < MA50 {:.2}",
                price, ma20, ma50
            ),
        )
    } else {
        (
            SignalDirection::Neutral,
            "mixed moving-average ordering".to_string(),
        )
    };
    Some(("Trend (MA20/MA50)".to_string(), direction, reason))
}

fn long_ma_signal(set: &IndicatorSet) -> Fired {
    let ma50 = set.ma50?;
    if ma50 <= 0.0 {
        return None;
    }
    let diff_pct = (set.last_close - ma50) / ma50 * 100.0;
    let (direction, reason) = if diff_pct > LONG_MA_THRESHOLD {
        (
            SignalDirection::Buy,
            format!("price {:.1}% above MA50", diff_pct),
        )
    } else if diff_pct < -LONG_MA_THRESHOLD {
        (
            SignalDirection::Sell,
            format!("price {:.1}% below MA50", diff_pct.abs()),
        )
    } else {
        (
            SignalDirection::Neutral,
            format!("price within {:.0}% of MA50", LONG_MA_THRESHOLD),
        )
    };
    Some(("MA (50)".to_string(), direction, reason))
}

fn bollinger_signal(set: &IndicatorSet) -> Fired {
    let bands = set.bollinger?;
    let width = bands.upper - bands.lower;
    // zero-variance window: bands collapsed to the mean, nothing to read
    if width <= 0.0 {
        return None;
    }
    let price = set.last_close;
    let (direction, reason) = if price <= bands.lower {
        (
            SignalDirection::Buy,
            format!(
                "price {:.2} at or below the lower band {:.2}",
                price, bands.lower
            ),
        )
    } else if price >= bands.upper {
        (
            SignalDirection::Sell,
            format!(
                "price {:.2} at or above the upper band {:.2}",
                price, bands.upper
            ),
        )
    } else {
        (
            SignalDirection::Neutral,
            format!(
                "price inside the bands ({:.2}..{:.2})",
                bands.lower, bands.upper
            ),
        )
    };
    Some(("Bollinger Bands".to_string(), direction, reason))
}

fn momentum_signal(set: &IndicatorSet, window: usize) -> Fired {
    let roc = set.momentum?;
    let (direction, reason) = if roc > MOMENTUM_THRESHOLD {
        (
            SignalDirection::Buy,
            format!("{:+.1}% over the last {} bars", roc, window),
        )
    } else if roc < -MOMENTUM_THRESHOLD {
        (
            SignalDirection::Sell,
            format!("{:+.1}% over the last {} bars", roc, window),
        )
    } else {
        (
            SignalDirection::Neutral,
            format!("flat over the last {} bars", window),
        )
    };
    Some((format!("Momentum ({})", window), direction, reason))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::indicators::{BollingerValue, IndicatorSet, MacdValue};
    use crate::types::Horizon;

    fn empty_set() -> IndicatorSet {
        IndicatorSet {
            rsi: None,
            macd: None,
            ma20: None,
            ma50: None,
            bollinger: None,
            atr: None,
            volume_sma: None,
            momentum: None,
            last_close: 100.0,
            last_volume: 1000.0,
        }
    }

    #[test]
    fn test_warmup_emits_nothing() {
        let profile = HorizonProfile::for_horizon(Horizon::Short);
        let signals = generate(&empty_set(), &profile);
        assert!(signals.is_empty());
    }

    #[test]
    fn test_signal_order_follows_profile() {
        let profile = HorizonProfile::for_horizon(Horizon::Short);
        let set = IndicatorSet {
            rsi: Some(75.0),
            macd: Some(MacdValue {
                line: 1.0,
                signal: 0.5,
                histogram: 0.5,
            }),
            momentum: Some(4.0),
            ..empty_set()
        };
        let signals = generate(&set, &profile);
        let names: Vec<&str> = signals.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["RSI (14)", "MACD", "Momentum (10)"]);
    }

    #[test]
    fn test_low_volume_weights_down_directional_only() {
        let profile = HorizonProfile::for_horizon(Horizon::Short);
        let set = IndicatorSet {
            rsi: Some(20.0),      // Buy
            macd: Some(MacdValue {
                line: 0.0,
                signal: 0.0,
                histogram: 0.0,
            }),                    // Neutral
            volume_sma: Some(2000.0),
            last_volume: 500.0,    // a quarter of average, clamped to the floor
            ..empty_set()
        };
        let signals = generate(&set, &profile);
        let rsi = signals.iter().find(|s| s.name == "RSI (14)").unwrap();
        let macd = signals.iter().find(|s| s.name == "MACD").unwrap();
        assert_eq!(rsi.weight, 20.0 * 0.5);
        assert_eq!(macd.weight, 20.0);
    }

    #[test]
    fn test_collapsed_bands_fire_nothing() {
        let profile = HorizonProfile::for_horizon(Horizon::Medium);
        let set = IndicatorSet {
            bollinger: Some(BollingerValue {
                upper: 42.0,
                mid: 42.0,
                lower: 42.0,
            }),
            last_close: 42.0,
            ..empty_set()
        };
        let signals = generate(&set, &profile);
        assert!(!signals.iter().any(|s| s.name == "Bollinger Bands"));
    }
}
