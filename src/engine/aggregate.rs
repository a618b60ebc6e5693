//! Weighted signal aggregation into the final score result.

use chrono::Utc;

use crate::engine::indicators::IndicatorSet;
use crate::engine::profile::HorizonProfile;
use crate::types::{ExpectedVariation, Recommendation, ScoreResult, Signal, SignalDirection};

/// Neutral baseline representing "no information".
const BASELINE: f64 = 50.0;
/// Relative size of the expected-variation range on the side the score
/// points away from.
const COUNTER_BIAS: f64 = 0.3;
/// Agreement vs coverage mix in the confidence formula.
const AGREEMENT_WEIGHT: f64 = 0.6;
const COVERAGE_WEIGHT: f64 = 0.4;

/// Combine weighted signals into score, confidence, recommendation and the
/// expected-variation estimate. Deterministic: identical inputs yield
/// identical output apart from the `computed_at` stamp.
pub fn aggregate(
    symbol: &str,
    signals: Vec<Signal>,
    set: &IndicatorSet,
    profile: &HorizonProfile,
) -> ScoreResult {
    let net: f64 = signals
        .iter()
        .map(|s| s.direction.sign() * s.weight)
        .sum();
    let score = (BASELINE + net).clamp(0.0, 100.0);

    ScoreResult {
        symbol: symbol.to_string(),
        horizon: profile.horizon,
        score,
        confidence: confidence(&signals, profile),
        recommendation: Recommendation::from_score(score),
        signals,
        expected_variation: expected_variation(score, set, profile),
        computed_at: Utc::now().timestamp_millis(),
    }
}

/// Confidence blends directional agreement with weight coverage:
/// agreement = |buy - sell| / committed, coverage = committed / max mass,
/// confidence = (0.6 * agreement + 0.4 * coverage) * 100.
///
/// An even buy/sell split zeroes agreement (the mixed-signal floor); no
/// directional signals at all yield zero confidence.
fn confidence(signals: &[Signal], profile: &HorizonProfile) -> f64 {
    let buy: f64 = directional_weight(signals, SignalDirection::Buy);
    let sell: f64 = directional_weight(signals, SignalDirection::Sell);
    let committed = buy + sell;
    if committed <= 0.0 {
        return 0.0;
    }

    let agreement = (buy - sell).abs() / committed;
    let coverage = (committed / profile.max_weight()).min(1.0);
    ((AGREEMENT_WEIGHT * agreement + COVERAGE_WEIGHT * coverage) * 100.0).clamp(0.0, 100.0)
}

fn directional_weight(signals: &[Signal], direction: SignalDirection) -> f64 {
    signals
        .iter()
        .filter(|s| s.direction == direction)
        .map(|s| s.weight)
        .sum()
}

/// ATR-scaled signed range, clamped into the horizon's variation band and
/// biased toward the net score direction.
fn expected_variation(
    score: f64,
    set: &IndicatorSet,
    profile: &HorizonProfile,
) -> ExpectedVariation {
    let (band_min, band_max) = profile.variation_band;
    let magnitude = match set.atr {
        Some(atr) if set.last_close > 0.0 => {
            let atr_pct = atr / set.last_close * 100.0;
            (atr_pct * profile.variation_scale).clamp(band_min, band_max)
        }
        _ => (band_min + band_max) / 2.0,
    };

    if score > BASELINE {
        ExpectedVariation {
            low_pct: -magnitude * COUNTER_BIAS,
            high_pct: magnitude,
        }
    } else if score < BASELINE {
        ExpectedVariation {
            low_pct: -magnitude,
            high_pct: magnitude * COUNTER_BIAS,
        }
    } else {
        ExpectedVariation {
            low_pct: -magnitude,
            high_pct: magnitude,
        }
    }
}
