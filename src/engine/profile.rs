//! Per-horizon scoring profiles.
//!
//! Profiles are static data, not behavior: which indicators fire, their
//! weights and priority order, window sizes, and the target variation band.
//! Selecting a horizon only changes which indicators are computed and how
//! they are weighted.

use crate::types::Horizon;

pub const RSI_WINDOW: usize = 14;
pub const MACD_FAST: usize = 12;
pub const MACD_SLOW: usize = 26;
pub const MACD_SIGNAL: usize = 9;
pub const MA_SHORT: usize = 20;
pub const MA_LONG: usize = 50;
pub const BOLLINGER_WINDOW: usize = 20;
pub const BOLLINGER_K: f64 = 2.0;
pub const ATR_WINDOW: usize = 14;
pub const VOLUME_WINDOW: usize = 20;

/// Indicators a profile can enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorKind {
    Rsi,
    Macd,
    /// Price vs MA20 vs MA50 ordering.
    Trend,
    /// Price position against MA50 alone.
    LongMa,
    Bollinger,
    /// Rate-of-change over the profile's momentum window.
    Momentum,
}

/// Weight table entry.
#[derive(Debug, Clone, Copy)]
pub struct WeightedIndicator {
    pub kind: IndicatorKind,
    pub weight: f64,
}

const fn weighted(kind: IndicatorKind, weight: f64) -> WeightedIndicator {
    WeightedIndicator { kind, weight }
}

const SHORT_WEIGHTS: &[WeightedIndicator] = &[
    weighted(IndicatorKind::Rsi, 20.0),
    weighted(IndicatorKind::Macd, 20.0),
    weighted(IndicatorKind::Momentum, 10.0),
];

const MEDIUM_WEIGHTS: &[WeightedIndicator] = &[
    weighted(IndicatorKind::Trend, 20.0),
    weighted(IndicatorKind::Bollinger, 15.0),
    weighted(IndicatorKind::Macd, 15.0),
];

const LONG_WEIGHTS: &[WeightedIndicator] = &[
    weighted(IndicatorKind::LongMa, 25.0),
    weighted(IndicatorKind::Trend, 15.0),
    weighted(IndicatorKind::Momentum, 10.0),
];

/// Static per-horizon configuration.
#[derive(Debug, Clone)]
pub struct HorizonProfile {
    pub horizon: Horizon,
    /// Enabled indicators with weights, in signal priority order. The order
    /// is stable and preserved into the final result.
    pub weights: &'static [WeightedIndicator],
    /// Minimum valid bars the pipeline needs (largest warm-up + 1).
    pub min_bars: usize,
    /// How many bars the caller should fetch.
    pub lookback_bars: usize,
    /// Momentum rate-of-change window.
    pub momentum_window: usize,
    /// Expected-variation band as (min_pct, max_pct).
    pub variation_band: (f64, f64),
    /// Multiplier applied to the ATR percentage before clamping into the band.
    pub variation_scale: f64,
}

impl HorizonProfile {
    /// Profile for a horizon.
    pub fn for_horizon(horizon: Horizon) -> Self {
        match horizon {
            Horizon::Short => Self {
                horizon,
                weights: SHORT_WEIGHTS,
                // MACD(12,26,9) has the largest warm-up of the short set
                min_bars: MACD_SLOW + MACD_SIGNAL + 1,
                lookback_bars: 60,
                momentum_window: 10,
                variation_band: (2.0, 5.0),
                variation_scale: 2.0,
            },
            Horizon::Medium => Self {
                horizon,
                weights: MEDIUM_WEIGHTS,
                min_bars: MA_LONG,
                lookback_bars: 90,
                momentum_window: 10,
                variation_band: (5.0, 15.0),
                variation_scale: 4.0,
            },
            Horizon::Long => Self {
                horizon,
                weights: LONG_WEIGHTS,
                min_bars: 91,
                lookback_bars: 250,
                momentum_window: 90,
                variation_band: (15.0, 50.0),
                variation_scale: 10.0,
            },
        }
    }

    /// Whether the profile enables an indicator.
    pub fn uses(&self, kind: IndicatorKind) -> bool {
        self.weights.iter().any(|w| w.kind == kind)
    }

    /// Maximum committable weight mass.
    pub fn max_weight(&self) -> f64 {
        self.weights.iter().map(|w| w.weight).sum()
    }
}
