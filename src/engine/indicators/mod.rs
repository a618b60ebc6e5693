//! Stateless windowed indicator computations.
//!
//! Every indicator is a pure function of a series and its window
//! parameters. `None` encodes the warm-up period (fewer bars than the
//! window needs), never a default value.

pub mod atr;
pub mod bollinger;
pub mod macd;
pub mod momentum;
pub mod moving_average;
pub mod rsi;
pub mod volume;

pub use atr::atr;
pub use bollinger::{bollinger, BollingerValue};
pub use macd::{macd, MacdValue};
pub use momentum::momentum;
pub use moving_average::{ema, sma};
pub use rsi::rsi;
pub use volume::volume_sma;

use crate::engine::profile::{
    HorizonProfile, IndicatorKind, ATR_WINDOW, BOLLINGER_K, BOLLINGER_WINDOW, MACD_FAST,
    MACD_SIGNAL, MACD_SLOW, MA_LONG, MA_SHORT, RSI_WINDOW, VOLUME_WINDOW,
};
use crate::types::Series;

/// Latest value of every indicator the profile enables, computed fresh from
/// a series and discarded after signal generation. `None` means the
/// indicator is still warming up.
#[derive(Debug, Clone)]
pub struct IndicatorSet {
    pub rsi: Option<f64>,
    pub macd: Option<MacdValue>,
    pub ma20: Option<f64>,
    pub ma50: Option<f64>,
    pub bollinger: Option<BollingerValue>,
    /// Always computed: scales the expected-variation estimate.
    pub atr: Option<f64>,
    /// Always computed: the volume-confirmation reference.
    pub volume_sma: Option<f64>,
    pub momentum: Option<f64>,
    pub last_close: f64,
    pub last_volume: f64,
}

impl IndicatorSet {
    /// Compute the indicator values a profile needs.
    pub fn compute(series: &Series, profile: &HorizonProfile) -> Self {
        let closes = series.closes();
        let needs_trend = profile.uses(IndicatorKind::Trend);
        let needs_ma50 = needs_trend || profile.uses(IndicatorKind::LongMa);

        Self {
            rsi: profile
                .uses(IndicatorKind::Rsi)
                .then(|| rsi(series, RSI_WINDOW))
                .flatten(),
            macd: profile
                .uses(IndicatorKind::Macd)
                .then(|| macd(series, MACD_FAST, MACD_SLOW, MACD_SIGNAL))
                .flatten(),
            ma20: needs_trend.then(|| sma(&closes, MA_SHORT)).flatten(),
            ma50: needs_ma50.then(|| sma(&closes, MA_LONG)).flatten(),
            bollinger: profile
                .uses(IndicatorKind::Bollinger)
                .then(|| bollinger(series, BOLLINGER_WINDOW, BOLLINGER_K))
                .flatten(),
            atr: atr(series, ATR_WINDOW),
            volume_sma: volume_sma(series, VOLUME_WINDOW),
            momentum: profile
                .uses(IndicatorKind::Momentum)
                .then(|| momentum(series, profile.momentum_window))
                .flatten(),
            last_close: series.last().map(|b| b.close).unwrap_or(0.0),
            last_volume: series.last().map(|b| b.volume).unwrap_or(0.0),
        }
    }
}
