//! The technical scoring engine.
//!
//! A pure, synchronous pipeline per symbol: preprocess -> indicators ->
//! signals -> aggregate. The screener fans the pipeline out over symbol
//! batches. No shared mutable state, no caching, no I/O outside the
//! screener's fetch callback.

pub mod aggregate;
pub mod indicators;
pub mod preprocess;
pub mod profile;
pub mod screener;
pub mod signals;

pub use preprocess::prepare;
pub use profile::HorizonProfile;
pub use screener::{screen, ScreenerOptions, ScreenerReport, SymbolFailure};

use crate::engine::indicators::IndicatorSet;
use crate::error::Result;
use crate::types::{Bar, Horizon, ScoreResult, Series};

/// Score a prepared series for one symbol and horizon.
///
/// Deterministic: identical inputs produce identical results apart from
/// the `computed_at` stamp.
pub fn analyze(symbol: &str, series: &Series, horizon: Horizon) -> ScoreResult {
    let profile = HorizonProfile::for_horizon(horizon);
    let set = IndicatorSet::compute(series, &profile);
    let generated = signals::generate(&set, &profile);
    aggregate::aggregate(symbol, generated, &set, &profile)
}

/// Preprocess raw bars and score them in one call — the single-symbol
/// entry point. The horizon's profile supplies the minimum bar count.
pub fn score_symbol(symbol: &str, raw: Vec<Bar>, horizon: Horizon) -> Result<ScoreResult> {
    let profile = HorizonProfile::for_horizon(horizon);
    let series = prepare(raw, profile.min_bars)?;
    Ok(analyze(symbol, &series, horizon))
}
