//! Raw bar validation and normalization.

use tracing::{debug, warn};

use crate::error::{EngineError, Result};
use crate::types::{Bar, Series};

/// Sort, deduplicate and validate raw bars into an immutable Series.
///
/// Bars are sorted by timestamp ascending and deduplicated by timestamp
/// (last write wins). Bars violating the OHLC invariants are dropped and
/// counted, never repaired. Fails when fewer than `min_bars` valid bars
/// remain.
pub fn prepare(mut raw: Vec<Bar>, min_bars: usize) -> Result<Series> {
    let total = raw.len();
    // stable sort keeps same-timestamp bars in arrival order, so the last
    // arrival wins the dedup below
    raw.sort_by_key(|b| b.time);

    let mut bars: Vec<Bar> = Vec::with_capacity(raw.len());
    let mut dropped = 0usize;
    for bar in raw {
        if let Err(err) = bar.validate() {
            debug!(%err, "dropping invalid bar");
            dropped += 1;
            continue;
        }
        if let Some(last) = bars.last_mut() {
            if last.time == bar.time {
                *last = bar;
                continue;
            }
        }
        bars.push(bar);
    }

    if dropped > 0 {
        warn!(dropped, total, "dropped invalid bars during preprocessing");
    }

    if bars.len() < min_bars {
        return Err(EngineError::InsufficientHistory {
            required: min_bars,
            available: bars.len(),
        });
    }

    Ok(Series::new(bars, dropped))
}
