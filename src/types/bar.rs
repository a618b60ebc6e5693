use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// One time-period's open, high, low, close price and traded volume.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bar {
    /// Unix timestamp (milliseconds) of the bar's period start.
    pub time: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    /// Check the OHLC invariants: all fields finite, high >= max(open, close),
    /// low <= min(open, close), volume >= 0.
    pub fn validate(&self) -> Result<()> {
        let fields = [self.open, self.high, self.low, self.close, self.volume];
        if fields.iter().any(|v| !v.is_finite()) {
            return Err(self.invalid("non-finite field"));
        }
        if self.high < self.open.max(self.close) {
            return Err(self.invalid("high below open/close"));
        }
        if self.low > self.open.min(self.close) {
            return Err(self.invalid("low above open/close"));
        }
        if self.volume < 0.0 {
            return Err(self.invalid("negative volume"));
        }
        Ok(())
    }

    fn invalid(&self, detail: &str) -> EngineError {
        EngineError::InvalidBar {
            time: self.time,
            detail: detail.to_string(),
        }
    }
}

/// Time-ordered OHLCV series for one symbol.
///
/// Constructed only by the preprocessor: timestamps strictly increasing, no
/// duplicates, invalid bars already dropped. Immutable afterwards — each
/// pipeline invocation owns its series, consumes it once and discards it.
#[derive(Debug, Clone)]
pub struct Series {
    bars: Vec<Bar>,
    dropped: usize,
}

impl Series {
    pub(crate) fn new(bars: Vec<Bar>, dropped: usize) -> Self {
        Self { bars, dropped }
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// Count of raw bars discarded during preprocessing.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Close prices in time order.
    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }
}
