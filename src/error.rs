use thiserror::Error;

/// Engine error types.
#[derive(Error, Debug)]
pub enum EngineError {
    /// A bar violating the OHLC invariants. Recoverable: the preprocessor
    /// drops the bar and reports the count.
    #[error("invalid bar at {time}: {detail}")]
    InvalidBar { time: i64, detail: String },

    /// The series is shorter than the horizon's minimum window. Fatal for
    /// that symbol only.
    #[error("insufficient history: need {required} bars, have {available}")]
    InsufficientHistory { required: usize, available: usize },

    /// The data collaborator failed to produce a series.
    #[error("fetch failed: {0}")]
    FetchFailed(String),

    /// The data collaborator exceeded its per-symbol budget.
    #[error("fetch for {symbol} timed out after {waited_ms} ms")]
    FetchTimeout { symbol: String, waited_ms: u64 },

    /// The caller supplied an unrecognized horizon token. Fatal for the
    /// whole request, never silently defaulted.
    #[error("unknown horizon: {0:?}")]
    UnknownHorizon(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
