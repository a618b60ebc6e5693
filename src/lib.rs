//! Augur - multi-horizon technical scoring engine for OHLCV price series.

pub mod chat;
pub mod config;
pub mod engine;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use engine::{analyze, prepare, score_symbol, screen, ScreenerOptions, ScreenerReport};
pub use error::{EngineError, Result};
pub use types::*;
