use std::env;
use std::time::Duration;

use crate::engine::screener::ScreenerOptions;

/// Screener tuning loaded from the environment.
///
/// Bootstrap-side only: the engine never reads ambient state and receives
/// these values as explicit parameters.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum concurrent fetch+score units in a batch.
    pub screener_concurrency: usize,
    /// Per-symbol fetch budget in milliseconds.
    pub fetch_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            screener_concurrency: env::var("SCREENER_CONCURRENCY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(4),
            fetch_timeout_ms: env::var("FETCH_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3_000),
        }
    }

    /// Screener options view of this config.
    pub fn screener_options(&self) -> ScreenerOptions {
        ScreenerOptions {
            concurrency: self.screener_concurrency,
            fetch_timeout: Duration::from_millis(self.fetch_timeout_ms),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
