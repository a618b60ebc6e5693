//! Multi-symbol screening with bounded fetch fan-out.
//!
//! Each symbol's fetch+score is an independent unit of work; units run
//! concurrently up to the configured fan-out. Per-symbol failures are
//! isolated into explicit failure entries and never abort the batch.

use std::future::Future;
use std::time::Duration;

use futures_util::stream::{self, StreamExt};
use serde::Serialize;
use tokio::time::timeout;
use tracing::{debug, info};

use crate::engine::analyze;
use crate::engine::preprocess::prepare;
use crate::engine::profile::HorizonProfile;
use crate::error::EngineError;
use crate::types::{Bar, Horizon, ScoreResult};

/// Screener tuning supplied by the caller.
#[derive(Debug, Clone)]
pub struct ScreenerOptions {
    /// Maximum symbols fetched and scored at once.
    pub concurrency: usize,
    /// Per-symbol budget for the fetch callback; a symbol over budget is
    /// reported as failed, not retried.
    pub fetch_timeout: Duration,
}

impl Default for ScreenerOptions {
    fn default() -> Self {
        Self {
            concurrency: 4,
            fetch_timeout: Duration::from_secs(3),
        }
    }
}

/// A symbol the screener could not analyze, with the reason. Failed
/// symbols are always reported, never silently omitted.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SymbolFailure {
    pub symbol: String,
    pub reason: String,
}

/// Ranked results plus explicit per-symbol failures.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenerReport {
    pub ranked: Vec<ScoreResult>,
    pub failures: Vec<SymbolFailure>,
}

/// Run the scoring pipeline over every symbol and rank the results.
///
/// `fetch` is the caller-supplied bridge to the market-data collaborator.
/// Dropping the returned future abandons in-flight fetches; no partial
/// state survives a cancelled batch.
pub async fn screen<F, Fut>(
    symbols: &[String],
    horizon: Horizon,
    options: &ScreenerOptions,
    fetch: F,
) -> ScreenerReport
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<Vec<Bar>, EngineError>>,
{
    let profile = HorizonProfile::for_horizon(horizon);
    let fetch = &fetch;
    let profile_ref = &profile;
    let budget = options.fetch_timeout;

    let outcomes: Vec<(String, Result<ScoreResult, EngineError>)> =
        stream::iter(symbols.iter().cloned())
            .map(|symbol| async move {
                let outcome = score_one(&symbol, profile_ref, budget, fetch).await;
                (symbol, outcome)
            })
            .buffer_unordered(options.concurrency.max(1))
            .collect()
            .await;

    let mut ranked = Vec::new();
    let mut failures = Vec::new();
    for (symbol, outcome) in outcomes {
        match outcome {
            Ok(result) => ranked.push(result),
            Err(err) => {
                debug!(%symbol, %err, "symbol excluded from ranking");
                failures.push(SymbolFailure {
                    symbol,
                    reason: err.to_string(),
                });
            }
        }
    }

    rank(&mut ranked);
    failures.sort_by(|a, b| a.symbol.cmp(&b.symbol));

    info!(
        horizon = horizon.name(),
        scored = ranked.len(),
        failed = failures.len(),
        "screen complete"
    );
    ScreenerReport { ranked, failures }
}

/// One independent fetch+score unit.
async fn score_one<F, Fut>(
    symbol: &str,
    profile: &HorizonProfile,
    budget: Duration,
    fetch: &F,
) -> Result<ScoreResult, EngineError>
where
    F: Fn(String) -> Fut,
    Fut: Future<Output = Result<Vec<Bar>, EngineError>>,
{
    let raw = match timeout(budget, fetch(symbol.to_string())).await {
        Ok(result) => result?,
        Err(_) => {
            return Err(EngineError::FetchTimeout {
                symbol: symbol.to_string(),
                waited_ms: budget.as_millis() as u64,
            })
        }
    };

    let series = prepare(raw, profile.min_bars)?;
    Ok(analyze(symbol, &series, profile.horizon))
}

/// Total order: score descending, then confidence descending, then symbol
/// ascending.
fn rank(results: &mut [ScoreResult]) {
    results.sort_by(|a, b| {
        b.score
            .total_cmp(&a.score)
            .then_with(|| b.confidence.total_cmp(&a.confidence))
            .then_with(|| a.symbol.cmp(&b.symbol))
    });
}
