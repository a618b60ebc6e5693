//! Chat front-end translation layer.
//!
//! Pure mapping tables and text formatting for the messaging collaborator.
//! Nothing here feeds back into the engine; the engine takes its inputs as
//! explicit parameters only.

use crate::engine::screener::{ScreenerReport, SymbolFailure};
use crate::error::EngineError;
use crate::types::{Horizon, ScoreResult};

/// Map a chat keyword to a horizon. Accepts the English tokens and the
/// Spanish command words the messaging front end uses. Unknown keywords
/// are surfaced immediately, never defaulted.
pub fn parse_horizon_keyword(token: &str) -> Result<Horizon, EngineError> {
    match token.to_lowercase().as_str() {
        "short" | "corto" => Ok(Horizon::Short),
        "medium" | "medio" | "mediano" => Ok(Horizon::Medium),
        "long" | "largo" => Ok(Horizon::Long),
        other => Err(EngineError::UnknownHorizon(other.to_string())),
    }
}

/// Default screener lists per horizon. Documentation defaults the front
/// end may override — a presentation concern, not engine behavior.
pub fn default_symbols(horizon: Horizon) -> &'static [&'static str] {
    match horizon {
        Horizon::Short => &["BTC", "ETH", "SOL", "NVDA", "TSLA"],
        Horizon::Medium => &["AAPL", "AMZN", "GOOGL", "MSFT", "SPY"],
        Horizon::Long => &["AAPL", "MSFT", "QQQ", "SPY", "VTI"],
    }
}

/// Render a score result into the reply text the front end sends.
pub fn format_result(result: &ScoreResult) -> String {
    let mut out = format!(
        "{} [{}] score {:.0}/100, confidence {:.0}% -> {} (expected move {:+.1}%..{:+.1}%)",
        result.symbol,
        result.horizon.name(),
        result.score,
        result.confidence,
        result.recommendation.label(),
        result.expected_variation.low_pct,
        result.expected_variation.high_pct,
    );
    for signal in &result.signals {
        out.push_str(&format!(
            "\n  - {} [{}]: {}",
            signal.name,
            signal.direction.label(),
            signal.reason
        ));
    }
    out
}

/// Render a failed symbol. Failed symbols always appear in the reply.
pub fn format_failure(failure: &SymbolFailure) -> String {
    format!("{} could not be analyzed: {}", failure.symbol, failure.reason)
}

/// Render a full screener report, ranked results first.
pub fn format_report(report: &ScreenerReport) -> String {
    let mut sections = Vec::with_capacity(report.ranked.len() + report.failures.len());
    for (position, result) in report.ranked.iter().enumerate() {
        sections.push(format!("#{} {}", position + 1, format_result(result)));
    }
    for failure in &report.failures {
        sections.push(format_failure(failure));
    }
    sections.join("\n\n")
}
