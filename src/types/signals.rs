use serde::{Deserialize, Serialize};

use super::Horizon;

/// Direction of a single indicator signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SignalDirection {
    Buy,
    Sell,
    Neutral,
}

impl SignalDirection {
    /// Contribution sign for score aggregation.
    pub fn sign(&self) -> f64 {
        match self {
            SignalDirection::Buy => 1.0,
            SignalDirection::Sell => -1.0,
            SignalDirection::Neutral => 0.0,
        }
    }

    /// Get display label for this direction.
    pub fn label(&self) -> &'static str {
        match self {
            SignalDirection::Buy => "Buy",
            SignalDirection::Sell => "Sell",
            SignalDirection::Neutral => "Neutral",
        }
    }
}

/// A discrete directional interpretation of one indicator's current value.
/// Read-only once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    /// Indicator name (e.g. "RSI (14)").
    pub name: String,
    pub direction: SignalDirection,
    /// Non-negative aggregation weight, after volume confirmation.
    pub weight: f64,
    /// Human-readable explanation of the signal.
    pub reason: String,
}

/// Categorical recommendation derived from the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    StrongBuy,
    Buy,
    Hold,
    Sell,
    StrongSell,
}

impl Recommendation {
    /// Map a 0-100 score into its band (inclusive lower bounds). The bands
    /// partition [0, 100]: exactly one recommendation applies to any score.
    pub fn from_score(score: f64) -> Self {
        match score {
            s if s >= 75.0 => Recommendation::StrongBuy,
            s if s >= 60.0 => Recommendation::Buy,
            s if s >= 40.0 => Recommendation::Hold,
            s if s >= 25.0 => Recommendation::Sell,
            _ => Recommendation::StrongSell,
        }
    }

    /// Get display label for this recommendation.
    pub fn label(&self) -> &'static str {
        match self {
            Recommendation::StrongBuy => "Strong Buy",
            Recommendation::Buy => "Buy",
            Recommendation::Hold => "Hold",
            Recommendation::Sell => "Sell",
            Recommendation::StrongSell => "Strong Sell",
        }
    }
}

/// Signed percentage range the price is expected to move within the horizon.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpectedVariation {
    pub low_pct: f64,
    pub high_pct: f64,
}

/// Aggregated scoring output for one symbol/horizon. Immutable value
/// object; the unit returned to callers and ranked by the screener.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub symbol: String,
    pub horizon: Horizon,
    /// 0-100 strength value; 50 is the no-information baseline.
    pub score: f64,
    /// 0-100 measure of signal agreement and coverage backing the score.
    pub confidence: f64,
    pub recommendation: Recommendation,
    /// Contributing signals in profile priority order.
    pub signals: Vec<Signal>,
    pub expected_variation: ExpectedVariation,
    /// Unix timestamp (milliseconds) when computed.
    pub computed_at: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_band_edges() {
        assert_eq!(Recommendation::from_score(100.0), Recommendation::StrongBuy);
        assert_eq!(Recommendation::from_score(75.0), Recommendation::StrongBuy);
        assert_eq!(Recommendation::from_score(74.9), Recommendation::Buy);
        assert_eq!(Recommendation::from_score(60.0), Recommendation::Buy);
        assert_eq!(Recommendation::from_score(59.9), Recommendation::Hold);
        assert_eq!(Recommendation::from_score(40.0), Recommendation::Hold);
        assert_eq!(Recommendation::from_score(39.9), Recommendation::Sell);
        assert_eq!(Recommendation::from_score(25.0), Recommendation::Sell);
        assert_eq!(Recommendation::from_score(24.9), Recommendation::StrongSell);
        assert_eq!(Recommendation::from_score(0.0), Recommendation::StrongSell);
    }

    #[test]
    fn test_direction_sign() {
        assert_eq!(SignalDirection::Buy.sign(), 1.0);
        assert_eq!(SignalDirection::Sell.sign(), -1.0);
        assert_eq!(SignalDirection::Neutral.sign(), 0.0);
    }
}
