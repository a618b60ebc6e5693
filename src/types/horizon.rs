use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Intended holding period, selecting which indicators dominate scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Horizon {
    /// Days: momentum indicators dominate.
    Short,
    /// Weeks: trend and mean-reversion indicators dominate.
    Medium,
    /// Months: long moving averages dominate.
    Long,
}

impl Horizon {
    /// Parse an engine-level horizon token. Unrecognized tokens are an
    /// error, never a silent default.
    pub fn parse(s: &str) -> Result<Self, EngineError> {
        match s.to_lowercase().as_str() {
            "short" => Ok(Self::Short),
            "medium" => Ok(Self::Medium),
            "long" => Ok(Self::Long),
            other => Err(EngineError::UnknownHorizon(other.to_string())),
        }
    }

    /// Get display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Short => "Short",
            Self::Medium => "Medium",
            Self::Long => "Long",
        }
    }
}
