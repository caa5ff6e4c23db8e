use anyhow::Result;
use serde::Deserialize;
use tracing::warn;

/// Tier cutoffs for conversion scoring. Each value is the exclusive lower
/// bound of its tier.
///
/// Stored as a plain JSON object on disk:
/// ```json
/// {
///   "excellent": 0.5,
///   "high": 0.3,
///   "good": 0.2,
///   "average": 0.1,
///   "low": 0.05
/// }
/// ```
///
/// All five keys are required; a file missing any of them fails to load.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ScoreRates {
    pub excellent: f64,
    pub high: f64,
    pub good: f64,
    pub average: f64,
    pub low: f64,
}

impl Default for ScoreRates {
    fn default() -> Self {
        ScoreRates {
            excellent: 0.5,
            high: 0.3,
            good: 0.2,
            average: 0.1,
            low: 0.05,
        }
    }
}

impl ScoreRates {
    /// Loads cutoffs from a JSON file at `path`.
    ///
    /// Cutoffs that are not strictly descending are logged but kept as-is;
    /// scoring resolves them in first-match order.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let rates: ScoreRates = serde_json::from_str(&content)?;

        if !rates.is_strictly_descending() {
            warn!(?rates, "Cutoffs are not strictly descending, tiers resolve in first-match order");
        }

        Ok(rates)
    }

    /// True when cutoffs strictly decrease from `excellent` down to `low`.
    /// Out-of-order cutoffs make some tiers unreachable.
    pub fn is_strictly_descending(&self) -> bool {
        self.excellent > self.high
            && self.high > self.good
            && self.good > self.average
            && self.average > self.low
    }
}
