use serde::Serialize;
use std::fmt;

use crate::scoring::rates::ScoreRates;

/// Qualitative tier assigned to a partner conversion rate.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversionScore {
    Excellent,
    High,
    Good,
    Average,
    Low,
    #[default]
    Unknown,
}

impl ConversionScore {
    /// The lowercase label used in CSV and JSON output.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConversionScore::Excellent => "excellent",
            ConversionScore::High => "high",
            ConversionScore::Good => "good",
            ConversionScore::Average => "average",
            ConversionScore::Low => "low",
            ConversionScore::Unknown => "unknown",
        }
    }

    /// Numeric rank for ordering rows by tier. Higher is better.
    pub fn rank(&self) -> u8 {
        match self {
            ConversionScore::Excellent => 5,
            ConversionScore::High => 4,
            ConversionScore::Good => 3,
            ConversionScore::Average => 2,
            ConversionScore::Low => 1,
            ConversionScore::Unknown => 0,
        }
    }
}

impl fmt::Display for ConversionScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts a conversion rate into a qualitative tier.
///
/// | Range             | Tier      |
/// |-------------------|-----------|
/// | > rates.excellent | excellent |
/// | > rates.high      | high      |
/// | > rates.good      | good      |
/// | > rates.average   | average   |
/// | > rates.low       | low       |
/// | otherwise         | unknown   |
///
/// Each cutoff is an exclusive lower bound: a rate exactly equal to a
/// cutoff lands in the tier below it. NaN compares false against every
/// cutoff and maps to `unknown`. Cutoffs that are not strictly descending
/// still resolve in this first-match order.
pub fn conversion_score(rate: f64, rates: &ScoreRates) -> ConversionScore {
    match rate {
        r if r > rates.excellent => ConversionScore::Excellent,
        r if r > rates.high => ConversionScore::High,
        r if r > rates.good => ConversionScore::Good,
        r if r > rates.average => ConversionScore::Average,
        r if r > rates.low => ConversionScore::Low,
        _ => ConversionScore::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_boundaries() {
        let r = ScoreRates::default();
        assert_eq!(conversion_score(0.60, &r), ConversionScore::Excellent);
        assert_eq!(conversion_score(0.51, &r), ConversionScore::Excellent);
        assert_eq!(conversion_score(0.50, &r), ConversionScore::High);
        assert_eq!(conversion_score(0.30, &r), ConversionScore::Good);
        assert_eq!(conversion_score(0.25, &r), ConversionScore::Good);
        assert_eq!(conversion_score(0.20, &r), ConversionScore::Average);
        assert_eq!(conversion_score(0.10, &r), ConversionScore::Low);
        assert_eq!(conversion_score(0.07, &r), ConversionScore::Low);
        assert_eq!(conversion_score(0.05, &r), ConversionScore::Unknown);
        assert_eq!(conversion_score(0.00, &r), ConversionScore::Unknown);
        assert_eq!(conversion_score(-1.0, &r), ConversionScore::Unknown);
    }

    #[test]
    fn test_score_non_finite() {
        let r = ScoreRates::default();
        assert_eq!(conversion_score(f64::NAN, &r), ConversionScore::Unknown);
        assert_eq!(conversion_score(f64::INFINITY, &r), ConversionScore::Excellent);
        assert_eq!(conversion_score(f64::NEG_INFINITY, &r), ConversionScore::Unknown);
    }

    #[test]
    fn test_score_is_deterministic() {
        let r = ScoreRates::default();
        assert_eq!(conversion_score(0.37, &r), conversion_score(0.37, &r));
    }

    #[test]
    fn test_rank_monotonic_in_rate() {
        let r = ScoreRates::default();
        let samples = [-0.5, 0.0, 0.06, 0.15, 0.25, 0.4, 0.9, 2.0];
        for pair in samples.windows(2) {
            let lower = conversion_score(pair[0], &r);
            let upper = conversion_score(pair[1], &r);
            assert!(upper.rank() >= lower.rank(), "{lower} outranks {upper}");
        }
    }

    #[test]
    fn test_out_of_order_cutoffs_follow_first_match() {
        // good sits above high, so the good tier can never win
        let r = ScoreRates {
            excellent: 0.5,
            high: 0.2,
            good: 0.3,
            average: 0.1,
            low: 0.05,
        };
        assert_eq!(conversion_score(0.25, &r), ConversionScore::High);
    }

    #[test]
    fn test_labels() {
        assert_eq!(ConversionScore::Excellent.to_string(), "excellent");
        assert_eq!(ConversionScore::Unknown.as_str(), "unknown");
        assert_eq!(ConversionScore::default(), ConversionScore::Unknown);
    }
}
