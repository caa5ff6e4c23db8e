use crate::records::ScoredRecord;
use crate::scoring::types::{ScoreSummary, TierCount};
use chrono::Utc;
use std::collections::HashMap;

/// Summarizes scored rows into per-tier counts and shares along with the
/// mean and population standard deviation of the underlying rates.
pub fn summarize(rows: &[ScoredRecord]) -> ScoreSummary {
    let rates: Vec<f64> = rows.iter().map(|r| r.conversion_rate).collect();
    let mean_rate = mean(&rates);
    let stddev_rate = stddev(&rates, mean_rate);

    let total = rows.len();

    let mut counts: HashMap<&'static str, usize> = HashMap::new();
    for row in rows {
        *counts.entry(row.score.as_str()).or_default() += 1;
    }

    let tiers = counts
        .into_iter()
        .map(|(tier, count)| {
            let share = count as f64 / total as f64;
            (tier.to_string(), TierCount { count, share })
        })
        .collect();

    ScoreSummary {
        generated_at: Utc::now(),
        total,
        mean_rate,
        stddev_rate,
        tiers,
    }
}

/// Arithmetic mean. Returns 0.0 for empty input.
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation given a pre-computed mean.
/// Returns 0.0 for empty input.
fn stddev(values: &[f64], mean: f64) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64;

    variance.sqrt()
}
