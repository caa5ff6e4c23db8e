//! Data types used by the batch scoring summary.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// Count and share of scored rows that landed in a single tier.
#[derive(Serialize)]
pub struct TierCount {
    pub(crate) count: usize,
    pub(crate) share: f64,
}

/// Distribution of a scored batch across tiers, plus rate statistics.
#[derive(Serialize)]
pub struct ScoreSummary {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) total: usize,
    pub(crate) mean_rate: f64,
    pub(crate) stddev_rate: f64,
    pub(crate) tiers: HashMap<String, TierCount>,
}
