use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::scoring::rates::ScoreRates;
use crate::scoring::score::{ConversionScore, conversion_score};

/// A single partner rate row read from an input CSV file.
///
/// Rates arrive already computed; this tool only assigns tiers.
#[derive(Debug, Deserialize)]
pub struct RateRecord {
    pub partner_id: String,
    pub conversion_rate: f64,
}

/// A scored row, appended to the output CSV or printed as JSON.
#[derive(Debug, Default, Serialize)]
pub struct ScoredRecord {
    pub timestamp: DateTime<Utc>,
    pub partner_id: Option<String>,
    pub conversion_rate: f64,
    pub score: ConversionScore,
}

impl ScoredRecord {
    /// Scores `rate` against `rates` and stamps the record with the current time.
    pub fn from_rate(rate: f64, rates: &ScoreRates) -> Self {
        ScoredRecord {
            timestamp: Utc::now(),
            partner_id: None,
            conversion_rate: rate,
            score: conversion_score(rate, rates),
        }
    }

    /// Set partner metadata.
    pub fn with_partner(mut self, partner_id: &str) -> Self {
        self.partner_id = Some(partner_id.to_string());
        self
    }
}
