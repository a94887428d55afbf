use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A ranked video with its comment quality score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredEntity {
    pub id: i64,
    pub title: String,
    pub score: f64,
    pub observed_at: DateTime<Utc>,
}

impl ScoredEntity {
    pub fn new(id: i64, title: impl Into<String>, score: f64, observed_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: title.into(),
            score,
            observed_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryPoint {
    pub at: DateTime<Utc>,
    pub score: f64,
}

impl HistoryPoint {
    pub fn new(at: DateTime<Utc>, score: f64) -> Self {
        Self { at, score }
    }
}

/// Key used for video `id` in a [`HistoryMap`].
pub fn history_key(id: i64) -> String {
    id.to_string()
}

/// Per-video score history keyed by the stringified video id.
///
/// Sequences are kept exactly as the source delivered them.
pub type HistoryMap = HashMap<String, Vec<HistoryPoint>>;
