//! Display formatting shared by the composed views.

use chrono::{DateTime, Utc};

/// Ranking score with one decimal, e.g. `98.5`.
pub fn score_text(score: f64) -> String {
    format!("{score:.1}")
}

/// Trend axis label, e.g. `Sep 3`.
pub fn axis_date(at: &DateTime<Utc>) -> String {
    at.format("%b %-d").to_string()
}

/// "Last updated" header date, e.g. `October 19`.
pub fn long_date(at: &DateTime<Utc>) -> String {
    at.format("%B %-d").to_string()
}

/// Donut slice label; blank when the share is undefined.
pub fn share_label(share_percent: Option<u32>) -> String {
    share_percent.map(|p| format!("{p}%")).unwrap_or_default()
}
