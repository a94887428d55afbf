//! Wire format of the dashboard document.
//!
//! These types mirror the JSON exactly (camelCase keys, ISO-8601 strings) and
//! never leave this module: [`decode`] validates them and converts them into
//! the typed [`DashboardSnapshot`] straight away.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::Deserialize;
use validator::Validate;

use crate::error::{DashboardError, Result};
use crate::models::{
    Category, DashboardSnapshot, FocusSlot, FocusSummary, HistoryMap, HistoryPoint, ScoredEntity,
};

#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
struct RawDashboard {
    #[validate(nested)]
    video_cqs_data: Vec<RawVideo>,
    video_cqs_history: HashMap<String, Vec<RawHistoryPoint>>,
    #[validate(nested)]
    product_discussion_data: Vec<RawCategory>,
    #[validate(nested)]
    video_type_data: Vec<RawCategory>,
    next_month_focus_data: RawFocus,
}

#[derive(Debug, Deserialize, Validate)]
struct RawVideo {
    id: i64,
    #[validate(length(min = 1))]
    title: String,
    #[validate(range(min = 0.0))]
    cqs: f64,
    timestamp: String,
}

#[derive(Debug, Deserialize)]
struct RawHistoryPoint {
    t: String,
    cqs: f64,
}

#[derive(Debug, Deserialize, Validate)]
struct RawCategory {
    #[validate(length(min = 1))]
    name: String,
    #[validate(range(min = 0.0))]
    value: f64,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFocus {
    top_quality_comment_video: RawFocusSlot,
    most_discussed_product: RawFocusSlot,
}

#[derive(Debug, Deserialize)]
struct RawFocusSlot {
    title: String,
    metric: String,
}

/// Decode and validate a dashboard document.
///
/// Any syntax error, missing field, wrong type or out-of-range value is
/// reported as [`DashboardError::SourceUnavailable`].
pub fn decode(bytes: &[u8]) -> Result<DashboardSnapshot> {
    let raw: RawDashboard = serde_json::from_slice(bytes).map_err(|e| {
        DashboardError::SourceUnavailable(format!("Invalid dashboard document: {e}"))
    })?;

    raw.validate().map_err(|e| {
        DashboardError::SourceUnavailable(format!("Dashboard document failed validation: {e}"))
    })?;

    raw.into_snapshot()
}

impl RawDashboard {
    fn into_snapshot(self) -> Result<DashboardSnapshot> {
        let mut seen = HashSet::with_capacity(self.video_cqs_data.len());
        let mut videos = Vec::with_capacity(self.video_cqs_data.len());

        for raw in self.video_cqs_data {
            if !seen.insert(raw.id) {
                return Err(malformed(format!("duplicate video id {}", raw.id)));
            }
            let observed_at = parse_timestamp(&raw.timestamp).ok_or_else(|| {
                malformed(format!(
                    "video {} has an invalid timestamp '{}'",
                    raw.id, raw.timestamp
                ))
            })?;
            videos.push(ScoredEntity::new(raw.id, raw.title, raw.cqs, observed_at));
        }

        let mut history = HistoryMap::with_capacity(self.video_cqs_history.len());
        for (key, points) in self.video_cqs_history {
            let mut decoded = Vec::with_capacity(points.len());
            for point in points {
                if point.cqs < 0.0 {
                    return Err(malformed(format!(
                        "history for video {key} has a negative score"
                    )));
                }
                let at = parse_timestamp(&point.t).ok_or_else(|| {
                    malformed(format!(
                        "history for video {key} has an invalid timestamp '{}'",
                        point.t
                    ))
                })?;
                decoded.push(HistoryPoint::new(at, point.cqs));
            }
            history.insert(key, decoded);
        }

        Ok(DashboardSnapshot {
            videos,
            history,
            product_discussion: into_categories(self.product_discussion_data),
            video_types: into_categories(self.video_type_data),
            focus: FocusSummary {
                top_quality_comment_video: self.next_month_focus_data.top_quality_comment_video.into(),
                most_discussed_product: self.next_month_focus_data.most_discussed_product.into(),
            },
        })
    }
}

impl From<RawFocusSlot> for FocusSlot {
    fn from(raw: RawFocusSlot) -> Self {
        FocusSlot::new(raw.title, raw.metric)
    }
}

fn into_categories(raw: Vec<RawCategory>) -> Vec<Category> {
    raw.into_iter()
        .map(|c| Category::new(c.name, c.value))
        .collect()
}

fn malformed(detail: String) -> DashboardError {
    DashboardError::SourceUnavailable(format!("Malformed dashboard document: {detail}"))
}

/// Parse the timestamp forms seen in dashboard exports.
///
/// Accepts RFC 3339, a naive `YYYY-MM-DDTHH:MM:SS[.f]` (taken as UTC) and a
/// bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
