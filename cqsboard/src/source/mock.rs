use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};

use crate::error::Result;
use crate::models::{
    Category, DashboardSnapshot, FocusSlot, FocusSummary, HistoryMap, HistoryPoint, ScoredEntity,
};

use super::SnapshotSource;

/// Serves the built-in demo snapshot. Never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockSource;

#[async_trait]
impl SnapshotSource for MockSource {
    async fn load(&self) -> Result<DashboardSnapshot> {
        Ok(mock_snapshot())
    }

    fn kind(&self) -> &'static str {
        "mock"
    }
}

fn day(year: i32, month: u32, date: u32, hour: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(year, month, date)
        .and_then(|d| d.and_hms_opt(hour, 0, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

const VIDEOS: &[(i64, &str, f64, (u32, u32, u32))] = &[
    (1, "My 10-Step Evening Skincare Routine for Glowing Skin", 98.5, (9, 2, 18)),
    (2, "Full Glam Makeup Tutorial Using Only Drugstore Products", 97.2, (9, 10, 15)),
    (3, "Testing Viral Hair Masks: Honest Review", 95.8, (8, 28, 12)),
    (4, "Fragrance Collection Tour 2025", 94.1, (9, 14, 20)),
    (5, "Get Ready With Me: Autumn Date Night", 92.7, (9, 6, 19)),
    (6, "Unboxing the New Revitalift Serum Set", 89.3, (9, 15, 9)),
    (7, "5-Minute No-Makeup Makeup Look", 87.9, (8, 20, 8)),
];

const HISTORY: &[(i64, &[((u32, u32), f64)])] = &[
    (1, &[((8, 12), 91.0), ((8, 19), 93.4), ((8, 26), 96.2), ((9, 2), 98.5)]),
    (2, &[((8, 19), 90.5), ((8, 26), 92.8), ((9, 2), 95.0), ((9, 10), 97.2)]),
    (3, &[((8, 14), 93.0), ((8, 21), 94.6), ((8, 28), 95.8)]),
    (4, &[((8, 31), 92.2), ((9, 7), 93.5), ((9, 14), 94.1)]),
    (5, &[((8, 23), 88.0), ((8, 30), 90.9), ((9, 6), 92.7)]),
    (6, &[((9, 1), 86.5), ((9, 8), 88.1), ((9, 15), 89.3)]),
];

/// The demo snapshot used when no real export is configured.
pub fn mock_snapshot() -> DashboardSnapshot {
    let videos = VIDEOS
        .iter()
        .map(|&(id, title, score, (month, date, hour))| {
            ScoredEntity::new(id, title, score, day(2025, month, date, hour))
        })
        .collect();

    let history: HistoryMap = HISTORY
        .iter()
        .map(|&(id, points)| {
            let series = points
                .iter()
                .map(|&((month, date), score)| HistoryPoint::new(day(2025, month, date, 0), score))
                .collect();
            (id.to_string(), series)
        })
        .collect();

    DashboardSnapshot {
        videos,
        history,
        product_discussion: vec![
            Category::new("Skincare", 450.0),
            Category::new("Makeup", 300.0),
            Category::new("Haircare", 250.0),
            Category::new("Fragrances", 200.0),
        ],
        video_types: vec![
            Category::new("Review", 9.0),
            Category::new("Tutorial", 14.0),
            Category::new("Get Ready With Me", 5.0),
            Category::new("Unboxing", 6.0),
            Category::new("Haul", 3.0),
            Category::new("Vlog", 2.0),
        ],
        focus: FocusSummary {
            top_quality_comment_video: FocusSlot::new("Tutorial", "Avg. CQS 96.4"),
            most_discussed_product: FocusSlot::new("Skincare", "450 Mentions"),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_source_always_loads() {
        let snapshot = MockSource.load().await.expect("mock never fails");
        assert_eq!(snapshot, mock_snapshot());
    }

    #[test]
    fn mock_snapshot_is_internally_consistent() {
        let snapshot = mock_snapshot();

        assert_eq!(snapshot.videos.len(), VIDEOS.len());
        assert!(snapshot.videos.iter().all(|v| v.observed_at.timestamp() > 0));

        // Every history key belongs to a known video; video 7 has none.
        for key in snapshot.history.keys() {
            let id: i64 = key.parse().unwrap();
            assert!(snapshot.find_video(id).is_some());
        }
        assert!(!snapshot.history.contains_key("7"));
        assert_eq!(snapshot.history["1"].len(), 4);
    }
}
