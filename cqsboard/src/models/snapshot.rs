use serde::{Deserialize, Serialize};

use super::{Category, HistoryMap, ScoredEntity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusSlot {
    pub label: String,
    pub metric_text: String,
}

impl FocusSlot {
    pub fn new(label: impl Into<String>, metric_text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            metric_text: metric_text.into(),
        }
    }
}

/// The two fixed "Next Month's Focus" slots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FocusSummary {
    pub top_quality_comment_video: FocusSlot,
    pub most_discussed_product: FocusSlot,
}

/// Everything one dashboard render needs, decoded and typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub videos: Vec<ScoredEntity>,
    pub history: HistoryMap,
    pub product_discussion: Vec<Category>,
    pub video_types: Vec<Category>,
    pub focus: FocusSummary,
}

impl DashboardSnapshot {
    pub fn find_video(&self, id: i64) -> Option<&ScoredEntity> {
        self.videos.iter().find(|video| video.id == id)
    }
}
