//! Dashboard, ranking, donut and trend DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::ScoredEntity;
use crate::projection::RankOrder;
use crate::view::{
    DashboardView, DonutChart, DonutSlice, FocusCard, FocusPanel, RankingPanel, RankingRow,
    TrendModal, TrendPoint,
};

// ---------------------------------------------------------------------------
// Request DTOs
// ---------------------------------------------------------------------------

/// Query parameters for `GET /v1/dashboard`.
#[derive(Debug, Clone, Default, Deserialize, utoipa::ToSchema, utoipa::IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct DashboardQuery {
    /// Ranking order: `score` (default) or `recency`. `cqs`, `timestamp` and
    /// `date` are accepted as aliases.
    pub order: Option<String>,
    /// Video whose trend modal should be open.
    pub selected: Option<String>,
}

// ---------------------------------------------------------------------------
// Response DTOs
// ---------------------------------------------------------------------------

/// A video as shown in the ranking list and the trend modal header.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VideoResponse {
    pub id: i64,
    pub title: String,
    /// Comment quality score.
    pub cqs: f64,
    #[schema(value_type = String)]
    pub timestamp: DateTime<Utc>,
}

impl From<ScoredEntity> for VideoResponse {
    fn from(video: ScoredEntity) -> Self {
        Self {
            id: video.id,
            title: video.title,
            cqs: video.score,
            timestamp: video.observed_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RankingItemResponse {
    /// 1-based position.
    pub rank: usize,
    pub video: VideoResponse,
    /// Score formatted with one decimal.
    pub cqs_text: String,
}

impl From<RankingRow> for RankingItemResponse {
    fn from(row: RankingRow) -> Self {
        Self {
            rank: row.position,
            video: row.video.into(),
            cqs_text: row.score_text,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RankingResponse {
    pub title: String,
    pub order: RankOrder,
    pub items: Vec<RankingItemResponse>,
}

impl From<RankingPanel> for RankingResponse {
    fn from(panel: RankingPanel) -> Self {
        Self {
            title: panel.title.to_string(),
            order: panel.order,
            items: panel.rows.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonutSliceResponse {
    pub name: String,
    pub value: f64,
    /// Rounded share of the total; absent when the total is zero.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub share_percent: Option<u32>,
    /// Label drawn on the slice, e.g. `"38%"`; empty when the share is undefined.
    pub share_label: String,
    /// Hex fill colour.
    pub color: String,
}

impl From<DonutSlice> for DonutSliceResponse {
    fn from(slice: DonutSlice) -> Self {
        Self {
            name: slice.name,
            value: slice.value,
            share_percent: slice.share_percent,
            share_label: slice.share_label,
            color: slice.color.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DonutChartResponse {
    pub title: String,
    /// Tooltip unit, e.g. `"mentions"`.
    pub unit: String,
    pub slices: Vec<DonutSliceResponse>,
}

impl From<DonutChart> for DonutChartResponse {
    fn from(chart: DonutChart) -> Self {
        Self {
            title: chart.title.to_string(),
            unit: chart.unit.to_string(),
            slices: chart.slices.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct FocusCardResponse {
    pub heading: String,
    pub title: String,
    pub metric: String,
}

impl From<FocusCard> for FocusCardResponse {
    fn from(card: FocusCard) -> Self {
        Self {
            heading: card.heading.to_string(),
            title: card.title,
            metric: card.metric,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct FocusResponse {
    pub title: String,
    pub cards: Vec<FocusCardResponse>,
}

impl From<FocusPanel> for FocusResponse {
    fn from(panel: FocusPanel) -> Self {
        Self {
            title: panel.title.to_string(),
            cards: panel.cards.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrendPointResponse {
    #[schema(value_type = String)]
    pub t: DateTime<Utc>,
    /// Axis label, e.g. `"Sep 3"`.
    pub label: String,
    pub cqs: f64,
}

impl From<TrendPoint> for TrendPointResponse {
    fn from(point: TrendPoint) -> Self {
        Self {
            t: point.at,
            label: point.label,
            cqs: point.score,
        }
    }
}

#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct AxisDomain {
    pub min: f64,
    pub max: f64,
}

/// Trend modal contents. An empty `points` list is a blank chart, not an error.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrendResponse {
    pub video: VideoResponse,
    pub points: Vec<TrendPointResponse>,
    pub is_empty: bool,
    pub y_axis: AxisDomain,
}

impl From<TrendModal> for TrendResponse {
    fn from(modal: TrendModal) -> Self {
        let (min, max) = modal.y_domain;
        Self {
            is_empty: modal.is_empty(),
            video: modal.video.into(),
            points: modal.points.into_iter().map(Into::into).collect(),
            y_axis: AxisDomain { min, max },
        }
    }
}

/// Response body for `GET /v1/dashboard`.
///
/// One response holds everything a page session needs: the ranking in every
/// order and the trend of every video all come from the same load, so the
/// page sorts and opens trends without fetching again.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    /// Header date, e.g. `"October 19"`.
    pub last_updated: String,
    /// Ranking in the requested order.
    pub ranking: RankingResponse,
    /// Ranking in every supported order, `score` first.
    pub rankings: Vec<RankingResponse>,
    pub product_discussion: DonutChartResponse,
    pub video_types: DonutChartResponse,
    pub focus: FocusResponse,
    /// Present when a video is selected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<TrendResponse>,
    /// Trend of every video in the document, in document order.
    pub trends: Vec<TrendResponse>,
}

impl From<DashboardView> for DashboardResponse {
    fn from(view: DashboardView) -> Self {
        Self {
            last_updated: view.last_updated,
            ranking: view.ranking.into(),
            rankings: view.rankings.into_iter().map(Into::into).collect(),
            product_discussion: view.product_discussion.into(),
            video_types: view.video_types.into(),
            focus: view.focus.into(),
            trend: view.modal.map(Into::into),
            trends: view.trends.into_iter().map(Into::into).collect(),
        }
    }
}
