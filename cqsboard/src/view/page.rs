use chrono::{DateTime, Utc};

use crate::error::{DashboardError, Result};
use crate::models::{Category, DashboardSnapshot, FocusSlot, ScoredEntity};
use crate::projection::{distribute, history_for, rank, Palette, RankOrder};

use super::format;
use super::selection::Selection;

/// Fixed Y-axis range of the trend chart.
pub const TREND_Y_DOMAIN: (f64, f64) = (85.0, 100.0);

/// Everything one page needs from a single snapshot.
///
/// `rankings` holds a panel for every [`RankOrder`] and `trends` a modal for
/// every video, so re-sorting and opening trends need no further load.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardView {
    pub last_updated: String,
    /// Panel for the requested order.
    pub ranking: RankingPanel,
    pub rankings: Vec<RankingPanel>,
    pub product_discussion: DonutChart,
    pub video_types: DonutChart,
    pub focus: FocusPanel,
    /// Modal for the current selection.
    pub modal: Option<TrendModal>,
    /// One modal per video, in document order.
    pub trends: Vec<TrendModal>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankingPanel {
    pub title: &'static str,
    pub order: RankOrder,
    pub rows: Vec<RankingRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RankingRow {
    /// 1-based position in the list.
    pub position: usize,
    pub video: ScoredEntity,
    pub score_text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonutChart {
    pub title: &'static str,
    /// Tooltip unit, e.g. "mentions".
    pub unit: &'static str,
    pub slices: Vec<DonutSlice>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DonutSlice {
    pub name: String,
    pub value: f64,
    pub share_percent: Option<u32>,
    pub share_label: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FocusPanel {
    pub title: &'static str,
    pub cards: [FocusCard; 2],
}

#[derive(Debug, Clone, PartialEq)]
pub struct FocusCard {
    pub heading: &'static str,
    pub title: String,
    pub metric: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendModal {
    pub video: ScoredEntity,
    pub points: Vec<TrendPoint>,
    pub y_domain: (f64, f64),
}

impl TrendModal {
    /// An empty modal renders a blank chart, not an error.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrendPoint {
    pub at: DateTime<Utc>,
    pub label: String,
    pub score: f64,
}

/// Compose the dashboard screen for `snapshot`.
pub fn compose(snapshot: &DashboardSnapshot, order: RankOrder, selection: &Selection) -> DashboardView {
    compose_at(snapshot, order, selection, Utc::now())
}

/// [`compose`] with an explicit "last updated" instant.
pub fn compose_at(
    snapshot: &DashboardSnapshot,
    order: RankOrder,
    selection: &Selection,
    now: DateTime<Utc>,
) -> DashboardView {
    DashboardView {
        last_updated: format::long_date(&now),
        ranking: ranking_panel(snapshot, order),
        rankings: RankOrder::ALL
            .iter()
            .map(|&order| ranking_panel(snapshot, order))
            .collect(),
        product_discussion: donut(
            "Product Discussion",
            "mentions",
            &snapshot.product_discussion,
            Palette::standard(),
        ),
        video_types: donut(
            "Video Type Distribution",
            "videos",
            &snapshot.video_types,
            Palette::reversed(),
        ),
        focus: FocusPanel {
            title: "Next Month's Focus",
            cards: [
                focus_card("Top CQS Video Type", &snapshot.focus.top_quality_comment_video),
                focus_card("Most Discussed Product", &snapshot.focus.most_discussed_product),
            ],
        },
        modal: selection
            .selected()
            .map(|video| trend_modal(snapshot, video)),
        trends: snapshot
            .videos
            .iter()
            .map(|video| trend_modal(snapshot, video))
            .collect(),
    }
}

fn ranking_panel(snapshot: &DashboardSnapshot, order: RankOrder) -> RankingPanel {
    let rows = rank(&snapshot.videos, order)
        .into_iter()
        .enumerate()
        .map(|(index, video)| RankingRow {
            position: index + 1,
            score_text: format::score_text(video.score),
            video,
        })
        .collect();

    RankingPanel {
        title: "Video CQS Ranking",
        order,
        rows,
    }
}

/// Trend modal for `video`, empty when the snapshot has no history for it.
pub fn trend_modal(snapshot: &DashboardSnapshot, video: &ScoredEntity) -> TrendModal {
    let points = history_for(&snapshot.history, video.id)
        .iter()
        .map(|point| TrendPoint {
            at: point.at,
            label: format::axis_date(&point.at),
            score: point.score,
        })
        .collect();

    TrendModal {
        video: video.clone(),
        points,
        y_domain: TREND_Y_DOMAIN,
    }
}

fn donut(
    title: &'static str,
    unit: &'static str,
    categories: &[Category],
    palette: Palette,
) -> DonutChart {
    let slices = distribute(categories)
        .into_iter()
        .map(|slice| DonutSlice {
            share_label: format::share_label(slice.share_percent),
            color: palette.color(slice.color_index),
            name: slice.name,
            value: slice.magnitude,
            share_percent: slice.share_percent,
        })
        .collect();

    DonutChart {
        title,
        unit,
        slices,
    }
}

fn focus_card(heading: &'static str, slot: &FocusSlot) -> FocusCard {
    FocusCard {
        heading,
        title: slot.label.clone(),
        metric: slot.metric_text.clone(),
    }
}

/// A loaded snapshot together with the viewer's sort order and selection.
#[derive(Debug, Clone)]
pub struct DashboardSession {
    snapshot: DashboardSnapshot,
    order: RankOrder,
    selection: Selection,
}

impl DashboardSession {
    pub fn new(snapshot: DashboardSnapshot) -> Self {
        Self {
            snapshot,
            order: RankOrder::default(),
            selection: Selection::Closed,
        }
    }

    pub fn snapshot(&self) -> &DashboardSnapshot {
        &self.snapshot
    }

    pub fn order(&self) -> RankOrder {
        self.order
    }

    pub fn set_order(&mut self, order: RankOrder) {
        self.order = order;
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Open the trend modal for video `id`.
    ///
    /// Fails with [`DashboardError::NotFound`] when the snapshot has no such
    /// video; the selection is left unchanged in that case.
    pub fn select(&mut self, id: i64) -> Result<()> {
        let video = self
            .snapshot
            .find_video(id)
            .cloned()
            .ok_or_else(|| DashboardError::NotFound(format!("Video {id} not found")))?;
        self.selection.select_entity(video);
        Ok(())
    }

    pub fn dismiss(&mut self) {
        self.selection.dismiss();
    }

    pub fn view(&self) -> DashboardView {
        compose(&self.snapshot, self.order, &self.selection)
    }

    pub fn view_at(&self, now: DateTime<Utc>) -> DashboardView {
        compose_at(&self.snapshot, self.order, &self.selection, now)
    }
}
