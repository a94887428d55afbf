//! View Composition Layer: selection state plus the composed dashboard screen.

pub mod format;
mod page;
mod selection;

pub use page::{
    compose, compose_at, trend_modal, DashboardSession, DashboardView, DonutChart, DonutSlice,
    FocusCard, FocusPanel, RankingPanel, RankingRow, TrendModal, TrendPoint, TREND_Y_DOMAIN,
};
pub use selection::Selection;
