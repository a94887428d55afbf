//! Pure projections from a snapshot's raw collections to display-ready views.

pub mod distribution;
pub mod ranking;
pub mod trend;

pub use distribution::{distribute, DistributionSlice, Palette, PALETTE_SIZE};
pub use ranking::{rank, RankOrder, RANKING_LIMIT};
pub use trend::history_for;
