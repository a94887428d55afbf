use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::ScoredEntity;

/// Number of rows shown in the ranking list.
pub const RANKING_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum RankOrder {
    /// Highest score first.
    #[default]
    Score,
    /// Most recently observed first.
    Recency,
}

impl RankOrder {
    /// Every supported order, default first.
    pub const ALL: [RankOrder; 2] = [RankOrder::Score, RankOrder::Recency];

    fn compare(self, a: &ScoredEntity, b: &ScoredEntity) -> Ordering {
        match self {
            RankOrder::Score => b.score.total_cmp(&a.score),
            RankOrder::Recency => b.observed_at.cmp(&a.observed_at),
        }
    }
}

impl FromStr for RankOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "score" | "cqs" => Ok(RankOrder::Score),
            "recency" | "timestamp" | "date" => Ok(RankOrder::Recency),
            other => Err(format!("unknown sort order '{other}'")),
        }
    }
}

impl fmt::Display for RankOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankOrder::Score => write!(f, "score"),
            RankOrder::Recency => write!(f, "recency"),
        }
    }
}

/// Top [`RANKING_LIMIT`] entities under `order`.
///
/// The sort is stable, so entities that compare equal keep their input order.
/// The input slice is left untouched.
pub fn rank(entities: &[ScoredEntity], order: RankOrder) -> Vec<ScoredEntity> {
    let mut sorted: Vec<&ScoredEntity> = entities.iter().collect();
    sorted.sort_by(|a, b| order.compare(a, b));
    sorted
        .into_iter()
        .take(RANKING_LIMIT)
        .cloned()
        .collect()
}
