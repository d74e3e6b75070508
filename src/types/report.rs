use crate::types::category::SkinType;
use crate::types::scoring::{Score, ScoreCard};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedScore {
    pub skin_type: SkinType,
    pub score: Score,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assessment {
    pub scores: ScoreCard,
    pub primary: SkinType,
    pub primary_score: Score,
    // Descending score; equal scores keep canonical order.
    pub ranking: Vec<RankedScore>,
}

impl Assessment {
    pub fn tied_leaders(&self) -> Vec<SkinType> {
        self.ranking
            .iter()
            .filter(|entry| entry.score == self.primary_score)
            .map(|entry| entry.skin_type)
            .collect()
    }
}
