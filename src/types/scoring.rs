use crate::types::category::SkinType;
use serde::{Deserialize, Serialize};

pub type Score = u32;

// Serves both as a choice's weight vector and as running totals. One named
// field per skin type, so a catalog file cannot omit or misspell a category
// without failing to deserialize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ScoreCard {
    pub normal: Score,
    pub oily: Score,
    pub dry: Score,
    pub combination: Score,
    pub sensitive: Score,
}

impl ScoreCard {
    pub fn get(&self, skin_type: SkinType) -> Score {
        match skin_type {
            SkinType::Normal => self.normal,
            SkinType::Oily => self.oily,
            SkinType::Dry => self.dry,
            SkinType::Combination => self.combination,
            SkinType::Sensitive => self.sensitive,
        }
    }

    pub fn add(&mut self, weights: &ScoreCard) {
        self.normal += weights.normal;
        self.oily += weights.oily;
        self.dry += weights.dry;
        self.combination += weights.combination;
        self.sensitive += weights.sensitive;
    }

    pub fn entries(&self) -> [(SkinType, Score); SkinType::COUNT] {
        SkinType::ALL.map(|skin_type| (skin_type, self.get(skin_type)))
    }

    pub fn total(&self) -> Score {
        self.normal + self.oily + self.dry + self.combination + self.sensitive
    }
}
