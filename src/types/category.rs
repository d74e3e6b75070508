use crate::error::SkinTypeError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// Declaration order is the canonical order: it decides ranking placement and
// every tie on equal scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkinType {
    Normal,
    Oily,
    Dry,
    Combination,
    Sensitive,
}

impl SkinType {
    pub const COUNT: usize = 5;

    pub const ALL: [SkinType; SkinType::COUNT] = [
        SkinType::Normal,
        SkinType::Oily,
        SkinType::Dry,
        SkinType::Combination,
        SkinType::Sensitive,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SkinType::Normal => "Normal",
            SkinType::Oily => "Oily",
            SkinType::Dry => "Dry",
            SkinType::Combination => "Combination",
            SkinType::Sensitive => "Sensitive",
        }
    }
}

impl fmt::Display for SkinType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SkinType {
    type Err = SkinTypeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim();
        SkinType::ALL
            .into_iter()
            .find(|skin_type| skin_type.name().eq_ignore_ascii_case(normalized))
            .ok_or_else(|| SkinTypeError::UnknownSkinType(raw.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryInfo {
    pub description: String,
    pub characteristics: Vec<String>,
    pub color: String,
    #[serde(default)]
    pub recommendations: Vec<String>,
}
