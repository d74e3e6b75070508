pub mod builtin;
mod file;

use crate::error::{Result, SkinTypeError};
use crate::types::category::{CategoryInfo, SkinType};
use crate::types::scoring::{Score, ScoreCard};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

pub const MIN_CHOICES: usize = 2;
// Upper bound on a single choice weight; keeps u32 totals clear of overflow.
pub const MAX_WEIGHT: Score = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Choice {
    pub label: String,
    pub weights: ScoreCard,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Question {
    pub id: u32,
    pub prompt: String,
    pub choices: Vec<Choice>,
}

impl Question {
    // Labels match exactly; answers are not normalized.
    pub fn choice(&self, label: &str) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.label == label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CategoryTable {
    normal: CategoryInfo,
    oily: CategoryInfo,
    dry: CategoryInfo,
    combination: CategoryInfo,
    sensitive: CategoryInfo,
}

impl CategoryTable {
    pub fn get(&self, skin_type: SkinType) -> &CategoryInfo {
        match skin_type {
            SkinType::Normal => &self.normal,
            SkinType::Oily => &self.oily,
            SkinType::Dry => &self.dry,
            SkinType::Combination => &self.combination,
            SkinType::Sensitive => &self.sensitive,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Vec<Question>,
    categories: CategoryTable,
    fingerprint: String,
}

impl Catalog {
    pub fn builtin() -> Catalog {
        builtin::catalog()
    }

    pub fn from_file(path: &Path) -> Result<Catalog> {
        if !path.exists() {
            return Err(SkinTypeError::PathNotFound(path.display().to_string()));
        }
        let content = fs::read_to_string(path)?;
        Catalog::from_toml_str(&content).map_err(|e| match e {
            SkinTypeError::InvalidCatalog(message) => {
                SkinTypeError::InvalidCatalog(format!("{}: {message}", path.display()))
            }
            other => other,
        })
    }

    pub fn from_toml_str(text: &str) -> Result<Catalog> {
        file::parse(text)
    }

    fn new(questions: Vec<Question>, categories: CategoryTable) -> Result<Catalog> {
        validate_questions(&questions)?;
        let fingerprint = fingerprint_of(&questions);
        Ok(Catalog {
            questions,
            categories,
            fingerprint,
        })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, id: u32) -> Option<&Question> {
        self.questions.iter().find(|question| question.id == id)
    }

    pub fn categories(&self) -> &CategoryTable {
        &self.categories
    }

    pub fn category(&self, skin_type: SkinType) -> &CategoryInfo {
        self.categories.get(skin_type)
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn short_fingerprint(&self) -> &str {
        self.fingerprint.get(..12).unwrap_or(&self.fingerprint)
    }
}

fn validate_questions(questions: &[Question]) -> Result<()> {
    if questions.is_empty() {
        return Err(SkinTypeError::InvalidCatalog(
            "catalog has no questions".to_string(),
        ));
    }

    let mut seen_ids = BTreeSet::new();
    for question in questions {
        if question.id == 0 {
            return Err(SkinTypeError::InvalidCatalog(
                "question ids start at 1".to_string(),
            ));
        }
        if !seen_ids.insert(question.id) {
            return Err(SkinTypeError::InvalidCatalog(format!(
                "duplicate question id {}",
                question.id
            )));
        }
        if question.prompt.trim().is_empty() {
            return Err(SkinTypeError::InvalidCatalog(format!(
                "question {} has an empty prompt",
                question.id
            )));
        }
        if question.choices.len() < MIN_CHOICES {
            return Err(SkinTypeError::InvalidCatalog(format!(
                "question {} needs at least {MIN_CHOICES} choices",
                question.id
            )));
        }
        let mut seen_labels = BTreeSet::new();
        for choice in &question.choices {
            if choice.label.trim().is_empty() {
                return Err(SkinTypeError::InvalidCatalog(format!(
                    "question {} has a choice with an empty label",
                    question.id
                )));
            }
            if !seen_labels.insert(choice.label.as_str()) {
                return Err(SkinTypeError::InvalidCatalog(format!(
                    "question {} repeats choice \"{}\"",
                    question.id, choice.label
                )));
            }
            for (skin_type, points) in choice.weights.entries() {
                if points > MAX_WEIGHT {
                    return Err(SkinTypeError::InvalidCatalog(format!(
                        "question {} choice \"{}\" weight for {} exceeds {MAX_WEIGHT}",
                        question.id, choice.label, skin_type
                    )));
                }
            }
        }
    }
    Ok(())
}

fn fingerprint_of(questions: &[Question]) -> String {
    let mut hasher = Sha256::new();
    for question in questions {
        hasher.update(question.id.to_le_bytes());
        hasher.update(question.prompt.as_bytes());
        for choice in &question.choices {
            hasher.update([0u8]);
            hasher.update(choice.label.as_bytes());
            for (_, points) in choice.weights.entries() {
                hasher.update(points.to_le_bytes());
            }
        }
    }
    let digest = hasher.finalize();
    format!("{digest:x}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn card() -> ScoreCard {
        ScoreCard {
            normal: 1,
            ..ScoreCard::default()
        }
    }

    fn choice(label: &str) -> Choice {
        Choice {
            label: label.to_string(),
            weights: card(),
        }
    }

    fn question(id: u32) -> Question {
        Question {
            id,
            prompt: format!("Question {id}?"),
            choices: vec![choice("Yes"), choice("No")],
        }
    }

    #[test]
    fn builtin_catalog_passes_validation() {
        let catalog = Catalog::builtin();
        validate_questions(catalog.questions()).expect("built-in questions should validate");
    }

    #[test]
    fn builtin_fingerprint_is_stable() {
        let first = Catalog::builtin();
        let second = Catalog::builtin();
        assert_eq!(first.fingerprint(), second.fingerprint());
        assert_eq!(first.fingerprint().len(), 64);
        assert_eq!(first.short_fingerprint().len(), 12);
        assert!(first.fingerprint().starts_with(first.short_fingerprint()));
    }

    #[test]
    fn question_lookup_finds_by_id() {
        let catalog = Catalog::builtin();
        let found = catalog.question(3).expect("question 3 should exist");
        assert_eq!(found.id, 3);
        assert!(catalog.question(99).is_none());
    }

    #[test]
    fn choice_lookup_is_case_sensitive() {
        let catalog = Catalog::builtin();
        let first = catalog.question(1).expect("question 1 should exist");
        assert!(first.choice("Tight and dry").is_some());
        assert!(first.choice("tight and dry").is_none());
        assert!(first.choice("Tight and dry ").is_none());
    }

    #[test]
    fn validation_rejects_empty_question_list() {
        let err = validate_questions(&[]).expect_err("empty catalog should be rejected");
        assert!(err.to_string().contains("no questions"));
    }

    #[test]
    fn validation_rejects_duplicate_question_ids() {
        let err = validate_questions(&[question(1), question(1)])
            .expect_err("duplicate ids should be rejected");
        assert!(err.to_string().contains("duplicate question id 1"));
    }

    #[test]
    fn validation_rejects_single_choice_questions() {
        let mut lone = question(1);
        lone.choices.truncate(1);
        let err = validate_questions(&[lone]).expect_err("one choice should be rejected");
        assert!(err.to_string().contains("at least 2 choices"));
    }

    #[test]
    fn validation_rejects_repeated_choice_labels() {
        let mut repeated = question(1);
        repeated.choices = vec![choice("Same"), choice("Same")];
        let err = validate_questions(&[repeated]).expect_err("repeated label should be rejected");
        assert!(err.to_string().contains("repeats choice"));
    }

    #[test]
    fn validation_rejects_question_id_zero() {
        let err = validate_questions(&[question(0)]).expect_err("id zero should be rejected");
        assert!(err.to_string().contains("start at 1"));
    }

    #[test]
    fn validation_rejects_weights_above_the_cap() {
        let mut heavy = question(1);
        heavy.choices[0].weights.normal = MAX_WEIGHT + 1;
        let err = validate_questions(&[heavy]).expect_err("oversized weight should be rejected");
        assert!(err.to_string().contains("weight for Normal exceeds"));
    }

    #[test]
    fn weights_near_the_integer_limit_never_reach_scoring() {
        let mut huge = question(1);
        huge.choices[0].weights.normal = u32::MAX;
        let err = validate_questions(&[huge, question(2)])
            .expect_err("near-limit weight should be rejected");
        assert!(err.to_string().contains(&format!("exceeds {MAX_WEIGHT}")));
    }

    #[test]
    fn fingerprint_changes_when_weights_change() {
        let base = vec![question(1), question(2)];
        let mut shifted = base.clone();
        shifted[1].choices[0].weights.dry += 1;
        assert_ne!(fingerprint_of(&base), fingerprint_of(&shifted));
    }

    #[test]
    fn from_file_rejects_missing_path() {
        let dir = TempDir::new().expect("temp dir should create");
        let err = Catalog::from_file(&dir.path().join("absent.toml"))
            .expect_err("missing file should be rejected");
        assert!(err.to_string().contains("path does not exist"));
    }

    #[test]
    fn from_file_prefixes_parse_errors_with_the_path() {
        let dir = TempDir::new().expect("temp dir should create");
        let path = dir.path().join("broken.toml");
        fs::write(&path, "questions = 7").expect("broken catalog should write");
        let err = Catalog::from_file(&path).expect_err("broken catalog should be rejected");
        assert!(err.to_string().contains("broken.toml"));
    }
}
