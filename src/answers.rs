use crate::error::{Result, SkinTypeError};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    chosen: BTreeMap<u32, String>,
}

impl AnswerSet {
    pub fn new() -> AnswerSet {
        AnswerSet::default()
    }

    pub fn insert(&mut self, question_id: u32, label: impl Into<String>) {
        self.chosen.insert(question_id, label.into());
    }

    pub fn get(&self, question_id: u32) -> Option<&str> {
        self.chosen.get(&question_id).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.chosen.iter().map(|(id, label)| (*id, label.as_str()))
    }
}

impl FromIterator<(u32, String)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (u32, String)>>(iter: I) -> AnswerSet {
        AnswerSet {
            chosen: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct AnswersFile {
    answers: BTreeMap<String, String>,
}

pub fn from_file(path: &Path) -> Result<AnswerSet> {
    if !path.exists() {
        return Err(SkinTypeError::PathNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    from_toml_str(&content).map_err(|e| match e {
        SkinTypeError::AnswersParse(message) => {
            SkinTypeError::AnswersParse(format!("{}: {message}", path.display()))
        }
        other => other,
    })
}

pub fn from_toml_str(text: &str) -> Result<AnswerSet> {
    let raw: AnswersFile =
        toml::from_str(text).map_err(|e| SkinTypeError::AnswersParse(e.to_string()))?;
    let mut set = AnswerSet::new();
    for (key, label) in raw.answers {
        // Distinct keys like "1", " 1", and "+1" normalize to the same id.
        let question_id = parse_question_id(&key)?;
        if set.get(question_id).is_some() {
            return Err(SkinTypeError::AnswersParse(format!(
                "duplicate answer for question {question_id}"
            )));
        }
        set.insert(question_id, label);
    }
    Ok(set)
}

pub fn parse_inline(pairs: &[String]) -> Result<AnswerSet> {
    if pairs.is_empty() {
        return Err(SkinTypeError::AnswersParse(
            "no answers provided".to_string(),
        ));
    }

    let mut set = AnswerSet::new();
    for pair in pairs {
        let (key, label) = pair.split_once('=').ok_or_else(|| {
            SkinTypeError::AnswersParse(format!("expected ID=CHOICE, got \"{pair}\""))
        })?;
        let question_id = parse_question_id(key)?;
        if label.is_empty() {
            return Err(SkinTypeError::AnswersParse(format!(
                "empty choice for question {question_id}"
            )));
        }
        if set.get(question_id).is_some() {
            return Err(SkinTypeError::AnswersParse(format!(
                "duplicate answer for question {question_id}"
            )));
        }
        set.insert(question_id, label);
    }
    Ok(set)
}

fn parse_question_id(key: &str) -> Result<u32> {
    key.trim().parse::<u32>().map_err(|_| {
        SkinTypeError::AnswersParse(format!("question key \"{key}\" is not a number"))
    })
}
