use crate::answers::AnswerSet;
use crate::catalog::Catalog;
use crate::error::{Result, SkinTypeError};
use crate::types::category::SkinType;
use crate::types::report::{Assessment, RankedScore};
use crate::types::scoring::ScoreCard;
use std::fmt;
use tracing::{debug, trace};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerProblems {
    pub missing: Vec<u32>,
    pub unknown_choices: Vec<(u32, String)>,
    pub unknown_questions: Vec<u32>,
}

impl AnswerProblems {
    pub fn is_empty(&self) -> bool {
        self.missing.is_empty()
            && self.unknown_choices.is_empty()
            && self.unknown_questions.is_empty()
    }
}

impl fmt::Display for AnswerProblems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if !self.missing.is_empty() {
            parts.push(format!(
                "missing answers for questions {}",
                join_ids(&self.missing)
            ));
        }
        for (question_id, label) in &self.unknown_choices {
            parts.push(format!(
                "unknown choice \"{label}\" for question {question_id}"
            ));
        }
        if !self.unknown_questions.is_empty() {
            parts.push(format!(
                "answers reference unknown questions {}",
                join_ids(&self.unknown_questions)
            ));
        }
        f.write_str(&parts.join("; "))
    }
}

fn join_ids(ids: &[u32]) -> String {
    ids.iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

// Every question must be answered with one of its own choice labels before
// anything is scored; a partial answer set never produces a partial result.
pub fn validate(answers: &AnswerSet, catalog: &Catalog) -> AnswerProblems {
    let mut problems = AnswerProblems::default();
    for question in catalog.questions() {
        match answers.get(question.id) {
            None => problems.missing.push(question.id),
            Some(label) => {
                if question.choice(label).is_none() {
                    problems
                        .unknown_choices
                        .push((question.id, label.to_string()));
                }
            }
        }
    }
    for (question_id, _) in answers.iter() {
        if catalog.question(question_id).is_none() {
            problems.unknown_questions.push(question_id);
        }
    }
    problems
}

pub fn assess(answers: &AnswerSet, catalog: &Catalog) -> Result<Assessment> {
    let problems = validate(answers, catalog);
    if !problems.is_empty() {
        return Err(SkinTypeError::InvalidAnswers(problems));
    }

    let mut scores = ScoreCard::default();
    for question in catalog.questions() {
        if let Some(choice) = answers
            .get(question.id)
            .and_then(|label| question.choice(label))
        {
            trace!(question = question.id, choice = %choice.label, "scored answer");
            scores.add(&choice.weights);
        }
    }

    let primary = primary_of(&scores);
    let primary_score = scores.get(primary);
    debug!(%primary, score = primary_score, "assessment complete");

    Ok(Assessment {
        scores,
        primary,
        primary_score,
        ranking: ranking_of(&scores),
    })
}

fn primary_of(scores: &ScoreCard) -> SkinType {
    let mut best = SkinType::ALL[0];
    for skin_type in SkinType::ALL {
        if scores.get(skin_type) > scores.get(best) {
            best = skin_type;
        }
    }
    best
}

fn ranking_of(scores: &ScoreCard) -> Vec<RankedScore> {
    let mut ranking = scores
        .entries()
        .map(|(skin_type, score)| RankedScore { skin_type, score })
        .to_vec();
    // Stable sort keeps canonical order between equal scores.
    ranking.sort_by(|a, b| b.score.cmp(&a.score));
    ranking
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answers(pairs: &[(u32, &str)]) -> AnswerSet {
        pairs
            .iter()
            .map(|(id, label)| (*id, label.to_string()))
            .collect()
    }

    fn dry_leaning() -> AnswerSet {
        answers(&[
            (1, "Tight and dry"),
            (2, "Almost invisible"),
            (3, "Gets dry/flaky"),
            (4, "Tight and uncomfortable"),
            (5, "Rarely or never"),
        ])
    }

    #[test]
    fn dry_leaning_answers_score_dry_first() {
        let catalog = Catalog::builtin();
        let result = assess(&dry_leaning(), &catalog).expect("complete answers should score");

        assert_eq!(result.primary, SkinType::Dry);
        assert_eq!(result.primary_score, 9);
        assert_eq!(result.scores.normal, 3);
        assert_eq!(result.scores.oily, 0);
        assert_eq!(result.scores.dry, 9);
        assert_eq!(result.scores.combination, 5);
        assert_eq!(result.scores.sensitive, 5);
        assert_eq!(result.tied_leaders(), vec![SkinType::Dry]);
    }

    #[test]
    fn ranking_covers_every_type_and_breaks_ties_canonically() {
        let catalog = Catalog::builtin();
        let result = assess(&dry_leaning(), &catalog).expect("complete answers should score");

        let order: Vec<(SkinType, u32)> = result
            .ranking
            .iter()
            .map(|entry| (entry.skin_type, entry.score))
            .collect();
        assert_eq!(
            order,
            vec![
                (SkinType::Dry, 9),
                (SkinType::Combination, 5),
                (SkinType::Sensitive, 5),
                (SkinType::Normal, 3),
                (SkinType::Oily, 0),
            ]
        );
    }

    #[test]
    fn totals_sum_the_chosen_choice_weights() {
        let catalog = Catalog::from_toml_str(
            r##"
[[questions]]
id = 1
prompt = "First signal?"

[[questions.choices]]
label = "A"
weights = { normal = 1, oily = 2, dry = 3, combination = 4, sensitive = 5 }

[[questions.choices]]
label = "B"
weights = { normal = 0, oily = 0, dry = 0, combination = 0, sensitive = 0 }

[[questions]]
id = 2
prompt = "Second signal?"

[[questions.choices]]
label = "C"
weights = { normal = 4, oily = 0, dry = 1, combination = 0, sensitive = 2 }

[[questions.choices]]
label = "D"
weights = { normal = 0, oily = 1, dry = 0, combination = 2, sensitive = 0 }

[categories.normal]
description = "Balanced"
characteristics = []
color = "#4CAF50"

[categories.oily]
description = "Shiny"
characteristics = []
color = "#2196F3"

[categories.dry]
description = "Tight"
characteristics = []
color = "#FF9800"

[categories.combination]
description = "Mixed"
characteristics = []
color = "#9C27B0"

[categories.sensitive]
description = "Reactive"
characteristics = []
color = "#F44336"
"##,
        )
        .expect("synthetic catalog should parse");

        let result = assess(&answers(&[(1, "A"), (2, "C")]), &catalog)
            .expect("complete answers should score");

        assert_eq!(result.scores.normal, 5);
        assert_eq!(result.scores.oily, 2);
        assert_eq!(result.scores.dry, 4);
        assert_eq!(result.scores.combination, 4);
        assert_eq!(result.scores.sensitive, 7);
        assert_eq!(result.primary, SkinType::Sensitive);

        let order: Vec<SkinType> = result.ranking.iter().map(|entry| entry.skin_type).collect();
        assert_eq!(
            order,
            vec![
                SkinType::Sensitive,
                SkinType::Normal,
                SkinType::Dry,
                SkinType::Combination,
                SkinType::Oily,
            ]
        );
    }

    #[test]
    fn tied_maximum_goes_to_the_earlier_declared_type() {
        let catalog = Catalog::builtin();
        let set = answers(&[
            (1, "Shiny all over"),
            (2, "Clearly visible, enlarged"),
            (3, "Usually no reaction"),
            (4, "Oily only in T-zone"),
            (5, "Only in T-zone"),
        ]);
        let result = assess(&set, &catalog).expect("complete answers should score");

        assert_eq!(result.scores.oily, 7);
        assert_eq!(result.scores.combination, 7);
        assert_eq!(result.primary, SkinType::Oily);
        assert_eq!(
            result.tied_leaders(),
            vec![SkinType::Oily, SkinType::Combination]
        );
    }

    #[test]
    fn scoring_is_deterministic_across_runs() {
        let catalog = Catalog::builtin();
        let first = assess(&dry_leaning(), &catalog).expect("first run should score");
        let second = assess(&dry_leaning(), &catalog).expect("second run should score");
        assert_eq!(first, second);
    }

    #[test]
    fn missing_answers_block_scoring() {
        let catalog = Catalog::builtin();
        let set = answers(&[
            (1, "Tight and dry"),
            (3, "Gets dry/flaky"),
            (5, "Rarely or never"),
        ]);

        let err = assess(&set, &catalog).expect_err("incomplete answers should not score");
        let message = err.to_string();
        assert!(message.contains("incomplete or invalid answers"));
        assert!(message.contains("missing answers for questions 2, 4"));
    }

    #[test]
    fn mistyped_choice_labels_block_scoring() {
        let catalog = Catalog::builtin();
        let mut set = dry_leaning();
        set.insert(3, "gets dry/flaky");

        let err = assess(&set, &catalog).expect_err("mistyped label should not score");
        assert!(err
            .to_string()
            .contains("unknown choice \"gets dry/flaky\" for question 3"));
    }

    #[test]
    fn answers_for_unknown_questions_block_scoring() {
        let catalog = Catalog::builtin();
        let mut set = dry_leaning();
        set.insert(9, "Tight and dry");

        let err = assess(&set, &catalog).expect_err("unknown question should not score");
        assert!(err.to_string().contains("unknown questions 9"));
    }

    #[test]
    fn all_problems_are_reported_together() {
        let catalog = Catalog::builtin();
        let set = answers(&[(1, "Nope"), (9, "Tight and dry")]);

        let problems = validate(&set, &catalog);
        assert_eq!(problems.missing, vec![2, 3, 4, 5]);
        assert_eq!(problems.unknown_choices, vec![(1, "Nope".to_string())]);
        assert_eq!(problems.unknown_questions, vec![9]);
    }

    #[test]
    fn complete_answers_validate_clean() {
        let catalog = Catalog::builtin();
        assert!(validate(&dry_leaning(), &catalog).is_empty());
    }
}
