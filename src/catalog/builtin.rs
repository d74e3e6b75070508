use super::{Catalog, CategoryTable, Choice, Question};
use crate::types::category::CategoryInfo;
use crate::types::scoring::{Score, ScoreCard};

struct QuestionDef {
    id: u32,
    prompt: &'static str,
    choices: &'static [ChoiceDef],
}

struct ChoiceDef {
    label: &'static str,
    weights: ScoreCard,
}

struct CategoryDef {
    description: &'static str,
    characteristics: &'static [&'static str],
    color: &'static str,
    recommendations: &'static [&'static str],
}

const fn pts(
    normal: Score,
    oily: Score,
    dry: Score,
    combination: Score,
    sensitive: Score,
) -> ScoreCard {
    ScoreCard {
        normal,
        oily,
        dry,
        combination,
        sensitive,
    }
}

static QUESTIONS: &[QuestionDef] = &[
    QuestionDef {
        id: 1,
        prompt: "How does your skin feel a few hours after cleansing?",
        choices: &[
            ChoiceDef {
                label: "Tight and dry",
                weights: pts(0, 0, 2, 1, 1),
            },
            ChoiceDef {
                label: "Comfortable, not oily",
                weights: pts(2, 0, 0, 1, 1),
            },
            ChoiceDef {
                label: "Shiny all over",
                weights: pts(0, 2, 0, 1, 0),
            },
            ChoiceDef {
                label: "Shiny in T-zone only",
                weights: pts(1, 1, 0, 2, 0),
            },
        ],
    },
    QuestionDef {
        id: 2,
        prompt: "How visible are your pores?",
        choices: &[
            ChoiceDef {
                label: "Almost invisible",
                weights: pts(1, 0, 2, 1, 1),
            },
            ChoiceDef {
                label: "Visible but small",
                weights: pts(2, 0, 0, 1, 1),
            },
            ChoiceDef {
                label: "Clearly visible, enlarged",
                weights: pts(0, 2, 0, 1, 0),
            },
            ChoiceDef {
                label: "Large in T-zone only",
                weights: pts(0, 1, 0, 2, 0),
            },
        ],
    },
    QuestionDef {
        id: 3,
        prompt: "How does your skin react to new products?",
        choices: &[
            ChoiceDef {
                label: "Usually no reaction",
                weights: pts(2, 1, 1, 1, 0),
            },
            ChoiceDef {
                label: "Gets slightly red",
                weights: pts(0, 0, 1, 1, 2),
            },
            ChoiceDef {
                label: "Breaks out",
                weights: pts(0, 2, 0, 1, 1),
            },
            ChoiceDef {
                label: "Gets dry/flaky",
                weights: pts(0, 0, 2, 1, 1),
            },
        ],
    },
    QuestionDef {
        id: 4,
        prompt: "How does your skin feel in the afternoon?",
        choices: &[
            ChoiceDef {
                label: "Tight and uncomfortable",
                weights: pts(0, 0, 2, 1, 1),
            },
            ChoiceDef {
                label: "Comfortable",
                weights: pts(2, 0, 0, 1, 1),
            },
            ChoiceDef {
                label: "Shiny and oily",
                weights: pts(0, 2, 0, 1, 0),
            },
            ChoiceDef {
                label: "Oily only in T-zone",
                weights: pts(1, 1, 0, 2, 0),
            },
        ],
    },
    QuestionDef {
        id: 5,
        prompt: "How often do you experience breakouts?",
        choices: &[
            ChoiceDef {
                label: "Rarely or never",
                weights: pts(2, 0, 1, 1, 1),
            },
            ChoiceDef {
                label: "Occasionally",
                weights: pts(1, 1, 1, 2, 1),
            },
            ChoiceDef {
                label: "Frequently",
                weights: pts(0, 2, 0, 1, 0),
            },
            ChoiceDef {
                label: "Only in T-zone",
                weights: pts(0, 1, 0, 2, 0),
            },
        ],
    },
];

static NORMAL: CategoryDef = CategoryDef {
    description: "Well-balanced skin - not too oily, not too dry",
    characteristics: &[
        "Few imperfections",
        "No severe sensitivity",
        "Barely visible pores",
        "Radiant complexion",
    ],
    color: "#4CAF50",
    recommendations: &[
        "Use gentle cleansers",
        "Apply moisturizer daily",
        "Use sunscreen regularly",
        "Get regular facials for maintenance",
    ],
};

static OILY: CategoryDef = CategoryDef {
    description: "Excess sebum production, shiny appearance",
    characteristics: &[
        "Enlarged pores",
        "Prone to blackheads and acne",
        "Makeup doesn't stay put",
        "Thick complexion",
    ],
    color: "#2196F3",
    recommendations: &[
        "Use oil-free, non-comedogenic products",
        "Clean twice daily with gentle cleanser",
        "Use clay masks weekly",
        "Avoid heavy, oil-based products",
    ],
};

static DRY: CategoryDef = CategoryDef {
    description: "Lacks moisture and lipids to retain moisture",
    characteristics: &[
        "Almost invisible pores",
        "Red patches",
        "Less elastic skin",
        "More visible lines",
    ],
    color: "#FF9800",
    recommendations: &[
        "Use cream-based cleansers",
        "Apply rich moisturizers",
        "Avoid hot showers",
        "Use hydrating masks regularly",
    ],
};

static COMBINATION: CategoryDef = CategoryDef {
    description: "Oily in T-zone, dry/normal on cheeks",
    characteristics: &[
        "Oily T-zone",
        "Dry cheeks",
        "Enlarged pores in T-zone",
        "Prone to blackheads",
    ],
    color: "#9C27B0",
    recommendations: &[
        "Treat different areas separately",
        "Use gel-based moisturizers for T-zone",
        "Use cream-based products for dry areas",
        "Consider double cleansing method",
    ],
};

static SENSITIVE: CategoryDef = CategoryDef {
    description: "Reacts easily to products and environmental factors",
    characteristics: &["Redness", "Itching", "Burning sensation", "Dryness"],
    color: "#F44336",
    recommendations: &[
        "Patch test all new products",
        "Use fragrance-free products",
        "Avoid harsh exfoliants",
        "Stick to minimal product routine",
    ],
};

pub(super) fn catalog() -> Catalog {
    let questions: Vec<Question> = QUESTIONS.iter().map(question).collect();
    let fingerprint = super::fingerprint_of(&questions);
    Catalog {
        questions,
        categories: CategoryTable {
            normal: info(&NORMAL),
            oily: info(&OILY),
            dry: info(&DRY),
            combination: info(&COMBINATION),
            sensitive: info(&SENSITIVE),
        },
        fingerprint,
    }
}

fn question(def: &QuestionDef) -> Question {
    Question {
        id: def.id,
        prompt: def.prompt.to_string(),
        choices: def
            .choices
            .iter()
            .map(|choice| Choice {
                label: choice.label.to_string(),
                weights: choice.weights,
            })
            .collect(),
    }
}

fn info(def: &CategoryDef) -> CategoryInfo {
    CategoryInfo {
        description: def.description.to_string(),
        characteristics: def.characteristics.iter().map(|s| s.to_string()).collect(),
        color: def.color.to_string(),
        recommendations: def.recommendations.iter().map(|s| s.to_string()).collect(),
    }
}
