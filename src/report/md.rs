use crate::catalog::Catalog;
use crate::types::report::Assessment;

const MAX_BAR: usize = 40;

pub fn to_markdown(assessment: &Assessment, catalog: &Catalog) -> String {
    let info = catalog.category(assessment.primary);

    let mut output = String::new();
    output.push_str("# Skin Type Assessment\n\n");
    output.push_str(&format!(
        "Primary skin type: {} ({} of {} points)\n\n",
        assessment.primary,
        assessment.primary_score,
        assessment.scores.total()
    ));
    output.push_str(&format!("{}\n\n", info.description));

    output.push_str("## Scores\n\n");
    for entry in &assessment.ranking {
        output.push_str(&format!("- {}: {}", entry.skin_type, entry.score));
        let bar = (entry.score as usize).min(MAX_BAR);
        if bar > 0 {
            output.push_str("  ");
            output.push_str(&"#".repeat(bar));
        }
        output.push('\n');
    }
    output.push('\n');

    if !info.characteristics.is_empty() {
        output.push_str("## Characteristics\n\n");
        for characteristic in &info.characteristics {
            output.push_str(&format!("- {characteristic}\n"));
        }
        output.push('\n');
    }

    if !info.recommendations.is_empty() {
        output.push_str("## Recommendations\n\n");
        for recommendation in &info.recommendations {
            output.push_str(&format!("- {recommendation}\n"));
        }
        output.push('\n');
    }

    output.push_str(&format!(
        "Catalog: {} questions, fingerprint {}\n",
        catalog.questions().len(),
        catalog.short_fingerprint()
    ));
    output
}
