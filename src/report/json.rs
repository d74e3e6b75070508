use crate::catalog::Catalog;
use crate::types::report::Assessment;
use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    catalog_fingerprint: &'a str,
    #[serde(flatten)]
    assessment: &'a Assessment,
}

pub fn to_json(assessment: &Assessment, catalog: &Catalog) -> Result<String, serde_json::Error> {
    let report = JsonReport {
        generated_at: Utc::now().to_rfc3339(),
        catalog_fingerprint: catalog.fingerprint(),
        assessment,
    };
    serde_json::to_string_pretty(&report).map(|mut rendered| {
        rendered.push('\n');
        rendered
    })
}
