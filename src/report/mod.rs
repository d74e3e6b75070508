pub mod csv;
pub mod json;
pub mod md;

use crate::catalog::Catalog;
use crate::error::{Result, SkinTypeError};
use crate::types::report::Assessment;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Md,
    Json,
    Csv,
}

pub fn render(assessment: &Assessment, catalog: &Catalog, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Md => Ok(md::to_markdown(assessment, catalog)),
        OutputFormat::Json => json::to_json(assessment, catalog).map_err(SkinTypeError::Json),
        OutputFormat::Csv => csv::to_csv(assessment),
    }
}
