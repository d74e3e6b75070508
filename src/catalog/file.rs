use super::{Catalog, CategoryTable, Question};
use crate::error::{Result, SkinTypeError};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogFile {
    #[serde(default)]
    questions: Vec<Question>,
    categories: CategoryTable,
}

pub(super) fn parse(text: &str) -> Result<Catalog> {
    let raw: CatalogFile =
        toml::from_str(text).map_err(|e| SkinTypeError::InvalidCatalog(e.to_string()))?;
    Catalog::new(raw.questions, raw.categories)
}
