use crate::error::{Result, SkinTypeError};
use crate::types::report::Assessment;
use csv::Writer;

// Same two columns the spreadsheet export always had.
pub fn to_csv(assessment: &Assessment) -> Result<String> {
    let mut writer = Writer::from_writer(Vec::new());
    writer.write_record(["Skin Type", "Score"])?;
    for entry in &assessment.ranking {
        let score = entry.score.to_string();
        writer.write_record([entry.skin_type.name(), score.as_str()])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| SkinTypeError::Io(e.into_error()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
