use crate::assess::AnswerProblems;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SkinTypeError {
    #[error("incomplete or invalid answers: {0}")]
    InvalidAnswers(AnswerProblems),

    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("unknown skin type: {0}")]
    UnknownSkinType(String),

    #[error("answers parse error: {0}")]
    AnswersParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, SkinTypeError>;
