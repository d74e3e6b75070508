mod answers;
mod assess;
mod catalog;
mod cli;
mod error;
mod report;
mod telemetry;
mod types;

use crate::error::SkinTypeError;
use clap::Parser;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32, SkinTypeError> {
    let cli = cli::Cli::parse();
    telemetry::init(cli.verbose, cli.quiet)?;

    match cli.command {
        cli::Commands::Score(cmd) => {
            let catalog = load_catalog(cmd.catalog.as_deref())?;
            let set = match &cmd.answers {
                Some(path) => answers::from_file(path)?,
                None => answers::parse_inline(&cmd.answer)?,
            };

            let assessment = assess::assess(&set, &catalog)?;
            let tied = assessment.tied_leaders();
            if tied.len() > 1 {
                let names = tied
                    .iter()
                    .map(|skin_type| skin_type.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                warn!(
                    score = assessment.primary_score,
                    "tie between {names}; {} listed first by catalog order", assessment.primary
                );
            }

            let output_format = match cmd.format {
                cli::ReportFormat::Md => report::OutputFormat::Md,
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Csv => report::OutputFormat::Csv,
            };
            let rendered = report::render(&assessment, &catalog, output_format)?;
            match &cmd.output {
                Some(path) => {
                    fs::write(path, &rendered)?;
                    info!(path = %path.display(), "report written");
                }
                None => print!("{rendered}"),
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Questions(cmd) => {
            let catalog = load_catalog(cmd.catalog.as_deref())?;
            match cmd.format {
                cli::ListFormat::Text => {
                    for question in catalog.questions() {
                        println!("Q{}: {}", question.id, question.prompt);
                        for choice in &question.choices {
                            println!("  - {}", choice.label);
                        }
                    }
                }
                cli::ListFormat::Json => {
                    println!("{}", serde_json::to_string_pretty(catalog.questions())?);
                }
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Categories(cmd) => {
            let catalog = load_catalog(cmd.catalog.as_deref())?;
            match &cmd.skin_type {
                Some(raw) => {
                    let skin_type: types::category::SkinType = raw.parse()?;
                    let info = catalog.category(skin_type);
                    match cmd.format {
                        cli::ListFormat::Text => {
                            println!("{}: {}", skin_type, info.description);
                            for characteristic in &info.characteristics {
                                println!("  - {characteristic}");
                            }
                            if !info.recommendations.is_empty() {
                                println!("Recommendations:");
                                for recommendation in &info.recommendations {
                                    println!("  - {recommendation}");
                                }
                            }
                        }
                        cli::ListFormat::Json => {
                            println!("{}", serde_json::to_string_pretty(info)?);
                        }
                    }
                }
                None => match cmd.format {
                    cli::ListFormat::Text => {
                        for skin_type in types::category::SkinType::ALL {
                            let info = catalog.category(skin_type);
                            println!("{}: {}", skin_type, info.description);
                            for characteristic in &info.characteristics {
                                println!("  - {characteristic}");
                            }
                        }
                    }
                    cli::ListFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(catalog.categories())?);
                    }
                },
            }
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Check(cmd) => {
            let catalog = load_catalog(cmd.catalog.as_deref())?;
            let set = answers::from_file(&cmd.answers)?;
            let problems = assess::validate(&set, &catalog);
            if !problems.is_empty() {
                return Err(SkinTypeError::InvalidAnswers(problems));
            }
            println!("answers complete: every question has a valid choice");
            Ok(exit_code::SUCCESS)
        }
    }
}

fn load_catalog(path: Option<&Path>) -> Result<catalog::Catalog, SkinTypeError> {
    let catalog = match path {
        Some(path) => catalog::Catalog::from_file(path)?,
        None => catalog::Catalog::builtin(),
    };
    info!(
        questions = catalog.questions().len(),
        fingerprint = catalog.short_fingerprint(),
        "catalog ready"
    );
    Ok(catalog)
}

fn error_exit_code(e: &SkinTypeError) -> i32 {
    match e {
        SkinTypeError::InvalidAnswers(_)
        | SkinTypeError::InvalidCatalog(_)
        | SkinTypeError::UnknownSkinType(_)
        | SkinTypeError::AnswersParse(_)
        | SkinTypeError::PathNotFound(_) => exit_code::INVALID_INPUT,
        SkinTypeError::Telemetry(_)
        | SkinTypeError::Io(_)
        | SkinTypeError::Json(_)
        | SkinTypeError::Csv(_) => exit_code::RUNTIME_FAILURE,
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(error_exit_code(&e));
        }
    }
}
