use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "skintype",
    version,
    about = "Weighted skin type assessment from questionnaire answers"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    Score(ScoreCommand),
    Questions(QuestionsCommand),
    Categories(CategoriesCommand),
    Check(CheckCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    #[arg(
        long,
        required_unless_present = "answer",
        conflicts_with = "answer"
    )]
    pub answers: Option<PathBuf>,

    #[arg(
        long = "answer",
        value_name = "ID=CHOICE",
        required_unless_present = "answers",
        conflicts_with = "answers"
    )]
    pub answer: Vec<String>,

    #[arg(long)]
    pub catalog: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,

    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args)]
pub struct QuestionsCommand {
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ListFormat,
}

#[derive(Args)]
pub struct CategoriesCommand {
    pub skin_type: Option<String>,

    #[arg(long)]
    pub catalog: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ListFormat,
}

#[derive(Args)]
pub struct CheckCommand {
    pub answers: PathBuf,

    #[arg(long)]
    pub catalog: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Md,
    Json,
    Csv,
}

#[derive(Clone, ValueEnum)]
pub enum ListFormat {
    Text,
    Json,
}
