use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "readme-stats",
    version,
    about = "CLI tool to analyze README files for completeness"
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
    /// Analyze the README file for completeness
    Analyze(AnalyzeCommand),
    /// List scored sections with their weights and suggestions
    Sections(SectionsCommand),
}

#[derive(Args)]
pub struct AnalyzeCommand {
    /// Path to the README file
    pub file: PathBuf,
    #[arg(short, long, value_enum)]
    pub format: Option<ReportFormat>,
    /// Exit with code 1 when the score is below this value
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub fail_under: Option<u8>,
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Args)]
pub struct SectionsCommand {
    /// Show a single section, e.g. quickStart
    pub name: Option<String>,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Md,
}
