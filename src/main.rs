mod cli;

use clap::Parser;
use readme_stats::error::ReadmeStatsError;
use readme_stats::report::{self, OutputFormat, Report};
use readme_stats::suggestions::{removal_hint_for, suggestion_for};
use readme_stats::types::Section;
use readme_stats::{analyze, config, loader};
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const BELOW_THRESHOLD: i32 = 1;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_logging(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn run() -> Result<i32, ReadmeStatsError> {
    let cli = cli::Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    match cli.command {
        cli::Commands::Analyze(cmd) => {
            let document = loader::load_document(&cmd.file)?;
            let loaded = config::load_config(&cmd.file)?.unwrap_or_default();
            debug!(config = ?loaded.report, "resolved report config");

            info!(file = %cmd.file.display(), "analyzing README");
            let analysis = analyze(&document);
            let total_score = analysis.result.total_score;

            let output_format = match cmd.format {
                Some(cli::ReportFormat::Text) => OutputFormat::Text,
                Some(cli::ReportFormat::Json) => OutputFormat::Json,
                Some(cli::ReportFormat::Md) => OutputFormat::Md,
                None => loaded.report.format.unwrap_or(OutputFormat::Text),
            };
            let color = !cmd.no_color
                && loaded.report.color.unwrap_or(true)
                && console::colors_enabled();

            if !cli.quiet {
                let report = Report::new(cmd.file.display().to_string(), analysis);
                let rendered = report::render(&report, output_format, color)?;
                print!("{rendered}");
                if !rendered.ends_with('\n') {
                    println!();
                }
            }

            let threshold = cmd.fail_under.or(loaded.report.fail_under);
            match threshold {
                Some(min) if total_score < min => {
                    eprintln!("score {total_score} is below the required minimum of {min}");
                    Ok(exit_code::BELOW_THRESHOLD)
                }
                _ => Ok(exit_code::SUCCESS),
            }
        }
        cli::Commands::Sections(cmd) => {
            let sections = match cmd.name.as_deref() {
                Some(name) => vec![name.parse::<Section>()?],
                None => Section::ALL.to_vec(),
            };

            if cli.quiet {
                return Ok(exit_code::SUCCESS);
            }
            for section in sections {
                let hint = suggestion_for(section)
                    .or_else(|| removal_hint_for(section))
                    .unwrap_or_default();
                println!("{:<18} {:>4}  {}", section.name(), section.weight(), hint);
            }
            Ok(exit_code::SUCCESS)
        }
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
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
