pub mod json;
pub mod md;
pub mod text;

use crate::analyze::Analysis;
use crate::error::ReadmeStatsError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
    Md,
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub file: String,
    #[serde(flatten)]
    pub analysis: Analysis,
}

impl Report {
    pub fn new(file: impl Into<String>, analysis: Analysis) -> Self {
        Self {
            file: file.into(),
            analysis,
        }
    }
}

pub fn render(
    report: &Report,
    format: OutputFormat,
    color: bool,
) -> Result<String, ReadmeStatsError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(report, color)),
        OutputFormat::Json => json::to_json(report).map_err(ReadmeStatsError::Json),
        OutputFormat::Md => Ok(md::to_markdown(report)),
    }
}
