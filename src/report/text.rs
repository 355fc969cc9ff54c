use super::Report;
use crate::suggestions::{removal_hint_for, suggestion_for};
use console::{style, StyledObject};

const SEPARATOR: &str = "---";

fn paint<D>(value: D, color: bool) -> StyledObject<D> {
    style(value).force_styling(color)
}

pub fn to_text(report: &Report, color: bool) -> String {
    let result = &report.analysis.result;
    let stats = &report.analysis.stats;
    let mut output = String::new();

    output.push_str(&format!(
        "{}\n",
        paint(format!("Analyzing README file: {}", report.file), color).bold()
    ));
    output.push_str(&format!("{SEPARATOR}\n"));

    let score_line = format!("Total Score: {}/100", result.total_score);
    let score_line = match result.total_score {
        80..=100 => paint(score_line, color).green(),
        50..=79 => paint(score_line, color).yellow(),
        _ => paint(score_line, color).red(),
    };
    output.push_str(&format!("{}\n", score_line.bold()));
    output.push_str(&format!(
        "{}\n",
        paint(
            format!(
                "{} lines, {} sections, {} code blocks, {} images",
                stats.lines, stats.h2_sections, stats.code_blocks, stats.images
            ),
            color
        )
        .dim()
    ));
    output.push_str(&format!("{SEPARATOR}\n"));

    if result.missing_sections.is_empty() {
        output.push_str(&format!(
            "{}\n",
            paint("All recommended sections are present", color).green()
        ));
    } else {
        output.push_str(&format!("{}\n", paint("Missing Sections:", color).bold()));
        for section in &result.missing_sections {
            output.push_str(&format!("  ❌ {}\n", paint(section, color).red()));
            if let Some(text) = suggestion_for(*section) {
                output.push_str(&format!("     → {}\n", paint(text, color).dim()));
            }
        }
    }
    output.push_str(&format!("{SEPARATOR}\n"));

    if result.is_clean() {
        output.push_str(&format!(
            "{}\n",
            paint("No sections need to be removed", color).green()
        ));
    } else {
        output.push_str(&format!(
            "{}\n",
            paint("Sections that should be removed:", color).bold()
        ));
        for section in &result.sections_to_remove {
            output.push_str(&format!("  ⚠️  {}\n", paint(section, color).yellow()));
            if let Some(text) = removal_hint_for(*section) {
                output.push_str(&format!("     → {}\n", paint(text, color).dim()));
            }
        }
    }

    output
}
