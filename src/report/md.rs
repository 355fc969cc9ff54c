use super::Report;
use crate::suggestions::{removal_hint_for, suggestion_for};
use crate::types::ScoreResult;

pub fn to_markdown(report: &Report) -> String {
    let result = &report.analysis.result;
    let stats = &report.analysis.stats;
    let mut output = String::new();
    output.push_str("# README Report\n\n");
    output.push_str(&format!("File: `{}`\n\n", report.file));
    output.push_str(&format!("Total score: {}/100\n\n", result.total_score));

    output.push_str("## Sections\n\n");
    output.push_str("| Section | Weight | Present | Points |\n");
    output.push_str("|---------|-------:|:-------:|-------:|\n");
    for entry in ScoreResult::breakdown(&report.analysis.presence) {
        output.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            entry.section,
            entry.weight,
            if entry.present { "yes" } else { "no" },
            entry.points
        ));
    }
    output.push('\n');

    output.push_str("## Missing Sections\n\n");
    if result.missing_sections.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for section in &result.missing_sections {
            match suggestion_for(*section) {
                Some(text) => output.push_str(&format!("- `{}`: {}\n", section, text)),
                None => output.push_str(&format!("- `{}`\n", section)),
            }
        }
        output.push('\n');
    }

    output.push_str("## Sections To Remove\n\n");
    if result.sections_to_remove.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for section in &result.sections_to_remove {
            match removal_hint_for(*section) {
                Some(text) => output.push_str(&format!("- `{}`: {}\n", section, text)),
                None => output.push_str(&format!("- `{}`\n", section)),
            }
        }
        output.push('\n');
    }

    output.push_str("## Stats\n\n");
    output.push_str(&format!(
        "- lines: {}\n- h2 sections: {}\n- shields.io badges: {}\n- code blocks: {} ({} tagged)\n- images: {}\n- tables: {}\n- links: {}\n- horizontal rules: {}\n",
        stats.lines,
        stats.h2_sections,
        stats.shields_badges,
        stats.code_blocks,
        stats.tagged_code_blocks,
        stats.images,
        stats.tables,
        stats.links,
        stats.horizontal_rules
    ));

    output
}
