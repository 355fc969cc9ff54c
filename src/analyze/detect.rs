use crate::types::{Presence, Section};
use regex::Regex;
use std::sync::OnceLock;
use tracing::debug;

struct Detector {
    section: Section,
    patterns: Vec<Regex>,
}

// Line-anchored rules use CRLF mode so `\r\n` endings behave like `\n`.
// Case-insensitive literals sit in `(?-u:...)` so only ASCII letters fold.
const RULES: &[(Section, &[&str])] = &[
    (Section::Title, &[r"\A# .*\S"]),
    (Section::Tagline, &[r"(?mR)^\*\*[^\n]+\*\*$"]),
    (Section::Badge, &[r"!\[.+?\]\(.+?\)"]),
    (Section::WhatAndWhy, &[r"(?imR)^## (?-u:What & Why)"]),
    (
        Section::QuickStart,
        &[
            r"(?imR)^## (?-u:Quick Start)",
            r"(?imR)^## (?-u:Getting Started)",
            r"(?imR)^## (?-u:Installation)",
        ],
    ),
    (Section::VisualPreview, &[r"(?imR)^## (?-u:Visual Preview)"]),
    (
        Section::Documentation,
        &[r"(?imR)^## (?-u:Documentation)", r"(?imR)^## (?-u:Docs)"],
    ),
    (
        Section::Contributors,
        &[
            r"(?imR)^## (?-u:Contributors)",
            r"(?imR)^## (?-u:Contributing)",
            r"(?imR)^## (?-u:How to Contribute)",
            r"(?imR)^## (?-u:Contribute)",
        ],
    ),
    (Section::License, &[r"(?imR)^## (?-u:License|Licensing)"]),
    (
        Section::TableOfContents,
        &[
            r"(?imR)^## (?-u:Table of Contents)",
            r"(?imR)^## (?-u:Contents)",
            r"(?imR)^## (?-u:Index)",
            r"(?imR)^## (?-u:TOC)",
        ],
    ),
    (Section::ProblemStatement, &[r"(?i-u)\*\*The Problem:\*\*"]),
    (Section::SolutionStatement, &[r"(?i-u)\*\*(?:Our )?Solution:\*\*"]),
    (Section::CodeBlock, &[r"(?s)```.*?```"]),
    (Section::Image, &[r"!\[.+?\]\(.+?\)"]),
    (
        Section::WikiLink,
        &[r"\[.+?\]\(https://github\.com/.+?/wiki.+?\)"],
    ),
    (
        Section::LicenseLink,
        &[
            r"(?i-u)\[MIT License\]\(LICENSE\)",
            r"(?i)(?-u:\[Apache).*?(?-u:\]\(LICENSE\))",
            r"(?i)(?-u:\[GPL).*?(?-u:\]\(LICENSE\))",
        ],
    ),
    (Section::HtmlComment, &[r"(?s)<!--.*?-->"]),
    (
        Section::DeleteInstruction,
        &[r"(?mR)^>[ \t]*\*\*DELETE:\*\*.+$"],
    ),
];

static DETECTORS: OnceLock<Vec<Detector>> = OnceLock::new();

fn detectors() -> &'static [Detector] {
    DETECTORS.get_or_init(|| {
        RULES
            .iter()
            .map(|(section, patterns)| Detector {
                section: *section,
                patterns: patterns
                    .iter()
                    .map(|pattern| Regex::new(pattern).unwrap())
                    .collect(),
            })
            .collect()
    })
}

impl Detector {
    fn matches(&self, document: &str) -> bool {
        self.patterns.iter().any(|pattern| pattern.is_match(document))
    }
}

pub fn detect_sections(document: &str) -> Presence {
    let mut presence = Presence::new();
    for detector in detectors() {
        let present = detector.matches(document);
        if present {
            debug!(section = %detector.section, "section detected");
        }
        presence.set(detector.section, present);
    }
    presence
}

pub fn is_detected(section: Section, document: &str) -> bool {
    detectors()
        .iter()
        .find(|detector| detector.section == section)
        .map(|detector| detector.matches(document))
        .unwrap_or(false)
}
