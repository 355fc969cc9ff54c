use crate::error::ReadmeStatsError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Structural element a README can contain.
///
/// Variant order is the iteration order of every presence map and the
/// order in which sections are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    Title,
    Tagline,
    Badge,
    WhatAndWhy,
    QuickStart,
    VisualPreview,
    Documentation,
    Contributors,
    License,
    TableOfContents,
    ProblemStatement,
    SolutionStatement,
    CodeBlock,
    Image,
    WikiLink,
    LicenseLink,
    HtmlComment,
    DeleteInstruction,
}

impl Section {
    pub const ALL: [Section; 18] = [
        Section::Title,
        Section::Tagline,
        Section::Badge,
        Section::WhatAndWhy,
        Section::QuickStart,
        Section::VisualPreview,
        Section::Documentation,
        Section::Contributors,
        Section::License,
        Section::TableOfContents,
        Section::ProblemStatement,
        Section::SolutionStatement,
        Section::CodeBlock,
        Section::Image,
        Section::WikiLink,
        Section::LicenseLink,
        Section::HtmlComment,
        Section::DeleteInstruction,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Section::Title => "title",
            Section::Tagline => "tagline",
            Section::Badge => "badge",
            Section::WhatAndWhy => "whatAndWhy",
            Section::QuickStart => "quickStart",
            Section::VisualPreview => "visualPreview",
            Section::Documentation => "documentation",
            Section::Contributors => "contributors",
            Section::License => "license",
            Section::TableOfContents => "tableOfContents",
            Section::ProblemStatement => "problemStatement",
            Section::SolutionStatement => "solutionStatement",
            Section::CodeBlock => "codeBlock",
            Section::Image => "image",
            Section::WikiLink => "wikiLink",
            Section::LicenseLink => "licenseLink",
            Section::HtmlComment => "htmlComment",
            Section::DeleteInstruction => "deleteInstruction",
        }
    }

    /// Score contribution when the section is present.
    ///
    /// Negative weights mark template leftovers. Positive weights sum to 100.
    pub const fn weight(self) -> i32 {
        match self {
            Section::Title => 15,
            Section::Tagline => 5,
            Section::Badge => 2,
            Section::WhatAndWhy => 15,
            Section::QuickStart => 10,
            Section::VisualPreview => 5,
            Section::Documentation => 5,
            Section::Contributors => 5,
            Section::License => 5,
            Section::TableOfContents => 5,
            Section::ProblemStatement => 5,
            Section::SolutionStatement => 5,
            Section::CodeBlock => 5,
            Section::Image => 5,
            Section::WikiLink => 5,
            Section::LicenseLink => 3,
            Section::HtmlComment => -10,
            Section::DeleteInstruction => -10,
        }
    }

    pub const fn is_penalty(self) -> bool {
        self.weight() < 0
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = ReadmeStatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.name() == s)
            .ok_or_else(|| ReadmeStatsError::UnknownSection(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_weights_sum_to_one_hundred() {
        let sum: i32 = Section::ALL
            .iter()
            .map(|section| section.weight())
            .filter(|weight| *weight > 0)
            .sum();
        assert_eq!(sum, 100);
    }

    #[test]
    fn penalties_are_the_template_artifacts() {
        let penalties: Vec<_> = Section::ALL
            .into_iter()
            .filter(|section| section.is_penalty())
            .collect();
        assert_eq!(
            penalties,
            vec![Section::HtmlComment, Section::DeleteInstruction]
        );
        assert_eq!(Section::HtmlComment.weight(), -10);
        assert_eq!(Section::DeleteInstruction.weight(), -10);
    }

    #[test]
    fn all_is_in_declaration_order() {
        let mut sorted = Section::ALL;
        sorted.sort();
        assert_eq!(sorted, Section::ALL);
    }

    #[test]
    fn name_matches_serde_wire_name() {
        for section in Section::ALL {
            let json = serde_json::to_string(&section).expect("section should serialize");
            assert_eq!(json, format!("\"{}\"", section.name()));
        }
    }

    #[test]
    fn from_str_round_trips_names() {
        for section in Section::ALL {
            assert_eq!(section.name().parse::<Section>().ok(), Some(section));
        }
    }

    #[test]
    fn from_str_rejects_unknown_names() {
        let err = "unknownSection"
            .parse::<Section>()
            .expect_err("unknown section should fail");
        assert!(err.to_string().contains("unknownSection"));
        assert!("Title".parse::<Section>().is_err());
    }
}
