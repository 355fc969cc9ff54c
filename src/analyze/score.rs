use crate::types::{Presence, ScoreResult, MAX_SCORE};

pub fn score(presence: &Presence) -> ScoreResult {
    let mut total: i32 = 0;
    let mut missing_sections = Vec::new();
    let mut sections_to_remove = Vec::new();

    for (section, present) in presence.iter() {
        let weight = section.weight();
        if present && weight != 0 {
            total += weight;
            if weight < 0 {
                sections_to_remove.push(section);
            }
        } else if !present && weight > 0 {
            missing_sections.push(section);
        }
    }

    ScoreResult {
        total_score: total.clamp(0, i32::from(MAX_SCORE)) as u8,
        missing_sections,
        sections_to_remove,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Section;

    fn positive_sections() -> Vec<Section> {
        Section::ALL
            .into_iter()
            .filter(|section| section.weight() > 0)
            .collect()
    }

    fn score_of(sections: &[Section]) -> u8 {
        score(&Presence::with_present(sections)).total_score
    }

    #[test]
    fn empty_presence_scores_zero_and_misses_every_positive_section() {
        let result = score(&Presence::new());
        assert_eq!(result.total_score, 0);
        assert_eq!(result.missing_sections, positive_sections());
        assert!(result.sections_to_remove.is_empty());
    }

    #[test]
    fn all_positive_sections_score_one_hundred() {
        let result = score(&Presence::with_present(&positive_sections()));
        assert_eq!(result.total_score, 100);
        assert!(result.missing_sections.is_empty());
        assert!(result.sections_to_remove.is_empty());
    }

    #[test]
    fn each_positive_section_scores_its_weight() {
        for section in positive_sections() {
            assert_eq!(
                i32::from(score_of(&[section])),
                section.weight(),
                "{section}"
            );
        }
    }

    #[test]
    fn cumulative_scores() {
        let cases: &[(&[Section], u8)] = &[
            (&[Section::Title], 15),
            (&[Section::Title, Section::Tagline], 20),
            (&[Section::Title, Section::WhatAndWhy], 30),
            (&[Section::Title, Section::WhatAndWhy, Section::QuickStart], 40),
            (&[Section::Badge, Section::LicenseLink], 5),
            (&[Section::CodeBlock, Section::Image, Section::WikiLink], 15),
            (
                &[
                    Section::Title,
                    Section::WhatAndWhy,
                    Section::QuickStart,
                    Section::License,
                    Section::Contributors,
                    Section::CodeBlock,
                ],
                55,
            ),
            (
                &[
                    Section::Title,
                    Section::Tagline,
                    Section::Badge,
                    Section::WhatAndWhy,
                    Section::QuickStart,
                    Section::Documentation,
                    Section::Contributors,
                    Section::License,
                    Section::CodeBlock,
                    Section::Image,
                ],
                72,
            ),
        ];
        for (sections, expected) in cases {
            assert_eq!(score_of(sections), *expected, "{sections:?}");
        }
    }

    #[test]
    fn penalties_subtract_and_are_listed_for_removal() {
        let result = score(&Presence::with_present(&[
            Section::Title,
            Section::WhatAndWhy,
            Section::HtmlComment,
            Section::DeleteInstruction,
        ]));
        assert_eq!(result.total_score, 10);
        assert_eq!(
            result.sections_to_remove,
            vec![Section::HtmlComment, Section::DeleteInstruction]
        );
        assert!(!result.missing_sections.contains(&Section::HtmlComment));
        assert!(!result.missing_sections.contains(&Section::DeleteInstruction));
    }

    #[test]
    fn score_clamps_at_zero() {
        assert_eq!(
            score_of(&[Section::HtmlComment, Section::DeleteInstruction]),
            0
        );
        assert_eq!(
            score_of(&[
                Section::Badge,
                Section::HtmlComment,
                Section::DeleteInstruction
            ]),
            0
        );
    }

    #[test]
    fn missing_sections_follow_declaration_order() {
        let result = score(&Presence::with_present(&[Section::Title, Section::QuickStart]));
        assert_eq!(result.missing_sections[0], Section::Tagline);
        assert_eq!(result.missing_sections[1], Section::Badge);
        assert_eq!(result.missing_sections[2], Section::WhatAndWhy);
        assert!(result.missing_sections.contains(&Section::License));
        assert!(result.missing_sections.contains(&Section::Contributors));
    }

    #[test]
    fn absent_penalties_are_neither_missing_nor_removable() {
        let result = score(&Presence::new());
        for section in [Section::HtmlComment, Section::DeleteInstruction] {
            assert!(!result.missing_sections.contains(&section));
            assert!(!result.sections_to_remove.contains(&section));
        }
    }
}
