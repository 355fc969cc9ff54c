use super::presence::Presence;
use super::section::Section;
use serde::Serialize;

pub type Score = u8;

pub const MAX_SCORE: Score = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreResult {
    pub total_score: Score,
    pub missing_sections: Vec<Section>,
    pub sections_to_remove: Vec<Section>,
}

/// Per-section view of how a presence map was scored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionScore {
    pub section: Section,
    pub weight: i32,
    pub present: bool,
    pub points: i32,
}

impl ScoreResult {
    pub fn breakdown(presence: &Presence) -> Vec<SectionScore> {
        presence
            .iter()
            .map(|(section, present)| SectionScore {
                section,
                weight: section.weight(),
                present,
                points: if present { section.weight() } else { 0 },
            })
            .collect()
    }

    pub fn is_clean(&self) -> bool {
        self.sections_to_remove.is_empty()
    }
}
