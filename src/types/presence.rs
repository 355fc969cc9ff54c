use super::section::Section;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<Section, bool>", into = "BTreeMap<Section, bool>")]
pub struct Presence {
    sections: BTreeMap<Section, bool>,
}

impl Presence {
    pub fn new() -> Self {
        Self {
            sections: Section::ALL.into_iter().map(|s| (s, false)).collect(),
        }
    }

    pub fn with_present(present: &[Section]) -> Self {
        let mut presence = Self::new();
        for section in present {
            presence.set(*section, true);
        }
        presence
    }

    pub fn set(&mut self, section: Section, present: bool) {
        self.sections.insert(section, present);
    }

    pub fn is_present(&self, section: Section) -> bool {
        self.sections.get(&section).copied().unwrap_or(false)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Section, bool)> + '_ {
        self.sections.iter().map(|(section, present)| (*section, *present))
    }

    pub fn detected(&self) -> impl Iterator<Item = Section> + '_ {
        self.iter()
            .filter(|(_, present)| *present)
            .map(|(section, _)| section)
    }
}

impl Default for Presence {
    fn default() -> Self {
        Self::new()
    }
}

// Partial maps are filled with `false` so the all-keys invariant holds.
impl From<BTreeMap<Section, bool>> for Presence {
    fn from(map: BTreeMap<Section, bool>) -> Self {
        let mut presence = Self::new();
        for (section, present) in map {
            presence.set(section, present);
        }
        presence
    }
}

impl From<Presence> for BTreeMap<Section, bool> {
    fn from(presence: Presence) -> Self {
        presence.sections
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_contains_every_section_as_absent() {
        let presence = Presence::new();
        assert_eq!(presence.iter().count(), Section::ALL.len());
        assert!(presence.iter().all(|(_, present)| !present));
    }

    #[test]
    fn iteration_follows_declaration_order() {
        let presence = Presence::with_present(&[Section::DeleteInstruction, Section::Title]);
        let order: Vec<_> = presence.iter().map(|(section, _)| section).collect();
        assert_eq!(order, Section::ALL.to_vec());
        let detected: Vec<_> = presence.detected().collect();
        assert_eq!(detected, vec![Section::Title, Section::DeleteInstruction]);
    }

    #[test]
    fn deserialize_fills_missing_sections() {
        let presence: Presence =
            serde_json::from_str(r#"{"title": true}"#).expect("partial map should parse");
        assert!(presence.is_present(Section::Title));
        assert!(!presence.is_present(Section::License));
        assert_eq!(presence.iter().count(), Section::ALL.len());
    }

    #[test]
    fn deserialize_rejects_unknown_sections() {
        let result = serde_json::from_str::<Presence>(r#"{"title": true, "unknownSection": true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn deserialize_rejects_non_boolean_values() {
        assert!(serde_json::from_str::<Presence>(r#"{"title": 1}"#).is_err());
        assert!(serde_json::from_str::<Presence>(r#"{"title": "yes"}"#).is_err());
        assert!(serde_json::from_str::<Presence>(r#"{"title": null}"#).is_err());
    }

    #[test]
    fn serializes_as_flat_camel_case_map() {
        let presence = Presence::with_present(&[Section::QuickStart]);
        let json = serde_json::to_string(&presence).expect("presence should serialize");
        assert!(json.starts_with(r#"{"title":false,"#));
        assert!(json.contains(r#""quickStart":true"#));
    }
}
