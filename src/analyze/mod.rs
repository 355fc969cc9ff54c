pub mod detect;
pub mod score;
pub mod stats;

use crate::types::{Presence, ScoreResult};
use serde::Serialize;
use stats::DocumentStats;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Analysis {
    pub presence: Presence,
    pub result: ScoreResult,
    pub stats: DocumentStats,
}

pub fn analyze(document: &str) -> Analysis {
    let presence = detect::detect_sections(document);
    let result = score::score(&presence);
    let stats = stats::document_stats(document);
    info!(
        total_score = result.total_score,
        missing = result.missing_sections.len(),
        to_remove = result.sections_to_remove.len(),
        "analysis complete"
    );
    Analysis {
        presence,
        result,
        stats,
    }
}
