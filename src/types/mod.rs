pub mod config;
pub mod presence;
pub mod scoring;
pub mod section;

pub use presence::Presence;
pub use scoring::{Score, ScoreResult, SectionScore, MAX_SCORE};
pub use section::Section;
