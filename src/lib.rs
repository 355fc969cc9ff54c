//! README completeness scoring.
//!
//! [`detect_sections`] turns a document into a [`Presence`] map, [`score`]
//! turns that map into a bounded [`ScoreResult`], and [`suggestion_for`]
//! supplies remediation text for each missing section.

pub mod analyze;
pub mod config;
pub mod error;
pub mod loader;
pub mod report;
pub mod suggestions;
pub mod types;

pub use analyze::detect::detect_sections;
pub use analyze::score::score;
pub use analyze::{analyze, Analysis};
pub use error::{ReadmeStatsError, Result};
pub use suggestions::suggestion_for;
pub use types::{Presence, ScoreResult, Section};
