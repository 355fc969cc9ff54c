use crate::error::{ReadmeStatsError, Result};
use std::path::Path;
use tracing::debug;

const UTF8_BOM: &str = "\u{feff}";

pub fn load_document(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(ReadmeStatsError::FileNotFound(path.display().to_string()));
    }
    let bytes = std::fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "read document");
    decode_text(&bytes).ok_or_else(|| ReadmeStatsError::NotText(path.display().to_string()))
}

fn decode_text(bytes: &[u8]) -> Option<String> {
    if bytes.contains(&0) {
        return None;
    }
    let text = std::str::from_utf8(bytes).ok()?;
    Some(text.strip_prefix(UTF8_BOM).unwrap_or(text).to_string())
}
