//! Manifest loading
//!
//! A manifest is a plain-text file listing one header per line, as produced
//! by `headguard scan` (or historically by grep): a leading path-marker
//! character followed by the path relative to the project directory.

use std::path::{Path, PathBuf};

use tracing::debug;

use headguard_core::Result;

/// Load manifest entries: trimmed lines with the leading marker stripped
pub fn load_manifest(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)?;
    let entries = parse_manifest(&content);
    debug!("Loaded {} manifest entries from {:?}", entries.len(), path);
    Ok(entries)
}

/// Parse manifest content into entries, skipping blank lines
pub fn parse_manifest(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                return None;
            }
            let mut chars = trimmed.chars();
            chars.next();
            Some(chars.as_str().to_string())
        })
        .collect()
}

/// Resolve a manifest entry to an absolute header path
pub fn resolve_entry(root: &Path, project: &str, entry: &str) -> PathBuf {
    root.join(format!("{}{}", project, entry))
}
