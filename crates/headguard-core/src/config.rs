//! Configuration types

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// HeadGuard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Project name, prepended to every manifest entry
    pub project: String,

    /// Manifest file listing headers to process
    pub manifest: PathBuf,

    /// Project root path (defaults to the current directory)
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Guard style configuration
    #[serde(default)]
    pub style: GuardStyle,

    /// Scan configuration
    #[serde(default)]
    pub scan: ScanConfig,

    /// Verify configuration
    #[serde(default)]
    pub verify: VerifyConfig,
}

impl Config {
    /// Load configuration from a JSON or YAML file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?,
            _ => serde_json::from_str(&content)
                .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?,
        };
        Ok(config)
    }

    /// Resolve the project root, falling back to the current directory
    pub fn resolved_root(&self) -> Result<PathBuf> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }
}

/// Guard style configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GuardStyle {
    /// Suffix appended to every guard name
    pub suffix: String,

    /// Primary delimiter separating path segments
    pub path_delimiter: char,

    /// Secondary delimiter separating the file stem from its extension
    pub ext_delimiter: char,

    /// Number of leading path segments to drop (project-root depth)
    pub root_skip: usize,

    /// Segments never emitted into guard names
    pub ignore_segments: Vec<String>,

    /// Maximum permissible guard name length
    pub max_guard_len: usize,
}

impl Default for GuardStyle {
    fn default() -> Self {
        Self {
            suffix: "_H_".into(),
            path_delimiter: '/',
            ext_delimiter: '.',
            root_skip: 5,
            ignore_segments: vec!["include".into()],
            max_guard_len: 120,
        }
    }
}

/// Scan configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// File extensions treated as headers
    pub extensions: Vec<String>,

    /// Directory names to exclude
    pub exclude_dirs: Vec<String>,

    /// Only list headers containing a `#pragma once` line
    pub require_pragma: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["h".into(), "hpp".into(), "hh".into(), "hxx".into()],
            exclude_dirs: vec![".git".into(), "build".into(), "third_party".into()],
            require_pragma: true,
        }
    }
}

/// Verify configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VerifyConfig {
    /// Width of the status prefix on modified-file lines
    pub status_prefix_width: usize,

    /// Width of the prefix on header-listing lines
    pub listing_prefix_width: usize,

    /// Suffix stripped from header-listing lines
    pub listing_suffix: String,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            status_prefix_width: 3,
            listing_prefix_width: 2,
            listing_suffix: "#pragma once".into(),
        }
    }
}
