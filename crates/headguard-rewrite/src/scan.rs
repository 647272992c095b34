//! Header scanner
//!
//! Walks the project tree to (re)generate the manifest of headers carrying
//! a `#pragma once` line.

use std::path::{Path, PathBuf};

use regex::Regex;
use tracing::{info, warn};
use walkdir::WalkDir;

use headguard_core::{Result, ScanConfig};

/// Scan `root` recursively for header files matching `config`
pub fn scan_headers(root: &Path, config: &ScanConfig) -> Result<Vec<PathBuf>> {
    let pragma = Regex::new(r"(?m)^\s*#\s*pragma\s+once\b").unwrap();

    let mut headers: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if !has_header_extension(path, &config.extensions) {
            continue;
        }
        if is_excluded(path, root, &config.exclude_dirs) {
            continue;
        }
        if config.require_pragma {
            let content = match std::fs::read_to_string(path) {
                Ok(content) => content,
                Err(err) => {
                    warn!("Skipping unreadable file {:?}: {}", path, err);
                    continue;
                }
            };
            if !pragma.is_match(&content) {
                continue;
            }
        }
        headers.push(path.to_path_buf());
    }

    headers.sort();
    info!("Found {} headers under {:?}", headers.len(), root);
    Ok(headers)
}

fn has_header_extension(path: &Path, extensions: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| extensions.iter().any(|e| e == ext))
        .unwrap_or(false)
}

fn is_excluded(path: &Path, root: &Path, exclude_dirs: &[String]) -> bool {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative.components().any(|component| {
        component
            .as_os_str()
            .to_str()
            .map(|name| exclude_dirs.iter().any(|d| d == name))
            .unwrap_or(false)
    })
}
