//! Listing verification
//!
//! Cross-checks the listing of pragma-carrying headers against the files a
//! guard-insertion run actually modified (`git status -s` style output).

use std::collections::HashSet;
use std::path::Path;

use headguard_core::{Result, VerifyConfig};

/// Result of a listing verification
#[derive(Debug, Clone, Default)]
pub struct VerifyReport {
    /// Number of distinct modified files
    pub modified: usize,
    /// Header-listing entries found in the modified set
    pub matched: usize,
    /// Header-listing entries with no modified-file counterpart
    pub unmatched: Vec<String>,
}

/// Verify the header `listing` against the modified-files `status` file
pub fn verify_listings(
    status: &Path,
    listing: &Path,
    config: &VerifyConfig,
) -> Result<VerifyReport> {
    let status_content = std::fs::read_to_string(status)?;
    let listing_content = std::fs::read_to_string(listing)?;
    Ok(verify_content(&status_content, &listing_content, config))
}

/// Pure verification over listing contents
pub fn verify_content(status: &str, listing: &str, config: &VerifyConfig) -> VerifyReport {
    let modified: HashSet<&str> = status
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| strip_prefix_width(line, config.status_prefix_width).trim())
        .collect();

    let mut report = VerifyReport {
        modified: modified.len(),
        ..Default::default()
    };

    for line in listing.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let stripped = strip_prefix_width(trimmed, config.listing_prefix_width);
        let stripped = stripped
            .strip_suffix(&config.listing_suffix)
            .unwrap_or(stripped)
            .trim();
        if modified.contains(stripped) {
            report.matched += 1;
        } else {
            report.unmatched.push(stripped.to_string());
        }
    }

    report
}

/// Strip a fixed-width column prefix, counted in characters
fn strip_prefix_width(line: &str, width: usize) -> &str {
    match line.char_indices().nth(width) {
        Some((idx, _)) => &line[idx..],
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_match_counting() {
        let status = " M proj/a/b.h\n M proj/c/d.h\n";
        let listing = "# a/b.h#pragma once\n# c/d.h#pragma once\n";
        let config = VerifyConfig::default();

        // Listing paths lack the project prefix, so nothing matches as-is
        let report = verify_content(status, listing, &config);
        assert_eq!(report.modified, 2);
        assert_eq!(report.matched, 0);
        assert_eq!(report.unmatched, vec!["a/b.h", "c/d.h"]);
    }

    #[test]
    fn test_matched_and_unmatched_entries() {
        let status = " M a/b.h\n M c/d.h\n";
        let listing = "# a/b.h#pragma once\n# c/d.h#pragma once\n# e/f.h#pragma once\n";
        let config = VerifyConfig::default();

        let report = verify_content(status, listing, &config);
        assert_eq!(report.modified, 2);
        assert_eq!(report.matched, 2);
        assert_eq!(report.unmatched, vec!["e/f.h"]);
    }

    #[test]
    fn test_duplicate_status_lines_counted_once() {
        let status = " M a/b.h\n M a/b.h\n";
        let report = verify_content(status, "", &VerifyConfig::default());
        assert_eq!(report.modified, 1);
    }

    #[test]
    fn test_blank_lines_skipped() {
        let status = " M a/b.h\n\n";
        let listing = "\n# a/b.h#pragma once\n\n";
        let report = verify_content(status, listing, &VerifyConfig::default());
        assert_eq!(report.modified, 1);
        assert_eq!(report.matched, 1);
        assert!(report.unmatched.is_empty());
    }

    #[test]
    fn test_custom_prefix_widths() {
        let status = "?? a/b.h\n";
        let listing = "a/b.h\n";
        let config = VerifyConfig {
            status_prefix_width: 3,
            listing_prefix_width: 0,
            listing_suffix: String::new(),
        };

        let report = verify_content(status, listing, &config);
        assert_eq!(report.matched, 1);
    }
}
