//! Guard insertion engine
//!
//! Rewrites a header in place: `#ifndef`/`#define` go immediately before
//! the `#pragma once` line, `#endif // NAME` goes at end of file.

use std::path::Path;

use regex::Regex;
use tracing::{debug, warn};

use headguard_core::{Error, Result};

/// Outcome of a single rewrite attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// Guard lines were inserted and the file rewritten
    Guarded,
    /// No `#pragma once` line found; file left untouched
    NoPragma,
    /// The guard is already present; file left untouched
    AlreadyGuarded,
}

/// In-process guard inserter
pub struct GuardInserter {
    pragma: Regex,
    max_guard_len: usize,
}

impl GuardInserter {
    /// Create an inserter enforcing the given maximum guard length
    pub fn new(max_guard_len: usize) -> Self {
        Self {
            pragma: Regex::new(r"^\s*#\s*pragma\s+once\b").unwrap(),
            max_guard_len,
        }
    }

    /// Insert `guard` into the header at `path`
    pub fn insert(&self, path: &Path, guard: &str) -> Result<RewriteOutcome> {
        if guard.len() > self.max_guard_len {
            return Err(Error::GuardTooLong {
                guard: guard.to_string(),
                limit: self.max_guard_len,
            });
        }

        if !path.is_file() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let ifndef = format!("#ifndef {}", guard);

        if content.lines().any(|line| line.trim() == ifndef) {
            debug!("Guard {} already present in {:?}", guard, path);
            return Ok(RewriteOutcome::AlreadyGuarded);
        }

        let mut records: Vec<String> = Vec::with_capacity(content.lines().count() + 4);
        let mut inserted = false;

        for line in content.lines() {
            if !inserted && self.pragma.is_match(line) {
                records.push(ifndef.clone());
                records.push(format!("#define {}", guard));
                inserted = true;
            }
            records.push(line.to_string());
        }

        if !inserted {
            warn!("No pragma found in {:?}, not adding include guard", path);
            return Ok(RewriteOutcome::NoPragma);
        }

        records.push(String::new());
        records.push(format!("#endif // {}", guard));

        let mut output = records.join("\n");
        output.push('\n');
        std::fs::write(path, output)?;

        debug!("Inserted guard {} into {:?}", guard, path);
        Ok(RewriteOutcome::Guarded)
    }
}
