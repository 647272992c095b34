//! Guard insertion pipeline
//!
//! Processes manifest entries sequentially, one file at a time, in manifest
//! order. A per-file failure is reported and counted but never halts the
//! run.

use std::path::PathBuf;

use tracing::{error, info};

use headguard_core::{build_guard_name, Config, Result};

use crate::insert::{GuardInserter, RewriteOutcome};
use crate::manifest;

/// A single failed file
#[derive(Debug, Clone)]
pub struct FileFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Summary of a pipeline run
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub processed: usize,
    pub guarded: usize,
    pub no_pragma: usize,
    pub already_guarded: usize,
    pub failures: Vec<FileFailure>,
}

impl RunReport {
    /// Number of files that failed
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Run the guard-insertion pipeline described by `config`
pub fn run_pipeline(config: &Config) -> Result<RunReport> {
    let root = config.resolved_root()?;
    let entries = manifest::load_manifest(&config.manifest)?;
    let inserter = GuardInserter::new(config.style.max_guard_len);

    info!(
        "Processing {} headers from {:?}",
        entries.len(),
        config.manifest
    );

    let mut report = RunReport::default();
    for entry in &entries {
        report.processed += 1;
        let path = manifest::resolve_entry(&root, &config.project, entry);

        let outcome = build_guard_name(&path.to_string_lossy(), &config.style)
            .and_then(|guard| inserter.insert(&path, &guard));

        match outcome {
            Ok(RewriteOutcome::Guarded) => report.guarded += 1,
            Ok(RewriteOutcome::NoPragma) => report.no_pragma += 1,
            Ok(RewriteOutcome::AlreadyGuarded) => report.already_guarded += 1,
            Err(err) => {
                error!("Failed to write to file {:?}: {}", path, err);
                report.failures.push(FileFailure {
                    path,
                    error: err.to_string(),
                });
            }
        }
    }

    Ok(report)
}
