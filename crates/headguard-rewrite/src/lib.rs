//! HeadGuard Rewrite
//!
//! In-process guard insertion: manifest loading, the line-rewrite engine,
//! the sequential per-file pipeline, directory scanning, and listing
//! verification.

pub mod insert;
pub mod manifest;
pub mod pipeline;
pub mod scan;
pub mod verify;

pub use insert::{GuardInserter, RewriteOutcome};
pub use pipeline::{run_pipeline, FileFailure, RunReport};
pub use scan::scan_headers;
pub use verify::{verify_listings, VerifyReport};
