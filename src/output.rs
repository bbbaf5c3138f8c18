#![forbid(unsafe_code)]

//! Console reporting for a run
//!
//! The executor calls a [`Reporter`] as it goes, so lines for files that were
//! already written are printed even if a later file fails.

pub mod human;
pub mod jsonl;

pub use human::HumanReporter;
pub use jsonl::JsonlReporter;

use crate::types::{ExecutionResult, FileOutcome};
use std::io;
use std::path::Path;

/// Receives run events in order
pub trait Reporter {
    /// Called once before discovery with the resolved root
    fn scan_started(&mut self, root: &Path) -> io::Result<()>;

    /// Called instead of any per-file event when discovery found nothing
    fn no_components(&mut self, root: &Path) -> io::Result<()>;

    /// Called after each file that was created, overwritten or planned
    fn file_processed(&mut self, root: &Path, outcome: &FileOutcome) -> io::Result<()>;

    /// Called once at the end of a successful run
    fn finished(&mut self, result: &ExecutionResult) -> io::Result<()>;
}

/// Displays `path` relative to `root` when it lies under it
pub(crate) fn display_relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}
