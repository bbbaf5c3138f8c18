#![forbid(unsafe_code)]

//! JSONL reporter for machine-readable output
//!
//! Emits one JSON object per line:
//! 1. One `scan` record
//! 2. One `file` record per created, overwritten or planned file
//! 3. One `summary` record

use super::{Reporter, display_relative};
use crate::types::{ExecutionResult, ExportKind, FileOutcome, StemAction};
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;

/// Writes JSON Lines records to any writer
pub struct JsonlReporter<W: Write> {
    out: W,
}

impl JsonlReporter<io::Stdout> {
    pub fn stdout() -> Self {
        JsonlReporter::new(io::stdout())
    }
}

impl<W: Write> JsonlReporter<W> {
    pub fn new(out: W) -> Self {
        JsonlReporter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit<T: Serialize>(&mut self, record: &T) -> io::Result<()> {
        serde_json::to_writer(&mut self.out, record)?;
        self.out.write_all(b"\n")
    }
}

#[derive(Serialize)]
struct ScanRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    root: String,
}

#[derive(Serialize)]
struct FileRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    action: StemAction,
    dry_run: bool,
    source: String,
    test: String,
    export: ExportKind,
}

#[derive(Serialize)]
struct SummaryRecord {
    #[serde(rename = "type")]
    record_type: &'static str,
    discovered: usize,
    created: usize,
    overwritten: usize,
    skipped: usize,
    planned: usize,
}

impl<W: Write> Reporter for JsonlReporter<W> {
    fn scan_started(&mut self, root: &Path) -> io::Result<()> {
        self.emit(&ScanRecord {
            record_type: "scan",
            root: root.display().to_string(),
        })
    }

    fn no_components(&mut self, _root: &Path) -> io::Result<()> {
        // The summary record that follows carries `discovered: 0`.
        Ok(())
    }

    fn file_processed(&mut self, root: &Path, outcome: &FileOutcome) -> io::Result<()> {
        self.emit(&FileRecord {
            record_type: "file",
            action: outcome.action,
            dry_run: outcome.dry_run,
            source: display_relative(root, &outcome.source),
            test: display_relative(root, &outcome.test_path),
            export: outcome.kind,
        })
    }

    fn finished(&mut self, result: &ExecutionResult) -> io::Result<()> {
        self.emit(&SummaryRecord {
            record_type: "summary",
            discovered: result.discovered,
            created: result.created,
            overwritten: result.overwritten,
            skipped: result.skipped,
            planned: result.planned,
        })?;
        self.out.flush()
    }
}
