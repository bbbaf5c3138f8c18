#![forbid(unsafe_code)]

//! Sequential stem generation over a directory tree
//!
//! Each component file is fully handled (existence check, read, inference,
//! render, write) before the next one starts. The first failing read or write
//! ends the run; files written before it stay in place.

use crate::cli::CliOptions;
use crate::config::Config;
use crate::engine::file_walker::FileWalker;
use crate::error::StemError;
use crate::output::Reporter;
use crate::rules::ExportInferencer;
use crate::stem;
use crate::types::{ExecutionResult, FileOutcome, StemAction};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Drives discovery, inference and writing for one run
pub struct ExecutionEngine {
    walker: FileWalker,
    inferencer: ExportInferencer,
    test_marker: String,
}

impl ExecutionEngine {
    pub fn new(config: &Config) -> Result<Self, StemError> {
        Ok(ExecutionEngine {
            walker: FileWalker::from_config(config),
            inferencer: ExportInferencer::new()?,
            test_marker: config.stem.test_marker.clone(),
        })
    }

    /// Runs over `options.root_dir`, reporting each event to `reporter`
    ///
    /// `root_dir` should already be resolved against the working directory.
    pub fn run(
        &self,
        options: &CliOptions,
        reporter: &mut dyn Reporter,
    ) -> Result<ExecutionResult, StemError> {
        let root = options.root_dir.as_path();
        reporter.scan_started(root).map_err(StemError::Output)?;

        let files = self.walker.walk(root);
        let mut result = ExecutionResult {
            root: root.to_path_buf(),
            discovered: files.len(),
            ..ExecutionResult::default()
        };

        if files.is_empty() {
            reporter.no_components(root).map_err(StemError::Output)?;
            reporter.finished(&result).map_err(StemError::Output)?;
            return Ok(result);
        }

        for source in &files {
            match self.process_file(source, options)? {
                Some(outcome) => {
                    match (outcome.dry_run, outcome.action) {
                        (true, _) => result.planned += 1,
                        (false, StemAction::Create) => result.created += 1,
                        (false, StemAction::Overwrite) => result.overwritten += 1,
                    }
                    reporter
                        .file_processed(root, &outcome)
                        .map_err(StemError::Output)?;
                }
                None => result.skipped += 1,
            }
        }

        reporter.finished(&result).map_err(StemError::Output)?;
        Ok(result)
    }

    /// Handles one component file; `None` means its test already exists and was left alone
    pub fn process_file(
        &self,
        source: &Path,
        options: &CliOptions,
    ) -> Result<Option<FileOutcome>, StemError> {
        let test_path = stem::test_path_for(source, &self.test_marker);
        let exists = test_path.exists();

        if exists && !options.force {
            debug!(test = %test_path.display(), "test file exists, skipping");
            return Ok(None);
        }

        let bytes = fs::read(source).map_err(|e| StemError::Read {
            path: source.to_path_buf(),
            source: e,
        })?;
        let text = String::from_utf8_lossy(&bytes);
        let info = self.inferencer.infer(&text, source, &test_path);
        let content = stem::render(source, &info);

        let action = if exists {
            StemAction::Overwrite
        } else {
            StemAction::Create
        };

        if !options.dry_run {
            fs::write(&test_path, content).map_err(|e| StemError::Write {
                path: test_path.clone(),
                source: e,
            })?;
        }

        Ok(Some(FileOutcome {
            source: source.to_path_buf(),
            test_path,
            action,
            kind: info.kind,
            dry_run: options.dry_run,
        }))
    }
}
