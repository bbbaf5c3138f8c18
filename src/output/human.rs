#![forbid(unsafe_code)]

//! Human-readable reporter with colorization support

use super::{Reporter, display_relative};
use crate::types::{ExecutionResult, FileOutcome, StemAction};
use std::io::{self, Write};
use std::path::Path;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// Writes one line per event to a color-capable writer
pub struct HumanReporter<W: WriteColor> {
    out: W,
}

impl HumanReporter<StandardStream> {
    /// Creates a reporter that writes to stdout
    pub fn stdout(color_choice: ColorChoice) -> Self {
        HumanReporter::new(StandardStream::stdout(color_choice))
    }
}

impl<W: WriteColor> HumanReporter<W> {
    pub fn new(out: W) -> Self {
        HumanReporter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn action_label(outcome: &FileOutcome) -> (&'static str, Color) {
    match (outcome.dry_run, outcome.action) {
        (true, StemAction::Create) => ("would create", Color::Cyan),
        (true, StemAction::Overwrite) => ("would overwrite", Color::Yellow),
        (false, StemAction::Create) => ("created", Color::Green),
        (false, StemAction::Overwrite) => ("overwrote", Color::Yellow),
    }
}

impl<W: WriteColor> Reporter for HumanReporter<W> {
    fn scan_started(&mut self, root: &Path) -> io::Result<()> {
        self.out.set_color(ColorSpec::new().set_bold(true))?;
        write!(self.out, "Scanning")?;
        self.out.reset()?;
        writeln!(self.out, " {}", root.display())
    }

    fn no_components(&mut self, root: &Path) -> io::Result<()> {
        writeln!(self.out, "No component files found in {}", root.display())
    }

    fn file_processed(&mut self, root: &Path, outcome: &FileOutcome) -> io::Result<()> {
        let (label, color) = action_label(outcome);

        write!(self.out, "  ")?;
        self.out.set_color(ColorSpec::new().set_fg(Some(color)))?;
        write!(self.out, "{}", label)?;
        self.out.reset()?;
        writeln!(self.out, " {}", display_relative(root, &outcome.test_path))
    }

    fn finished(&mut self, result: &ExecutionResult) -> io::Result<()> {
        self.out.set_color(ColorSpec::new().set_bold(true))?;
        write!(self.out, "Done:")?;
        self.out.reset()?;

        if result.planned > 0 {
            writeln!(
                self.out,
                " {} planned (dry run), {} skipped",
                result.planned, result.skipped
            )
        } else {
            writeln!(
                self.out,
                " {} created, {} overwritten, {} skipped",
                result.created, result.overwritten, result.skipped
            )
        }
    }
}
