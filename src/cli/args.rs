#![forbid(unsafe_code)]

//! Command-line arguments
//!
//! Raw tokens are normalized before clap sees them: unknown flags and any
//! positional after the first are dropped, and repeated switches collapse to
//! one. Only the recognized options below ever reach the parser.

use crate::config;
use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Switches that take no value
const SWITCHES: &[&str] = &[
    "--dry-run",
    "--force",
    "--verbose",
    "-v",
    "--help",
    "-h",
    "--version",
    "-V",
];

/// Options that take a value, as `--opt value` or `--opt=value`
const VALUE_OPTIONS: &[&str] = &["--format", "--color", "--config"];

/// Generate skeletal test files for UI components that do not have one
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "stemgen", version, about, args_override_self = true)]
pub struct Cli {
    /// Directory to scan (defaults to `src`, or `scan.root` in stemgen.toml)
    pub root: Option<PathBuf>,

    /// Report what would be written without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Overwrite test files that already exist
    #[arg(long)]
    pub force: bool,

    /// Console output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// When to color human output
    #[arg(long, value_enum)]
    pub color: Option<ColorChoice>,

    /// Configuration file (defaults to ./stemgen.toml if present)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Log debug details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

/// Output format selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Jsonl,
}

impl From<OutputFormat> for config::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Human => config::OutputFormat::Human,
            OutputFormat::Jsonl => config::OutputFormat::Jsonl,
        }
    }
}

/// Color choice selected on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl From<ColorChoice> for config::ColorOption {
    fn from(choice: ColorChoice) -> Self {
        match choice {
            ColorChoice::Auto => config::ColorOption::Auto,
            ColorChoice::Always => config::ColorOption::Always,
            ColorChoice::Never => config::ColorOption::Never,
        }
    }
}

/// What a run scans and whether it may write; fixed once parsed
///
/// `root_dir` is already resolved against the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    pub root_dir: PathBuf,
    pub dry_run: bool,
    pub force: bool,
}

impl Cli {
    /// Parses the process arguments, exiting with clap's usage error on bad values
    pub fn parse_args() -> Self {
        Cli::parse_from(normalize_args(std::env::args_os()))
    }

    /// Parses an explicit token list; the first token is the program name
    pub fn try_parse_tokens<I, T>(tokens: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Cli::try_parse_from(normalize_args(tokens))
    }

    /// Builds the run options with the root resolved against `cwd`
    ///
    /// `default_root` is used when no root was given.
    pub fn options(&self, cwd: &Path, default_root: &Path) -> CliOptions {
        let root = self.root.as_deref().unwrap_or(default_root);
        CliOptions {
            root_dir: cwd.join(root),
            dry_run: self.dry_run,
            force: self.force,
        }
    }
}

/// Reduces raw tokens to the ones the parser understands
///
/// The first token (the program name) is always kept. The first token not
/// starting with `-` is the root; later ones are dropped. Unknown `-` tokens
/// are dropped.
pub fn normalize_args<I, T>(tokens: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut tokens = tokens.into_iter().map(Into::into);
    let mut normalized = Vec::new();

    if let Some(program) = tokens.next() {
        normalized.push(program);
    }

    let mut root_seen = false;
    let mut switches_seen: Vec<String> = Vec::new();

    while let Some(token) = tokens.next() {
        let text = token.to_string_lossy().into_owned();

        if !text.starts_with('-') {
            if !root_seen {
                root_seen = true;
                normalized.push(token);
            }
            continue;
        }

        if SWITCHES.contains(&text.as_str()) {
            if !switches_seen.contains(&text) {
                switches_seen.push(text);
                normalized.push(token);
            }
            continue;
        }

        let name = text.split_once('=').map_or(text.as_str(), |(name, _)| name);
        if VALUE_OPTIONS.contains(&name) {
            normalized.push(token);
            if !text.contains('=') {
                if let Some(value) = tokens.next() {
                    normalized.push(value);
                }
            }
        }
    }

    normalized
}
