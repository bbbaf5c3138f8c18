#![forbid(unsafe_code)]

//! `stemgen.toml` parsing and the built-in defaults it overrides
//!
//! Every key is optional. A missing file means the defaults below are used
//! unchanged.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File looked up in the working directory when `--config` is not given
pub const CONFIG_FILE_NAME: &str = "stemgen.toml";

/// Directory scanned when no root is given on the command line
pub const DEFAULT_ROOT: &str = "src";

/// Extensions of component source files
pub const DEFAULT_EXTENSIONS: &[&str] = &["tsx"];

/// Directory names that are never descended into
pub const DEFAULT_EXCLUDED_DIRS: &[&str] = &["node_modules", "dist", "build", ".git"];

/// Name markers that identify non-component files, as in `Foo.stories.tsx`
pub const DEFAULT_EXCLUDED_MARKERS: &[&str] = &["test", "stories"];

/// Marker inserted before the extension of generated files
pub const DEFAULT_TEST_MARKER: &str = "test";

/// Errors that can occur while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Console output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Jsonl,
}

/// Color setting for human output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorOption {
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorOption {
    pub fn to_color_choice(self) -> termcolor::ColorChoice {
        match self {
            ColorOption::Auto => termcolor::ColorChoice::Auto,
            ColorOption::Always => termcolor::ColorChoice::Always,
            ColorOption::Never => termcolor::ColorChoice::Never,
        }
    }
}

/// `[scan]` section: what the walker selects
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    pub root: PathBuf,
    pub extensions: Vec<String>,
    pub exclude_dirs: Vec<String>,
    pub exclude_markers: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        ScanConfig {
            root: PathBuf::from(DEFAULT_ROOT),
            extensions: to_strings(DEFAULT_EXTENSIONS),
            exclude_dirs: to_strings(DEFAULT_EXCLUDED_DIRS),
            exclude_markers: to_strings(DEFAULT_EXCLUDED_MARKERS),
        }
    }
}

/// `[stem]` section: how generated files are named
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StemConfig {
    pub test_marker: String,
}

impl Default for StemConfig {
    fn default() -> Self {
        StemConfig {
            test_marker: DEFAULT_TEST_MARKER.to_string(),
        }
    }
}

/// `[output]` section
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub color: ColorOption,
}

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub scan: ScanConfig,
    pub stem: StemConfig,
    pub output: OutputConfig,
}

impl Config {
    /// Loads and validates the configuration at `path`
    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Config::parse(&content)
    }

    /// Parses and validates configuration from TOML text
    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        let mut config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Uses `explicit` if given, else `stemgen.toml` in `dir` if present, else defaults
    pub fn resolve(explicit: Option<&Path>, dir: &Path) -> Result<Config, ConfigError> {
        if let Some(path) = explicit {
            return Config::load(path);
        }

        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            Config::load(&candidate)
        } else {
            Ok(Config::default())
        }
    }

    /// Normalizes extensions and rejects values that would make derived paths meaningless
    fn validate(&mut self) -> Result<(), ConfigError> {
        for ext in &mut self.scan.extensions {
            *ext = ext.trim_start_matches('.').to_string();
        }

        if self.scan.extensions.is_empty() {
            return Err(ConfigError::Invalid(
                "scan.extensions must list at least one extension".to_string(),
            ));
        }
        if self.scan.extensions.iter().any(String::is_empty) {
            return Err(ConfigError::Invalid(
                "scan.extensions must not contain empty entries".to_string(),
            ));
        }

        let marker = &self.stem.test_marker;
        if marker.is_empty() || marker.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(format!(
                "stem.test_marker {:?} must be a non-empty file name fragment",
                marker
            )));
        }

        Ok(())
    }

    /// File name suffixes that exclude a file from selection
    ///
    /// One `.<marker>.<ext>` entry per marker and extension. The test marker is
    /// always included so generated files are never treated as components.
    pub fn excluded_suffixes(&self) -> Vec<String> {
        let mut markers: Vec<&str> = self
            .scan
            .exclude_markers
            .iter()
            .map(String::as_str)
            .collect();
        if !markers.contains(&self.stem.test_marker.as_str()) {
            markers.push(&self.stem.test_marker);
        }

        markers
            .iter()
            .flat_map(|marker| {
                self.scan
                    .extensions
                    .iter()
                    .map(move |ext| format!(".{}.{}", marker, ext))
            })
            .collect()
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}
