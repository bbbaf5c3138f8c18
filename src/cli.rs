//! CLI argument parsing

pub mod args;

// Re-export types for convenient access
pub use args::{Cli, CliOptions, ColorChoice, OutputFormat, normalize_args};
