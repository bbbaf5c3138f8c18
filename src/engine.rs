//! Component discovery and the stem generation run

pub mod executor;
pub mod file_walker;

pub use executor::ExecutionEngine;
pub use file_walker::{FileFilter, FileWalker};
