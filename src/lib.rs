#![forbid(unsafe_code)]

//! Stemgen: skeletal test files for UI components
//!
//! Stemgen walks a source tree, finds component files that have no test file
//! next to them, guesses how each component is exported and writes a small
//! render test ("stem") to be finished by hand.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod output;
pub mod rules;
pub mod stem;
pub mod types;

pub use error::StemError;
