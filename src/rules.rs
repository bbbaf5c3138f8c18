#![forbid(unsafe_code)]

//! Export shape inference for component files

mod export_rule;

pub use export_rule::{ExportInferencer, ExportRule, FALLBACK_COMPONENT_NAME, fallback_name};
