#![forbid(unsafe_code)]

//! Core value types shared across the crate

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// The export shape a component file was recognized as
///
/// Variants are listed in the order the inference rules are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportKind {
    /// `export default function Name(`
    FunctionDefault,
    /// `export default Name;`
    BareDefault,
    /// `export function Name(`
    NamedFunction,
    /// `export const Name = (`
    NamedConst,
    /// Nothing matched; the name was synthesized from the file name
    Fallback,
}

impl ExportKind {
    /// Whether the component is imported with a default import
    pub fn is_default_import(self) -> bool {
        match self {
            ExportKind::FunctionDefault | ExportKind::BareDefault | ExportKind::Fallback => true,
            ExportKind::NamedFunction | ExportKind::NamedConst => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExportKind::FunctionDefault => "function_default",
            ExportKind::BareDefault => "bare_default",
            ExportKind::NamedFunction => "named_function",
            ExportKind::NamedConst => "named_const",
            ExportKind::Fallback => "fallback",
        }
    }
}

impl fmt::Display for ExportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to import from a component file and how to invoke it in a test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentExportInfo {
    pub kind: ExportKind,
    /// Identifier bound by the import
    pub import_name: String,
    /// Complete import statement, e.g. `import Button from "./Button";`
    pub import_line: String,
    /// Self-closing invocation, e.g. `<Button />`
    pub jsx_tag: String,
}

impl ComponentExportInfo {
    /// Builds the import line and tag for `name` imported from `import_path`
    pub fn new(kind: ExportKind, name: impl Into<String>, import_path: &str) -> Self {
        let import_name = name.into();
        let import_line = if kind.is_default_import() {
            format!("import {} from \"{}\";", import_name, import_path)
        } else {
            format!("import {{ {} }} from \"{}\";", import_name, import_path)
        };
        let jsx_tag = format!("<{} />", import_name);

        ComponentExportInfo {
            kind,
            import_name,
            import_line,
            jsx_tag,
        }
    }
}

/// What happened (or would happen) to a test path
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StemAction {
    Create,
    Overwrite,
}

/// The result of processing one component file that was not skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileOutcome {
    pub source: PathBuf,
    pub test_path: PathBuf,
    pub action: StemAction,
    pub kind: ExportKind,
    /// True when nothing was written
    pub dry_run: bool,
}

/// Summary of a whole run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecutionResult {
    pub root: PathBuf,
    /// Component files found by the walker
    pub discovered: usize,
    pub created: usize,
    pub overwritten: usize,
    /// Files whose test already existed and were left alone
    pub skipped: usize,
    /// Actions reported but not performed because of a dry run
    pub planned: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_import_line() {
        let info = ComponentExportInfo::new(ExportKind::FunctionDefault, "Button", "./Button");
        assert_eq!(info.import_name, "Button");
        assert_eq!(info.import_line, "import Button from \"./Button\";");
        assert_eq!(info.jsx_tag, "<Button />");
    }

    #[test]
    fn test_named_import_line() {
        let info = ComponentExportInfo::new(ExportKind::NamedConst, "Card", "./Card");
        assert_eq!(info.import_line, "import { Card } from \"./Card\";");
        assert_eq!(info.jsx_tag, "<Card />");
    }

    #[test]
    fn test_fallback_is_default_import() {
        assert!(ExportKind::Fallback.is_default_import());
        assert!(ExportKind::BareDefault.is_default_import());
        assert!(!ExportKind::NamedFunction.is_default_import());
    }

    #[test]
    fn test_export_kind_serializes_snake_case() {
        let json = serde_json::to_string(&ExportKind::NamedFunction).unwrap();
        assert_eq!(json, "\"named_function\"");
        assert_eq!(ExportKind::NamedFunction.to_string(), "named_function");
    }
}
