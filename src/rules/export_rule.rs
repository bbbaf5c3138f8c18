#![forbid(unsafe_code)]

//! Regex cascade that guesses how a component is exported
//!
//! This is a heuristic, not a parser. Re-exports, renamed exports, several
//! exports per file and wrapped components all end up in the fallback.

use crate::stem::{base_name, relative_import_path};
use crate::types::{ComponentExportInfo, ExportKind};
use regex::Regex;
use std::path::Path;
use tracing::debug;

/// Name used when the file name gives nothing to capitalize
pub const FALLBACK_COMPONENT_NAME: &str = "Component";

/// Patterns in evaluation order. Capture group 1 is the component name.
const BUILTIN_PATTERNS: &[(ExportKind, &str)] = &[
    (
        ExportKind::FunctionDefault,
        r"export\s+default\s+function\s+([A-Za-z_$][\w$]*)\s*(?:<[^>]*>\s*)?\(",
    ),
    (
        ExportKind::BareDefault,
        r"export\s+default\s+([A-Za-z_$][\w$]*)\s*;",
    ),
    (
        ExportKind::NamedFunction,
        r"export\s+function\s+([A-Za-z_$][\w$]*)\s*(?:<[^>]*>\s*)?\(",
    ),
    (
        ExportKind::NamedConst,
        r"export\s+const\s+([A-Za-z_$][\w$]*)\s*=\s*\(",
    ),
];

/// One pattern-to-kind mapping
#[derive(Debug, Clone)]
pub struct ExportRule {
    kind: ExportKind,
    pattern: Regex,
}

impl ExportRule {
    pub fn new(kind: ExportKind, pattern: &str) -> Result<Self, regex::Error> {
        Ok(ExportRule {
            kind,
            pattern: Regex::new(pattern)?,
        })
    }

    pub fn kind(&self) -> ExportKind {
        self.kind
    }

    /// Returns the captured component name if the rule matches
    pub fn match_name(&self, text: &str) -> Option<String> {
        self.pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().to_string())
    }
}

/// Ordered list of export rules; the first match wins
#[derive(Debug, Clone)]
pub struct ExportInferencer {
    rules: Vec<ExportRule>,
}

impl ExportInferencer {
    /// Compiles the built-in rules
    pub fn new() -> Result<Self, regex::Error> {
        let rules = BUILTIN_PATTERNS
            .iter()
            .map(|(kind, pattern)| ExportRule::new(*kind, pattern))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(ExportInferencer { rules })
    }

    pub fn rules(&self) -> &[ExportRule] {
        &self.rules
    }

    /// Infers the export of `source` (whose contents are `text`) as imported from `test_path`
    pub fn infer(&self, text: &str, source: &Path, test_path: &Path) -> ComponentExportInfo {
        let (kind, name) = self
            .rules
            .iter()
            .find_map(|rule| rule.match_name(text).map(|name| (rule.kind, name)))
            .unwrap_or_else(|| (ExportKind::Fallback, fallback_name(source)));

        debug!(
            source = %source.display(),
            rule = %kind,
            name = %name,
            "inferred component export"
        );

        let import_path = relative_import_path(test_path, source);
        ComponentExportInfo::new(kind, name, &import_path)
    }
}

/// Capitalizes the first character of the file's base name
///
/// Characters without an uppercase form (digits, `_`) are kept as they are.
pub fn fallback_name(source: &Path) -> String {
    let base = base_name(source);
    let mut chars = base.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => FALLBACK_COMPONENT_NAME.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn infer(text: &str, file: &str) -> ComponentExportInfo {
        let inferencer = ExportInferencer::new().unwrap();
        let source = Path::new(file);
        let test_path = crate::stem::test_path_for(source, "test");
        inferencer.infer(text, source, &test_path)
    }

    #[test]
    fn test_rules_are_in_priority_order() {
        let inferencer = ExportInferencer::new().unwrap();
        let kinds: Vec<ExportKind> = inferencer.rules().iter().map(|r| r.kind()).collect();
        assert_eq!(
            kinds,
            vec![
                ExportKind::FunctionDefault,
                ExportKind::BareDefault,
                ExportKind::NamedFunction,
                ExportKind::NamedConst,
            ]
        );
    }

    #[test]
    fn test_default_function_export() {
        let info = infer(
            "export default function Button() {\n  return <button />;\n}\n",
            "src/Button.tsx",
        );
        assert_eq!(info.kind, ExportKind::FunctionDefault);
        assert_eq!(info.import_name, "Button");
        assert_eq!(info.import_line, "import Button from \"./Button\";");
        assert_eq!(info.jsx_tag, "<Button />");
    }

    #[test]
    fn test_default_function_with_props_and_generics() {
        let info = infer(
            "export default function List<T>({ items }: Props<T>) {}\n",
            "src/List.tsx",
        );
        assert_eq!(info.kind, ExportKind::FunctionDefault);
        assert_eq!(info.import_name, "List");
    }

    #[test]
    fn test_bare_default_export() {
        let info = infer(
            "const Header = () => <h1 />;\n\nexport default Header;\n",
            "src/Header.tsx",
        );
        assert_eq!(info.kind, ExportKind::BareDefault);
        assert_eq!(info.import_name, "Header");
        assert_eq!(info.import_line, "import Header from \"./Header\";");
    }

    #[test]
    fn test_anonymous_default_function_is_not_bare_default() {
        let info = infer("export default function () {}\n", "src/anon.tsx");
        assert_eq!(info.kind, ExportKind::Fallback);
        assert_eq!(info.import_name, "Anon");
    }

    #[test]
    fn test_named_function_export() {
        let info = infer("export function Modal(props: Props) {}\n", "src/Modal.tsx");
        assert_eq!(info.kind, ExportKind::NamedFunction);
        assert_eq!(info.import_line, "import { Modal } from \"./Modal\";");
        assert_eq!(info.jsx_tag, "<Modal />");
    }

    #[test]
    fn test_named_const_arrow_export() {
        let info = infer(
            "export const Card = ({ title }: Props) => <div>{title}</div>;\n",
            "src/Card.tsx",
        );
        assert_eq!(info.kind, ExportKind::NamedConst);
        assert_eq!(info.import_name, "Card");
        assert_eq!(info.import_line, "import { Card } from \"./Card\";");
    }

    #[test]
    fn test_default_function_beats_named_const() {
        let text = "export const Bar = () => null;\nexport default function Foo() {}\n";
        let info = infer(text, "src/Foo.tsx");
        assert_eq!(info.kind, ExportKind::FunctionDefault);
        assert_eq!(info.import_name, "Foo");
    }

    #[test]
    fn test_bare_default_beats_named_function() {
        let text = "export function Helper() {}\nconst Page = () => null;\nexport default Page;\n";
        let info = infer(text, "src/Page.tsx");
        assert_eq!(info.kind, ExportKind::BareDefault);
        assert_eq!(info.import_name, "Page");
    }

    #[test]
    fn test_fallback_capitalizes_file_name() {
        let info = infer("export { default } from './Other';\n", "src/widget.tsx");
        assert_eq!(info.kind, ExportKind::Fallback);
        assert_eq!(info.import_name, "Widget");
        assert_eq!(info.import_line, "import Widget from \"./widget\";");
        assert_eq!(info.jsx_tag, "<Widget />");
    }

    #[test]
    fn test_fallback_for_wrapped_component() {
        let info = infer(
            "const Inner = () => null;\nexport default memo(Inner);\n",
            "src/inner.tsx",
        );
        assert_eq!(info.kind, ExportKind::Fallback);
        assert_eq!(info.import_name, "Inner");
    }

    #[test]
    fn test_fallback_name_non_letter_start_is_unchanged() {
        assert_eq!(fallback_name(Path::new("src/_private.tsx")), "_private");
        assert_eq!(fallback_name(Path::new("src/404.tsx")), "404");
    }

    #[test]
    fn test_fallback_name_empty_base() {
        assert_eq!(fallback_name(Path::new("")), FALLBACK_COMPONENT_NAME);
    }

    #[test]
    fn test_inference_is_deterministic() {
        let text = "export const Tile = () => null;\n";
        assert_eq!(infer(text, "src/Tile.tsx"), infer(text, "src/Tile.tsx"));
    }
}
