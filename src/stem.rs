#![forbid(unsafe_code)]

//! Test file paths and the stem template
//!
//! A stem is a generated test file that renders a component once and leaves
//! the assertions to be written by hand. Everything here is a pure function of
//! its inputs.

use crate::types::ComponentExportInfo;
use std::path::{Component, Path, PathBuf};

/// Returns the test file path for `source`, in the same directory
///
/// `Button.tsx` becomes `Button.<marker>.tsx`.
pub fn test_path_for(source: &Path, test_marker: &str) -> PathBuf {
    match source.extension() {
        Some(ext) => source.with_extension(format!("{}.{}", test_marker, ext.to_string_lossy())),
        None => source.with_extension(test_marker),
    }
}

/// File name without its final extension
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Module specifier for importing `source` from a file at `test_path`
///
/// Uses forward slashes and drops the extension. Specifiers that do not climb
/// out of the test file's directory start with `./`.
pub fn relative_import_path(test_path: &Path, source: &Path) -> String {
    let from: Vec<Component> = test_path
        .parent()
        .map(|p| p.components().collect())
        .unwrap_or_default();
    let target = source.with_extension("");
    let to: Vec<Component> = target.components().collect();

    let common = from.iter().zip(to.iter()).take_while(|(a, b)| a == b).count();

    let mut parts: Vec<String> = Vec::new();
    for _ in common..from.len() {
        parts.push("..".to_string());
    }
    for component in &to[common..] {
        parts.push(component.as_os_str().to_string_lossy().into_owned());
    }

    let joined = parts.join("/");
    if joined.starts_with("..") {
        joined
    } else {
        format!("./{}", joined)
    }
}

/// Renders the test file for `source`
pub fn render(source: &Path, info: &ComponentExportInfo) -> String {
    format!(
        r#"import {{ render, screen }} from "@testing-library/react";
import "@testing-library/jest-dom";
{import_line}

describe("{suite}", () => {{
  it("renders without crashing", () => {{
    render({tag});
    // Add assertions, e.g. expect(screen.getByRole("button")).toBeInTheDocument();
  }});
}});
"#,
        import_line = info.import_line,
        suite = base_name(source),
        tag = info.jsx_tag,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ExportKind;

    #[test]
    fn test_path_replaces_extension() {
        assert_eq!(
            test_path_for(Path::new("src/Button.tsx"), "test"),
            PathBuf::from("src/Button.test.tsx")
        );
        assert_eq!(
            test_path_for(Path::new("/abs/ui/Card.jsx"), "spec"),
            PathBuf::from("/abs/ui/Card.spec.jsx")
        );
    }

    #[test]
    fn test_path_keeps_inner_dots() {
        assert_eq!(
            test_path_for(Path::new("src/Foo.component.tsx"), "test"),
            PathBuf::from("src/Foo.component.test.tsx")
        );
    }

    #[test]
    fn test_path_without_extension() {
        assert_eq!(
            test_path_for(Path::new("src/Makefile"), "test"),
            PathBuf::from("src/Makefile.test")
        );
    }

    #[test]
    fn test_path_is_deterministic() {
        let source = Path::new("a/b/Widget.tsx");
        assert_eq!(test_path_for(source, "test"), test_path_for(source, "test"));
    }

    #[test]
    fn test_relative_import_for_sibling() {
        let source = Path::new("src/Button.tsx");
        let test = test_path_for(source, "test");
        assert_eq!(relative_import_path(&test, source), "./Button");
    }

    #[test]
    fn test_relative_import_for_absolute_paths() {
        let source = Path::new("/repo/src/widgets/widget.tsx");
        let test = Path::new("/repo/src/widgets/widget.test.tsx");
        assert_eq!(relative_import_path(test, source), "./widget");
    }

    #[test]
    fn test_relative_import_climbs_directories() {
        let source = Path::new("src/components/Button.tsx");
        let test = Path::new("src/__tests__/Button.test.tsx");
        assert_eq!(relative_import_path(test, source), "../components/Button");
    }

    #[test]
    fn test_relative_import_descends_directories() {
        let source = Path::new("src/components/Button.tsx");
        let test = Path::new("src/Button.test.tsx");
        assert_eq!(relative_import_path(test, source), "./components/Button");
    }

    #[test]
    fn test_base_name() {
        assert_eq!(base_name(Path::new("src/Button.tsx")), "Button");
        assert_eq!(base_name(Path::new("src/Foo.component.tsx")), "Foo.component");
    }

    #[test]
    fn test_render_button_stem() {
        let source = Path::new("src/Button.tsx");
        let info = ComponentExportInfo::new(ExportKind::FunctionDefault, "Button", "./Button");
        let content = render(source, &info);

        let expected = r#"import { render, screen } from "@testing-library/react";
import "@testing-library/jest-dom";
import Button from "./Button";

describe("Button", () => {
  it("renders without crashing", () => {
    render(<Button />);
    // Add assertions, e.g. expect(screen.getByRole("button")).toBeInTheDocument();
  });
});
"#;
        assert_eq!(content, expected);
    }

    #[test]
    fn test_render_named_import() {
        let source = Path::new("src/Card.tsx");
        let info = ComponentExportInfo::new(ExportKind::NamedConst, "Card", "./Card");
        let content = render(source, &info);

        assert!(content.contains("import { Card } from \"./Card\";\n"));
        assert!(content.contains("describe(\"Card\""));
        assert!(content.contains("render(<Card />);"));
    }
}
