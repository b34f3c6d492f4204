//! Turns a selection into the strings a user actually copies: the shareable
//! URL, an iframe embed snippet, and npm usage code.
//!
//! Everything here is a pure function from `(selection, origin)` to a string.
//! Clipboard access, "copied!" feedback and other delivery mechanics belong
//! to the caller; keeping the text generation separate is what makes it
//! testable at all.

use crate::selection::Selection;

/// The npm package the generated usage code imports from.
pub const PACKAGE_NAME: &str = "brandkit-icons";

/// The single shareable URL for a selection: `{origin}/icons/{id1},{id2},...`.
///
/// Ids are joined with commas in insertion order and inserted verbatim; the
/// catalog restricts them to URL-safe characters, so no encoding is applied.
/// An empty selection produces the empty string, the "nothing to embed"
/// sentinel.
pub fn canonical_url(selection: &Selection, origin: &str) -> String {
    if selection.is_empty() {
        return String::new();
    }

    let ids = selection.ids().collect::<Vec<_>>().join(",");

    format!("{origin}/icons/{ids}")
}

/// A copy-pasteable HTML fragment embedding the canonical URL: an iframe,
/// a plain-link fallback, and a commented `?size=` override example.
///
/// Empty selection produces the empty string.
pub fn embed_snippet(selection: &Selection, origin: &str) -> String {
    if selection.is_empty() {
        return String::new();
    }

    let url = canonical_url(selection, origin);

    format!(
        r#"<!-- Embed using iframe -->
<iframe
  src="{url}"
  width="200"
  height="60"
  frameborder="0"
  title="Brand Icons">
</iframe>

<!-- Or embed using direct link -->
<a href="{url}" target="_blank">
  View Icons
</a>

<!-- Custom size: add ?size=64 -->
<iframe
  src="{url}?size=64"
  width="250"
  height="80"
  frameborder="0">
</iframe>"#
    )
}

/// Npm usage code for a selection: the install command, one import statement
/// listing the PascalCase component names, and one usage line per icon.
///
/// An empty selection still gets the install command, just nothing to import.
pub fn package_snippet(selection: &Selection) -> String {
    let install = format!("// Install\nnpm install {PACKAGE_NAME}");

    if selection.is_empty() {
        return install;
    }

    let names: Vec<String> = selection.ids().map(to_pascal_case).collect();
    let usage: Vec<String> = names.iter().map(|name| format!("<{name} />")).collect();

    format!(
        "{install}\n\n// Usage\nimport {{ {imports} }} from '{PACKAGE_NAME}';\n\n// In your component\n{usage}",
        imports = names.join(", "),
        usage = usage.join("\n"),
    )
}

/// Converts an icon id to the PascalCase component name used in imports:
/// split on `-`, `_` and whitespace, uppercase each segment's first letter,
/// concatenate. `my-icon` becomes `MyIcon`, `github` becomes `Github`.
pub fn to_pascal_case(id: &str) -> String {
    id.split(|c: char| c == '-' || c == '_' || c.is_whitespace())
        .filter(|segment| !segment.is_empty())
        .flat_map(|segment| {
            let mut chars = segment.chars();
            let first = chars.next().into_iter().flat_map(char::to_uppercase);

            first.chain(chars).collect::<Vec<_>>()
        })
        .collect()
}
