//! Source path normalization.

/// Normalizes a documentation source path into its published HTML counterpart.
///
/// Strips one trailing `.md` extension (if present) and one leading `md/`
/// segment (if present), then appends `.html`. Assumes the source tree mirrors
/// the published HTML tree one-for-one.
///
/// # Examples
///
/// - `normalize_doc_path("md/abeninfo.md")` → `"abeninfo.html"`
/// - `normalize_doc_path("abenabap_structure.md")` → `"abenabap_structure.html"`
pub fn normalize_doc_path(relative_file_path: &str) -> String {
    let stem = relative_file_path
        .strip_suffix(".md")
        .unwrap_or(relative_file_path);
    let stem = stem.strip_prefix("md/").unwrap_or(stem);
    format!("{stem}.html")
}
