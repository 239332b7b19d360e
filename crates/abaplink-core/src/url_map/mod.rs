//! Versioned documentation URL mapping.
//!
//! Maps a documentation source's relative `.md` path to the canonical
//! help.sap.com URL, choosing between the cloud and legacy URL schemes based
//! on version hints sniffed from the library id and config.

mod normalize;
mod tier;
mod version;

pub use normalize::normalize_doc_path;
pub use tier::{base_url_for, DocTier};
pub use version::{extract_version, DocVersion};

use crate::config::DocUrlConfig;

/// Maps a relative documentation source path to its canonical help.sap.com
/// URL.
///
/// `library_id` and `config` are read only for version sniffing; the URL path
/// itself comes from `relative_file_path`, which is assumed to mirror the
/// published HTML tree one-for-one. Pure and side-effect-free: no I/O and no
/// network access, despite producing a URL.
///
/// Returns `None` when no deterministic mapping exists. The current
/// heuristics always degrade to the cloud base instead of failing, so this
/// implementation never actually produces `None`, but callers must still
/// handle it for parity with stricter sibling generators.
///
/// # Examples
///
/// - `map_to_url("abap-docs", "md/abeninfo.md", &config, None)` →
///   `Some("https://help.sap.com/doc/abapdocu_cp_index_htm/CLOUD/en-US/abeninfo.html")`
pub fn map_to_url(
    library_id: &str,
    relative_file_path: &str,
    config: &DocUrlConfig,
    anchor: Option<&str>,
) -> Option<String> {
    let html_file = normalize_doc_path(relative_file_path);
    let version = extract_version(library_id, config);
    let base = base_url_for(version.as_ref());
    let full = format!("{base}/{html_file}");
    match anchor {
        Some(a) if !a.is_empty() => Some(format!("{full}#{a}")),
        _ => Some(full),
    }
}
