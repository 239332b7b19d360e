//! Version sniffing from library id and config hints.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::config::DocUrlConfig;

/// Version tag derived from library hints. Exists only for the duration of
/// one mapping call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocVersion {
    /// The "latest"/"cloud" sentinel: always maps to the cloud documentation
    /// base, regardless of any numeric version also present in the hints.
    Latest,
    /// A `<major>.<minor>` release tag such as "7.58".
    Release(String),
}

impl fmt::Display for DocVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocVersion::Latest => write!(f, "latest"),
            DocVersion::Release(release) => write!(f, "{}", release),
        }
    }
}

/// Decimal version embedded in a path-like string: `7.58` preceded by `/`,
/// `_`, or `-` and followed by `/`, `_`, `-`, `.`, or end-of-string.
static DECIMAL_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[/_-](\d+\.\d+)(?:[/_.-]|$)").expect("decimal version regex is valid"));

/// Compact three-digit version under the same boundary rule: `758`, read back
/// as `7.58`.
static COMPACT_VERSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[/_-](\d{3})(?:[/_.-]|$)").expect("compact version regex is valid"));

/// Extracts the documentation version from the library id and config hints.
///
/// Priority order, first match wins:
///
/// 1. any hint containing "latest" or "cloud" (case-insensitive) forces
///    [`DocVersion::Latest`] and short-circuits the scans below;
/// 2. decimal scan over `base_url`, then `path_pattern`, then `library_id`;
/// 3. compact three-digit scan over `library_id`, then `path_pattern`, then
///    `base_url`. The source order is deliberately the reverse of the decimal
///    scan's. The compact scan only runs once the decimal scan has failed for
///    every source; it is a second full pass, not a per-source fallback.
///
/// Returns `None` when no hint carries a recognizable version.
pub fn extract_version(library_id: &str, config: &DocUrlConfig) -> Option<DocVersion> {
    let path_pattern = config.path_pattern.as_deref().unwrap_or("");
    let base_url = config.base_url.as_deref().unwrap_or("");

    let combined = format!("{library_id}|{path_pattern}|{base_url}").to_lowercase();
    if combined.contains("latest") || combined.contains("cloud") {
        return Some(DocVersion::Latest);
    }

    for source in [base_url, path_pattern, library_id] {
        if let Some(caps) = DECIMAL_VERSION.captures(source) {
            return Some(DocVersion::Release(caps[1].to_string()));
        }
    }

    for source in [library_id, path_pattern, base_url] {
        if let Some(caps) = COMPACT_VERSION.captures(source) {
            let digits = &caps[1];
            return Some(DocVersion::Release(format!(
                "{}.{}",
                &digits[..1],
                &digits[1..]
            )));
        }
    }

    None
}
