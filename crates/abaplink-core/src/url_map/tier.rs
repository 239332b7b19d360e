//! Version-tier selection and base URL templates.

use super::version::DocVersion;

/// Documentation root shared by ABAP Cloud / SAP BTP releases.
const CLOUD_BASE: &str = "https://help.sap.com/doc/abapdocu_cp_index_htm/CLOUD/en-US";

/// Product tier a release belongs to.
///
/// `Cloud` and `S4Hana2025` currently publish under the same documentation
/// root but are distinct product lines; they stay separate variants so the
/// mapping can diverge without reworking callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocTier {
    /// ABAP Cloud / SAP BTP: releases >= 9.1, the "latest" sentinel, and
    /// anything undetermined or unparsable.
    Cloud,
    /// S/4HANA 2025 line: 8.1 inclusive up to 9.1 exclusive.
    S4Hana2025,
    /// Pre-8.1 on-premise releases with per-version documentation roots.
    Legacy,
}

impl DocTier {
    /// Classifies a `<major>.<minor>` release tag. Tags that do not parse as
    /// a number fall back to `Cloud`.
    pub fn for_release(release: &str) -> DocTier {
        let Ok(version) = release.parse::<f64>() else {
            return DocTier::Cloud;
        };
        if version >= 9.1 {
            DocTier::Cloud
        } else if version >= 8.1 {
            DocTier::S4Hana2025
        } else {
            DocTier::Legacy
        }
    }
}

/// Picks the documentation base URL for an extracted version.
///
/// Undetermined versions default to the cloud base rather than failing; an
/// incorrect but well-formed URL is the accepted failure mode when the
/// sniffing heuristics misfire.
pub fn base_url_for(version: Option<&DocVersion>) -> String {
    let release = match version {
        Some(DocVersion::Release(release)) => release,
        Some(DocVersion::Latest) | None => return CLOUD_BASE.to_string(),
    };
    match DocTier::for_release(release) {
        DocTier::Cloud | DocTier::S4Hana2025 => CLOUD_BASE.to_string(),
        DocTier::Legacy => {
            let digits = release.replace('.', "");
            format!("https://help.sap.com/doc/abapdocu_{digits}_index_htm/{release}/en-US")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_boundaries_inclusive_at_lower_bound() {
        assert_eq!(DocTier::for_release("9.1"), DocTier::Cloud);
        assert_eq!(DocTier::for_release("9.10"), DocTier::Cloud);
        assert_eq!(DocTier::for_release("8.1"), DocTier::S4Hana2025);
        assert_eq!(DocTier::for_release("8.50"), DocTier::S4Hana2025);
        assert_eq!(DocTier::for_release("7.58"), DocTier::Legacy);
        assert_eq!(DocTier::for_release("7.40"), DocTier::Legacy);
    }

    #[test]
    fn unparsable_release_falls_back_to_cloud() {
        assert_eq!(DocTier::for_release("n/a"), DocTier::Cloud);
        assert_eq!(DocTier::for_release(""), DocTier::Cloud);
    }

    #[test]
    fn cloud_and_s4hana_share_base_today() {
        let cloud = base_url_for(Some(&DocVersion::Release("9.10".to_string())));
        let s4 = base_url_for(Some(&DocVersion::Release("8.50".to_string())));
        assert_eq!(cloud, CLOUD_BASE);
        assert_eq!(s4, CLOUD_BASE);
    }

    #[test]
    fn latest_and_undetermined_use_cloud_base() {
        assert_eq!(base_url_for(Some(&DocVersion::Latest)), CLOUD_BASE);
        assert_eq!(base_url_for(None), CLOUD_BASE);
    }

    #[test]
    fn legacy_base_embeds_version_twice() {
        assert_eq!(
            base_url_for(Some(&DocVersion::Release("7.58".to_string()))),
            "https://help.sap.com/doc/abapdocu_758_index_htm/7.58/en-US"
        );
        assert_eq!(
            base_url_for(Some(&DocVersion::Release("7.40".to_string()))),
            "https://help.sap.com/doc/abapdocu_740_index_htm/7.40/en-US"
        );
    }
}
