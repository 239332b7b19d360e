use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Per-library URL hints.
///
/// Both fields are read only for version sniffing; neither is used as a
/// literal component of the generated URL.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocUrlConfig {
    /// Path filter the indexer used for this library, e.g. "docs/7.58/md/**".
    /// May embed a version.
    #[serde(default)]
    pub path_pattern: Option<String>,
    /// Upstream source root the library was fetched from. May embed a
    /// version.
    #[serde(default)]
    pub base_url: Option<String>,
}

/// Registry of known libraries, loaded from
/// `~/.config/abaplink/libraries.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LibraryRegistry {
    /// Library id -> URL hints.
    #[serde(default)]
    pub libraries: BTreeMap<String, DocUrlConfig>,
}

impl LibraryRegistry {
    pub fn lookup(&self, library_id: &str) -> Option<&DocUrlConfig> {
        self.libraries.get(library_id)
    }

    /// Hints for a library, or empty hints when the id is unknown. An unknown
    /// id is not an error: the mapper degrades to the cloud base without
    /// hints.
    pub fn hints(&self, library_id: &str) -> DocUrlConfig {
        self.lookup(library_id).cloned().unwrap_or_default()
    }
}

/// Registry file errors, kept distinct from anyhow so callers can tell a
/// malformed file from an unreadable one.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read library registry at {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed library registry at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub fn registry_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("abaplink")?;
    Ok(xdg_dirs.place_config_file("libraries.toml")?)
}

/// Load the registry from disk, creating a default (empty) file if none
/// exists.
pub fn load_or_init() -> Result<LibraryRegistry> {
    let path = registry_path()?;
    if !path.exists() {
        let default_registry = LibraryRegistry::default();
        let toml = toml::to_string_pretty(&default_registry)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default library registry at {}", path.display());
        return Ok(default_registry);
    }

    Ok(load_from(&path)?)
}

/// Load and parse a registry file at an explicit path.
pub fn load_from(path: &Path) -> Result<LibraryRegistry, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    toml::from_str(&data).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_registry_is_empty() {
        let registry = LibraryRegistry::default();
        assert!(registry.libraries.is_empty());
        assert_eq!(registry.hints("unknown"), DocUrlConfig::default());
    }

    #[test]
    fn registry_toml_roundtrip() {
        let mut registry = LibraryRegistry::default();
        registry.libraries.insert(
            "sap-abap-docs".to_string(),
            DocUrlConfig {
                path_pattern: Some("docs/7.58/md/**".to_string()),
                base_url: None,
            },
        );
        let toml = toml::to_string_pretty(&registry).unwrap();
        let parsed: LibraryRegistry = toml::from_str(&toml).unwrap();
        assert_eq!(
            parsed.hints("sap-abap-docs").path_pattern.as_deref(),
            Some("docs/7.58/md/**")
        );
    }

    #[test]
    fn registry_toml_custom_values() {
        let toml = r#"
            [libraries."sap-abap-docs"]
            path_pattern = "docs/7.58/md/**"
            base_url = "https://example.com/abap-docs/7.58"

            [libraries."sap-abap-cloud"]
        "#;
        let registry: LibraryRegistry = toml::from_str(toml).unwrap();
        let hints = registry.hints("sap-abap-docs");
        assert_eq!(hints.path_pattern.as_deref(), Some("docs/7.58/md/**"));
        assert_eq!(
            hints.base_url.as_deref(),
            Some("https://example.com/abap-docs/7.58")
        );
        // Declared but without hints: present, all fields empty.
        assert!(registry.lookup("sap-abap-cloud").is_some());
        assert_eq!(registry.hints("sap-abap-cloud"), DocUrlConfig::default());
    }

    #[test]
    fn load_from_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_from(&dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_from_malformed_file_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("libraries.toml");
        fs::write(&path, "libraries = \"not a table\"").unwrap();
        let err = load_from(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
