//! Configuration file for the converter
//!
//! TOML with two optional sections:
//! - [container] - Name/public ID stamped on the converted container, output filename
//! - [tables] - Overrides for the enum translation tables, see [crate::tables]
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::{error::ConfigError, tables::MappingTables};

/// Location of the per-user config file, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("piwik_gtm").join("config.toml"))
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub container: ContainerSettings,
    pub tables: MappingTables,
}

/// Fixed values placed in the destination envelope
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ContainerSettings {
    pub name: String,
    pub public_id: String,
    pub usage_context: Vec<String>,
    /// Suggested filename for the converted export
    pub export_filename: String,
}

impl Default for ContainerSettings {
    fn default() -> Self {
        Self {
            name: "Converted Container".to_string(),
            public_id: "GTM-XXXX".to_string(),
            usage_context: vec!["WEB".to_string()],
            export_filename: "converted_gtm.json".to_string(),
        }
    }
}

impl Config {
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// An explicitly given file must load. Otherwise the per-user file is used
    /// when present, and the built-in defaults when not.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            debug!("Loading config from {}", path.display());
            return Self::from_toml_file(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => {
                debug!("Loading config from {}", path.display());
                Self::from_toml_file(&path)
            }
            _ => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_file_is_defaults() {
        let config: Config = toml::from_str("").unwrap();

        assert_eq!(config.container, ContainerSettings::default());
        assert_eq!(config.tables, MappingTables::default());
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config: Config = toml::from_str(
            r#"
            [container]
            name = "Shop"

            [tables.firing_options]
            fallback = "unlimited"
            "#,
        )
        .unwrap();

        assert_eq!(config.container.name, "Shop");
        assert_eq!(config.container.public_id, "GTM-XXXX");
        assert_eq!(config.container.export_filename, "converted_gtm.json");
        assert_eq!(config.tables.firing_options.translate(None), "unlimited");
        assert_eq!(config.tables.event_types, MappingTables::default().event_types);
    }

    #[test]
    fn explicit_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[container]\npublic_id = \"GTM-ABC123\"").unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.container.public_id, "GTM-ABC123");
    }

    #[test]
    fn explicit_file_errors_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(matches!(
            Config::load(Some(&missing)),
            Err(ConfigError::Read { .. })
        ));

        let broken = dir.path().join("broken.toml");
        std::fs::write(&broken, "[container\nname = 1").unwrap();
        assert!(matches!(
            Config::load(Some(&broken)),
            Err(ConfigError::Parse { .. })
        ));
    }
}
