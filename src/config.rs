use crate::geometry::{Geometry, BOND_LENGTH, WIDTH_TO_LENGTH};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default location of the configuration file, if the user has a config directory.
pub fn path() -> Option<PathBuf> {
    Some(dirs::config_dir()?.join("bondcompass").join("config.toml"))
}

/// Drawing dimensions which may be overridden by the user.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Length of a bond, in diagram units.
    pub bond_length: f64,

    /// Stroke width of a bond as a proportion of its length.
    pub width_to_length: f64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bond_length: BOND_LENGTH,
            width_to_length: WIDTH_TO_LENGTH,
        }
    }
}

impl Config {
    pub fn save(&self) -> Result<(), Error> {
        self.save_to(path().ok_or(Error::NoConfigDir)?)
    }

    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let serialized = toml::to_string_pretty(self)?;
        std::fs::write(path, serialized.as_bytes())?;
        log::info!("saved configuration to {}", path.display());
        Ok(())
    }

    pub fn load() -> Result<Self, Error> {
        Self::load_from(path().ok_or(Error::NoConfigDir)?)
    }

    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&data)?;
        log::info!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse and validate a configuration.
    ///
    /// Missing keys take their default values.
    pub fn from_toml_str(data: &str) -> Result<Self, Error> {
        let config: Config = toml::from_str(data)?;
        config.geometry()?;
        Ok(config)
    }

    /// The bond geometry described by this configuration.
    pub fn geometry(&self) -> Result<Geometry, Error> {
        Geometry::new(self.bond_length, self.width_to_length).map_err(Into::into)
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("configuration could not be loaded")]
    CouldNotLoad(#[from] std::io::Error),
    #[error("malformed configuration")]
    Malformed(#[from] toml::de::Error),
    #[error("failed to serialize")]
    CouldNotSerialize(#[from] toml::ser::Error),
    #[error(transparent)]
    Invalid(#[from] crate::Error),
    #[error("no configuration directory is available for this user")]
    NoConfigDir,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_keys_missing() {
        let config = Config::from_toml_str("").unwrap();
        assert_eq!(config, Config::default());

        let config = Config::from_toml_str("bond_length = 30.0").unwrap();
        assert_eq!(config.bond_length, 30.0);
        assert_eq!(config.width_to_length, 0.04);
        assert_eq!(config.geometry().unwrap().bond_width(), 1.2);
    }

    #[test]
    fn test_rejects_negative_length() {
        assert!(matches!(
            Config::from_toml_str("bond_length = -5.0"),
            Err(Error::Invalid(crate::Error::InvalidConfiguration(_)))
        ));
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(matches!(
            Config::from_toml_str("bond_length = \"long\""),
            Err(Error::Malformed(_))
        ));
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            bond_length: 25.0,
            width_to_length: 0.05,
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            Config::load_from(dir.path().join("absent.toml")),
            Err(Error::CouldNotLoad(_))
        ));
    }
}
