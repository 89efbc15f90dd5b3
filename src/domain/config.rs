use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for a carpool session.
///
/// These settings only shape how fields are collected by a front-end. The
/// registry itself accepts any well-typed record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Versions", into = "Versions")]
pub struct Config {
    /// The largest seat count a driver may offer.
    max_seats: u32,

    /// A `chrono` format string that entered times must match.
    ///
    /// For example, `"%H:%M"`. When unset, times are free text.
    time_format: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_seats: default_max_seats(),
            time_format: None,
        }
    }
}

/// Errors that can occur when loading or saving a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file {path}")]
    Read {
        /// Path of the file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML, or does not match the config schema.
    #[error("failed to parse config file {path}")]
    Parse {
        /// Path of the file.
        path: PathBuf,
        /// Underlying TOML error.
        #[source]
        source: toml::de::Error,
    },
    /// The configuration could not be serialized.
    #[error("failed to serialize config")]
    Serialize(#[from] toml::ser::Error),
    /// The file could not be written.
    #[error("failed to write config file {path}")]
    Write {
        /// Path of the file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },
}

impl Config {
    /// Loads the configuration from a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or if the TOML content is
    /// invalid.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Saves the configuration to a TOML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be serialized to TOML or if
    /// the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Returns the largest seat count a driver may offer.
    #[must_use]
    pub const fn max_seats(&self) -> u32 {
        self.max_seats
    }

    /// Sets the largest seat count a driver may offer.
    pub const fn set_max_seats(&mut self, max_seats: u32) {
        self.max_seats = max_seats;
    }

    /// Returns the time format, if configured.
    #[must_use]
    pub fn time_format(&self) -> Option<&str> {
        self.time_format.as_deref()
    }

    /// Sets the time format.
    ///
    /// `None` accepts free-text times.
    pub fn set_time_format(&mut self, time_format: Option<String>) {
        self.time_format = time_format;
    }
}

const fn default_max_seats() -> u32 {
    8
}

/// The serialized versions of the configuration.
/// This allows for future changes to the configuration format and to the domain
/// type without breaking compatibility.
#[derive(Debug, Serialize, Deserialize)]
#[serde(tag = "_version")]
enum Versions {
    #[serde(rename = "1")]
    V1 {
        #[serde(default = "default_max_seats")]
        max_seats: u32,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        time_format: Option<String>,
    },
}

impl From<Versions> for Config {
    fn from(versions: Versions) -> Self {
        match versions {
            Versions::V1 {
                max_seats,
                time_format,
            } => Self {
                max_seats,
                time_format,
            },
        }
    }
}

impl From<Config> for Versions {
    fn from(config: Config) -> Self {
        Self::V1 {
            max_seats: config.max_seats,
            time_format: config.time_format,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn load_reads_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nmax_seats = 4\ntime_format = \"%H:%M\"\n")
            .unwrap();

        let config = Config::load(file.path()).unwrap();

        assert_eq!(config.max_seats(), 4);
        assert_eq!(config.time_format(), Some("%H:%M"));
    }

    #[test]
    fn load_missing_file_returns_error() {
        let tmp = tempfile::tempdir().unwrap();
        let missing = tmp.path().join("missing.toml");

        let error = Config::load(&missing).unwrap_err();
        assert!(matches!(error, ConfigError::Read { .. }));
    }

    #[test]
    fn load_invalid_toml_returns_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"_version = \"1\"\nmax_seats = \"eight\"\n")
            .unwrap();

        let error = Config::load(file.path()).unwrap_err();
        assert!(matches!(error, ConfigError::Parse { .. }));
    }

    #[test]
    fn negative_seat_limit_is_rejected() {
        assert!(toml::from_str::<Config>("_version = \"1\"\nmax_seats = -1\n").is_err());
    }

    #[test]
    fn empty_file_returns_default() {
        let expected = Config::default();
        let actual: Config = toml::from_str(r#"_version = "1""#).unwrap();
        assert_eq!(actual, expected);
    }

    #[test]
    fn saved_config_loads_back() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("carpool.toml");
        let mut config = Config::default();
        config.set_max_seats(5);
        config.set_time_format(Some("%H:%M".to_string()));

        config.save(&path).unwrap();

        assert_eq!(Config::load(&path).unwrap(), config);
    }
}
