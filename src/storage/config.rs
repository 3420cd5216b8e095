use super::Result;
use crate::error::{ConfigError, StorageError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => f.write_str("plain"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub default_format: OutputFormat,
    pub pretty_json: bool,
    pub verbose: u8,
}

impl Config {
    pub const KEYS: [&'static str; 3] = ["default_format", "pretty_json", "verbose"];

    pub fn load(path: Option<PathBuf>) -> Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if !config_path.exists() {
            log::debug!("No config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|e| StorageError::ConfigParseError {
                message: e.to_string(),
            })?;

        log::debug!("Loaded config from {}", config_path.display());
        Ok(config)
    }

    pub fn save(&self, path: Option<PathBuf>) -> Result<()> {
        let config_path = match path {
            Some(p) => p,
            None => Self::config_file_path()?,
        };

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::FileIo {
                path: parent.to_string_lossy().to_string(),
                source,
            })?;
        }

        let toml_content =
            toml::to_string(self).map_err(|e| StorageError::ConfigSerializeError {
                message: e.to_string(),
            })?;

        fs::write(&config_path, toml_content).map_err(|source| StorageError::FileIo {
            path: config_path.to_string_lossy().to_string(),
            source,
        })?;

        log::debug!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Default location: `<config dir>/lodash-compat/config.toml`.
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(StorageError::ConfigDirNotFound)?;
        Ok(config_dir.join("lodash-compat").join("config.toml"))
    }

    /// Update one key from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidValue {
            field: key.to_string(),
            value: value.to_string(),
            reason: reason.to_string(),
        };

        match key {
            "default_format" => {
                self.default_format = match value {
                    "plain" => OutputFormat::Plain,
                    "json" => OutputFormat::Json,
                    _ => return Err(invalid("expected plain or json")),
                };
            }
            "pretty_json" => {
                self.pretty_json = value.parse().map_err(|_| invalid("expected true or false"))?;
            }
            "verbose" => {
                self.verbose = value
                    .parse()
                    .map_err(|_| invalid("expected a number between 0 and 255"))?;
            }
            _ => {
                return Err(ConfigError::UnknownKey {
                    key: key.to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("default_format", self.default_format.to_string()),
            ("pretty_json", self.pretty_json.to_string()),
            ("verbose", self.verbose.to_string()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.default_format, OutputFormat::Plain);
        assert!(!config.pretty_json);
        assert_eq!(config.verbose, 0);
    }

    #[test]
    fn test_config_set() {
        let mut config = Config::default();
        config.set("default_format", "json").expect("valid format");
        config.set("pretty_json", "true").expect("valid bool");
        config.set("verbose", "2").expect("valid level");
        assert_eq!(config.default_format, OutputFormat::Json);
        assert!(config.pretty_json);
        assert_eq!(config.verbose, 2);

        assert!(matches!(
            config.set("default_format", "xml"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("pretty_json", "yes"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert!(matches!(
            config.set("colour", "red"),
            Err(ConfigError::UnknownKey { .. })
        ));
    }

    #[test]
    fn test_config_load_save() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            default_format: OutputFormat::Json,
            pretty_json: true,
            verbose: 1,
        };

        config
            .save(Some(config_path.clone()))
            .expect("Failed to save config");

        let loaded_config = Config::load(Some(config_path)).expect("Failed to load config");
        assert_eq!(loaded_config, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "default_format = \"json\"\n").expect("write config");

        let config = Config::load(Some(config_path)).expect("Failed to load config");
        assert_eq!(config.default_format, OutputFormat::Json);
        assert!(!config.pretty_json);
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config_path = temp_dir.path().join("config.toml");
        fs::write(&config_path, "default_format = [").expect("write config");

        let result = Config::load(Some(config_path));
        assert!(matches!(
            result,
            Err(StorageError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = tempdir().expect("Failed to create temp dir");
        let config = Config::load(Some(temp_dir.path().join("missing.toml")))
            .expect("Failed to load default config");
        assert_eq!(config, Config::default());
    }
}
