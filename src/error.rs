use crate::storage::config::Config;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("CliError: {0}")]
    Cli(#[from] CliError),
    #[error("ConfigError: {0}")]
    Config(#[from] ConfigError),
    #[error("StorageError: {0}")]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),
    #[error("Invalid JSON for --{argument}: {message}")]
    InvalidJson { argument: String, message: String },
    #[error("Output error: {0}")]
    Output(String),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Unknown configuration key '{key}'")]
    UnknownKey { key: String },
    #[error("Invalid configuration value for '{field}': {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("File I/O error at {path}: {source}")]
    FileIo {
        path: String,
        source: std::io::Error,
    },
    #[error("Configuration parse error: {message}")]
    ConfigParseError { message: String },
    #[error("Configuration serialize error: {message}")]
    ConfigSerializeError { message: String },
    #[error("Configuration directory not found")]
    ConfigDirNotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ErrorSeverity {
    High,
    Medium,
    Low,
}

impl AppError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            AppError::Cli(CliError::Output(_)) => ErrorSeverity::Low,
            AppError::Cli(_) => ErrorSeverity::Medium,
            AppError::Config(_) => ErrorSeverity::Medium,
            AppError::Storage(StorageError::ConfigParseError { .. }) => ErrorSeverity::High,
            AppError::Storage(_) => ErrorSeverity::Medium,
        }
    }

    pub fn troubleshooting_hint(&self) -> Option<String> {
        match self {
            AppError::Cli(CliError::InvalidJson { argument, .. }) => Some(format!(
                "quote --{} as a JSON literal, e.g. '[1, 2, 3]' or '\"name\"'",
                argument
            )),
            AppError::Config(ConfigError::UnknownKey { .. }) => Some(format!(
                "supported keys: {}",
                Config::KEYS.join(", ")
            )),
            AppError::Storage(StorageError::ConfigParseError { .. }) => {
                Some("fix or delete config.toml to fall back to defaults".to_string())
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_error_display() {
        let cli_err = CliError::InvalidArguments("invalid arguments".to_string());
        assert_eq!(
            format!("{}", cli_err),
            "Invalid arguments: invalid arguments"
        );

        let cli_err = CliError::InvalidJson {
            argument: "array".to_string(),
            message: "expected value".to_string(),
        };
        assert_eq!(
            format!("{}", cli_err),
            "Invalid JSON for --array: expected value"
        );
    }

    #[test]
    fn test_config_error_display() {
        let config_err = ConfigError::InvalidValue {
            field: "default_format".to_string(),
            value: "xml".to_string(),
            reason: "expected plain or json".to_string(),
        };
        assert_eq!(
            format!("{}", config_err),
            "Invalid configuration value for 'default_format': xml (expected plain or json)"
        );
        if let ConfigError::InvalidValue {
            field,
            value,
            reason,
        } = config_err
        {
            assert_eq!(field, "default_format");
            assert_eq!(value, "xml");
            assert_eq!(reason, "expected plain or json");
        }
    }

    #[test]
    fn test_app_error_display_wraps_inner() {
        let app_err = AppError::Config(ConfigError::UnknownKey {
            key: "colour".to_string(),
        });
        assert_eq!(
            format!("{}", app_err),
            "ConfigError: Unknown configuration key 'colour'"
        );
        assert_eq!(app_err.severity(), ErrorSeverity::Medium);
        assert_eq!(
            app_err.troubleshooting_hint().as_deref(),
            Some("supported keys: default_format, pretty_json, verbose")
        );
    }

    #[test]
    fn test_severity_levels() {
        let parse = AppError::Storage(StorageError::ConfigParseError {
            message: "bad toml".to_string(),
        });
        assert_eq!(parse.severity(), ErrorSeverity::High);

        let output = AppError::Cli(CliError::Output("broken pipe".to_string()));
        assert_eq!(output.severity(), ErrorSeverity::Low);
        assert!(output.troubleshooting_hint().is_none());
    }
}
