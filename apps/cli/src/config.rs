//! Runtime configuration read from the environment.

use std::path::PathBuf;

use thiserror::Error;

pub const INPUT_PATH_VAR: &str = "DA_INPUT_PATH";
pub const OUTPUT_FORMAT_VAR: &str = "DA_OUTPUT_FORMAT";
pub const LOG_FORMAT_VAR: &str = "DA_LOG_FORMAT";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Invalid value '{value}' for {key}, expected 'text' or 'json'")]
    InvalidFormat { key: &'static str, value: String },
}

/// How the allocation result is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One `portfolio: amount` line per portfolio
    #[default]
    Text,
    /// Pretty-printed JSON of the full allocation breakdown
    Json,
}

/// Log line format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Config {
    /// JSON document with plans and deposits. The built-in sample is used when unset.
    pub input_path: Option<PathBuf>,
    pub output_format: OutputFormat,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup, so tests need not touch the
    /// process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let input_path = lookup(INPUT_PATH_VAR)
            .map(|path| path.trim().to_string())
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        let output_format = if parse_is_json(OUTPUT_FORMAT_VAR, lookup(OUTPUT_FORMAT_VAR))? {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        let log_format = if parse_is_json(LOG_FORMAT_VAR, lookup(LOG_FORMAT_VAR))? {
            LogFormat::Json
        } else {
            LogFormat::Text
        };

        Ok(Config {
            input_path,
            output_format,
            log_format,
        })
    }
}

/// Unset means text.
fn parse_is_json(key: &'static str, value: Option<String>) -> Result<bool, ConfigError> {
    let Some(value) = value else {
        return Ok(false);
    };
    if value.eq_ignore_ascii_case("json") {
        Ok(true)
    } else if value.eq_ignore_ascii_case("text") {
        Ok(false)
    } else {
        Err(ConfigError::InvalidFormat { key, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(config_from(&[]).unwrap(), Config::default());
    }

    #[test]
    fn test_reads_all_values() {
        let config = config_from(&[
            (INPUT_PATH_VAR, "/tmp/input.json"),
            (OUTPUT_FORMAT_VAR, "JSON"),
            (LOG_FORMAT_VAR, "json"),
        ])
        .unwrap();

        assert_eq!(config.input_path, Some(PathBuf::from("/tmp/input.json")));
        assert_eq!(config.output_format, OutputFormat::Json);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_blank_input_path_is_ignored() {
        let config = config_from(&[(INPUT_PATH_VAR, "   ")]).unwrap();
        assert_eq!(config.input_path, None);
    }

    #[test]
    fn test_rejects_unknown_output_format() {
        assert_eq!(
            config_from(&[(OUTPUT_FORMAT_VAR, "yaml")]),
            Err(ConfigError::InvalidFormat {
                key: OUTPUT_FORMAT_VAR,
                value: "yaml".to_string(),
            })
        );
    }
}
