//! YAML configuration for the sign-up form binary.
//!
//! Every section is optional; missing keys fall back to their defaults so an
//! empty file is a valid configuration.

use crate::state::form::FormProps;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_MESSAGE: &str = "Sign up";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub form: FormConfig,
    pub submit: SubmitConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Heading shown above the inputs.
    pub message: String,
    pub initial_email: Option<String>,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            message: DEFAULT_MESSAGE.to_string(),
            initial_email: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitConfig {
    /// Artificial delay of the placeholder handler, in milliseconds.
    pub latency_ms: u64,
}

impl SubmitConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: LogLevel,
    /// Logs are only written when a file is set; the terminal belongs to the form.
    pub file: Option<PathBuf>,
}

impl AppConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&raw)
    }

    pub fn from_yaml_str(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(raw)?)
    }

    pub fn form_props(&self) -> FormProps {
        let props = FormProps::new(self.form.message.clone());
        match &self.form.initial_email {
            Some(email) => props.with_initial_email(email.clone()),
            None => props,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError, DEFAULT_MESSAGE, LogLevel};
    use std::path::{Path, PathBuf};
    use std::time::Duration;

    #[test]
    fn empty_document_is_default() {
        let config = AppConfig::from_yaml_str("").expect("empty config");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.form.message, DEFAULT_MESSAGE);
        assert_eq!(config.log.level, LogLevel::Info);
        assert!(config.log.file.is_none());
    }

    #[test]
    fn parses_all_sections() {
        let config = AppConfig::from_yaml_str(
            r#"
form:
  message: "Create account"
  initial_email: "a@b.com"
submit:
  latency_ms: 250
log:
  level: debug
  file: signup.log
"#,
        )
        .expect("valid config");

        assert_eq!(config.form.message, "Create account");
        assert_eq!(config.submit.latency(), Duration::from_millis(250));
        assert_eq!(config.log.level, LogLevel::Debug);
        assert_eq!(config.log.file, Some(PathBuf::from("signup.log")));

        let values = config.form_props().initial_values();
        assert_eq!(values.email, "a@b.com");
        assert_eq!(values.password, "");
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = AppConfig::from_yaml_str("form:\n  initial_email: x@y.io\n").expect("config");
        assert_eq!(config.form.message, DEFAULT_MESSAGE);
        assert_eq!(config.submit.latency_ms, 0);
    }

    #[test]
    fn unknown_level_is_a_parse_error() {
        let err = AppConfig::from_yaml_str("log:\n  level: loud\n").expect_err("bad level");
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = AppConfig::load(Path::new("/definitely/not/here.yaml")).expect_err("missing");
        assert!(err.to_string().contains("/definitely/not/here.yaml"));
    }
}
