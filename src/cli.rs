//! Command-line flags. Flags override values from the configuration file.

use crate::config::{AppConfig, ConfigError, LogLevel};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "signup",
    version,
    about = "Email/password sign-up form in the terminal"
)]
pub struct Cli {
    /// YAML configuration file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Heading shown above the form.
    #[arg(long)]
    pub message: Option<String>,

    /// Pre-fill the email field.
    #[arg(long = "initial-email", value_name = "EMAIL")]
    pub initial_email: Option<String>,

    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevel>,

    /// Write logs to a file. Without it nothing is logged.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the initial form view as JSON and exit.
    #[arg(long = "dump-view")]
    pub dump_view: bool,
}

impl Cli {
    pub fn resolve_config(&self) -> Result<AppConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };
        if let Some(message) = &self.message {
            config.form.message.clone_from(message);
        }
        if let Some(email) = &self.initial_email {
            config.form.initial_email = Some(email.clone());
        }
        if let Some(level) = self.log_level {
            config.log.level = level;
        }
        if let Some(file) = &self.log_file {
            config.log.file = Some(file.clone());
        }
        Ok(config)
    }
}
