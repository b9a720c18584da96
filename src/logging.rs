//! Log file setup.
//!
//! The form owns the terminal, so logs never go to stderr. Without a
//! configured file no subscriber is installed and `tracing` calls are no-ops.

use crate::config::{LogConfig, LogLevel};
use crate::error::AppError;
use crate::submit::SUBMIT_WORKER_THREAD;
use std::fs::{File, OpenOptions};
use std::panic;
use std::sync::Mutex;
use std::thread;
use tracing_subscriber::EnvFilter;

/// Placeholder written instead of secrets.
pub const REDACTED_VALUE: &str = "[REDACTED]";

pub fn init_logging(config: &LogConfig) -> Result<bool, AppError> {
    let Some(path) = &config.file else {
        return Ok(false);
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|err| AppError::Logging(format!("{}: {err}", path.display())))?;

    tracing_subscriber::fmt()
        .with_env_filter(build_env_filter(config.level))
        .with_writer(Mutex::<File>::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| AppError::Logging(err.to_string()))?;
    Ok(true)
}

/// Sends panics raised by submit handlers to the log. The default hook would
/// print them over the form while the terminal is in raw mode. Panics on any
/// other thread still go to the previous hook.
pub fn install_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        if thread::current().name() == Some(SUBMIT_WORKER_THREAD) {
            tracing::error!(panic = %info, "submit handler panicked");
        } else {
            previous(info);
        }
    }));
}

/// `RUST_LOG` wins over the configured level when set.
fn build_env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,signup_form={level},signup={level}",
            level = level.as_str()
        ))
    })
}
