pub mod executor;

use crate::core::value::FormValues;
use crate::logging::REDACTED_VALUE;
use std::thread;
use std::time::Duration;
use thiserror::Error;

pub use executor::{SUBMIT_WORKER_THREAD, SubmitCompletion, SubmitExecutor};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error("submit handler panicked")]
    Panicked,
    #[error("submit worker could not be started: {0}")]
    WorkerUnavailable(String),
}

/// Whatever the application does with the credentials once the form
/// validates. Runs off the event loop thread and may block. A panic is
/// reported as [`SubmitError::Panicked`]; with
/// [`crate::logging::install_panic_hook`] in place its message goes to the
/// log instead of the terminal.
pub trait SubmitHandler: Send + Sync {
    fn submit(&self, values: &FormValues) -> Result<(), SubmitError>;
}

impl<F> SubmitHandler for F
where
    F: Fn(&FormValues) -> Result<(), SubmitError> + Send + Sync,
{
    fn submit(&self, values: &FormValues) -> Result<(), SubmitError> {
        self(values)
    }
}

/// Stand-in handler: waits `latency`, logs the submission, succeeds.
#[derive(Debug, Clone, Default)]
pub struct PlaceholderSubmit {
    latency: Duration,
}

impl PlaceholderSubmit {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

impl SubmitHandler for PlaceholderSubmit {
    fn submit(&self, values: &FormValues) -> Result<(), SubmitError> {
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }
        tracing::info!(email = %values.email, password = REDACTED_VALUE, "credentials submitted");
        Ok(())
    }
}
