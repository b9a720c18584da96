use crate::state::form::SubmitTicket;
use crate::submit::{SubmitError, SubmitHandler};
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread;

/// Name of the threads that run submit handlers.
pub const SUBMIT_WORKER_THREAD: &str = "submit-worker";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitCompletion {
    pub run_id: u64,
    pub outcome: Result<(), SubmitError>,
}

/// Runs the submit handler on a worker thread and hands completions back to
/// the event loop through a channel.
pub struct SubmitExecutor {
    handler: Arc<dyn SubmitHandler>,
    completion_tx: Sender<SubmitCompletion>,
    completion_rx: Receiver<SubmitCompletion>,
}

impl SubmitExecutor {
    pub fn new(handler: Arc<dyn SubmitHandler>) -> Self {
        let (completion_tx, completion_rx) = mpsc::channel::<SubmitCompletion>();
        Self {
            handler,
            completion_tx,
            completion_rx,
        }
    }

    pub fn spawn(&self, ticket: SubmitTicket) {
        let handler = Arc::clone(&self.handler);
        let completion_tx = self.completion_tx.clone();
        let run_id = ticket.run_id;
        let spawned = thread::Builder::new()
            .name(SUBMIT_WORKER_THREAD.to_string())
            .spawn(move || {
                // A panicking handler must still produce a completion, otherwise
                // the form would stay in the submitting state forever.
                let outcome =
                    panic::catch_unwind(AssertUnwindSafe(|| handler.submit(&ticket.values)))
                        .unwrap_or(Err(SubmitError::Panicked));
                let _ = completion_tx.send(SubmitCompletion {
                    run_id: ticket.run_id,
                    outcome,
                });
            });
        if let Err(err) = spawned {
            tracing::error!(run_id, error = %err, "failed to start submit worker");
            let _ = self.completion_tx.send(SubmitCompletion {
                run_id,
                outcome: Err(SubmitError::WorkerUnavailable(err.to_string())),
            });
        }
    }

    pub fn drain_ready(&self) -> Vec<SubmitCompletion> {
        let mut out = Vec::<SubmitCompletion>::new();
        loop {
            match self.completion_rx.try_recv() {
                Ok(completion) => out.push(completion),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        out
    }
}
