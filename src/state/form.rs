//! The form container: single owner of values, touched flags, errors and
//! submission state.
//!
//! Every mutation goes through a method here, re-runs validation where values
//! change, and publishes a fresh [`FormSnapshot`] to subscribers. Rendering
//! is never done from inside the container; callers subscribe or pull
//! [`FormState::snapshot`] and re-render from that.

use crate::core::Field;
use crate::core::value::FormValues;
use crate::state::snapshot::{FormPhase, FormSnapshot, TouchedSet};
use crate::submit::SubmitError;
use crate::validation::{FieldErrorSet, validate};

/// Construction-time configuration of the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormProps {
    pub initial_email: Option<String>,
    pub message: String,
}

impl FormProps {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            initial_email: None,
            message: message.into(),
        }
    }

    pub fn with_initial_email(mut self, email: impl Into<String>) -> Self {
        self.initial_email = Some(email.into());
        self
    }

    pub fn initial_values(&self) -> FormValues {
        FormValues::new(self.initial_email.clone().unwrap_or_default(), "")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

pub type Listener = Box<dyn FnMut(&FormSnapshot) + Send>;

/// A submission that passed validation. The holder is responsible for
/// invoking the handler with `values` and reporting back through
/// [`FormState::finish_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitTicket {
    pub run_id: u64,
    pub values: FormValues,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    Started(SubmitTicket),
    Invalid(FieldErrorSet),
    AlreadySubmitting,
}

impl SubmitAttempt {
    pub fn is_started(&self) -> bool {
        matches!(self, Self::Started(_))
    }
}

pub struct FormState {
    initial: FormValues,
    values: FormValues,
    touched: TouchedSet,
    errors: FieldErrorSet,
    phase: FormPhase,
    in_flight: Option<u64>,
    run_sequence: u64,
    submit_count: u64,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_subscription: u64,
}

impl FormState {
    pub fn initialize(props: &FormProps) -> Self {
        let values = props.initial_values();
        let errors = validate(&values);
        Self {
            initial: values.clone(),
            values,
            touched: TouchedSet::new(),
            errors,
            phase: FormPhase::Idle,
            in_flight: None,
            run_sequence: 0,
            submit_count: 0,
            listeners: Vec::new(),
            next_subscription: 0,
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &FieldErrorSet {
        &self.errors
    }

    pub fn touched(&self) -> &TouchedSet {
        &self.touched
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn submit_count(&self) -> u64 {
        self.submit_count
    }

    pub fn snapshot(&self) -> FormSnapshot {
        FormSnapshot {
            values: self.values.clone(),
            touched: self.touched.clone(),
            errors: self.errors.clone(),
            is_submitting: self.is_submitting(),
            phase: self.phase,
            submit_count: self.submit_count,
        }
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&FormSnapshot) + Send + 'static) -> SubscriptionId {
        self.next_subscription = self.next_subscription.saturating_add(1);
        let id = SubscriptionId(self.next_subscription);
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    pub fn set_field_value(&mut self, field: Field, value: impl Into<String>) {
        self.values.set(field, value);
        self.errors = validate(&self.values);
        if self.phase != FormPhase::Submitting {
            self.phase = FormPhase::Editing;
        }
        tracing::trace!(field = field.as_str(), valid = self.errors.get(field).is_none(), "field value changed");
        self.notify();
    }

    pub fn set_field_touched(&mut self, field: Field) {
        if self.touched.touch(field) {
            tracing::trace!(field = field.as_str(), "field touched");
        }
        self.notify();
    }

    /// Starts a submission if none is in flight and the values validate.
    ///
    /// Every field is marked touched first so that errors refusing the
    /// submission become visible.
    pub fn submit(&mut self) -> SubmitAttempt {
        if let Some(run_id) = self.in_flight {
            tracing::debug!(run_id, "submit ignored: a submission is already in flight");
            return SubmitAttempt::AlreadySubmitting;
        }

        self.errors = validate(&self.values);
        self.touched.touch_all();

        if !self.errors.is_empty() {
            tracing::debug!(errors = self.errors.len(), "submit refused: form has errors");
            self.notify();
            return SubmitAttempt::Invalid(self.errors.clone());
        }

        self.run_sequence = self.run_sequence.saturating_add(1);
        let run_id = self.run_sequence;
        self.in_flight = Some(run_id);
        self.submit_count = self.submit_count.saturating_add(1);
        self.phase = FormPhase::Submitting;
        tracing::info!(run_id, "submission started");
        self.notify();

        SubmitAttempt::Started(SubmitTicket {
            run_id,
            values: self.values.clone(),
        })
    }

    /// Settles the in-flight submission. Success and failure both clear the
    /// submitting flag; a `run_id` that is not in flight is ignored.
    pub fn finish_submit(&mut self, run_id: u64, outcome: &Result<(), SubmitError>) -> bool {
        if self.in_flight != Some(run_id) {
            tracing::debug!(run_id, "ignoring completion for a submission that is not in flight");
            return false;
        }

        self.in_flight = None;
        self.phase = FormPhase::Editing;
        match outcome {
            Ok(()) => tracing::info!(run_id, "submission completed"),
            Err(err) => tracing::warn!(run_id, error = %err, "submission failed"),
        }
        self.notify();
        true
    }

    /// Runs a whole submission synchronously with `handler`.
    pub fn submit_with<F>(&mut self, handler: F) -> SubmitAttempt
    where
        F: FnOnce(&FormValues) -> Result<(), SubmitError>,
    {
        let attempt = self.submit();
        if let SubmitAttempt::Started(ticket) = &attempt {
            let outcome = handler(&ticket.values);
            self.finish_submit(ticket.run_id, &outcome);
        }
        attempt
    }

    /// Restores the values the form was mounted with. Refused while a
    /// submission is in flight.
    pub fn reset(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        self.values = self.initial.clone();
        self.errors = validate(&self.values);
        self.touched = TouchedSet::new();
        self.phase = FormPhase::Idle;
        tracing::debug!("form reset");
        self.notify();
        true
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, listener) in self.listeners.iter_mut() {
            listener(&snapshot);
        }
    }
}
