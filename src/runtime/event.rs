use crate::core::Field;
use crate::submit::SubmitCompletion;
use crate::terminal::TerminalEvent;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueChange {
    pub field: Field,
    pub value: String,
}

impl ValueChange {
    pub fn new(field: Field, value: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
        }
    }
}

/// Actions emitted by widgets in `InteractionResult`.
/// These flow upward from widgets to the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetAction {
    ValueChanged { change: ValueChange },
    /// Widget signals it is done with its value.
    /// Navigation decides: focus the next input if one exists, else submit.
    InputDone,
    SubmitRequested,
}

/// Events produced outside the widget tree and handled by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemEvent {
    SubmitCompleted { completion: SubmitCompletion },
}

#[derive(Debug, Clone)]
pub enum AppEvent {
    Terminal(TerminalEvent),
    System(SystemEvent),
}
