//! The presentation component.
//!
//! [`render_form`] turns a [`FormSnapshot`] and the display message into a
//! declarative [`FormView`]. It holds no state: the same snapshot always
//! yields the same view. Widgets draw the view; the `--dump-view` mode
//! prints it as JSON.

use crate::core::Field;
use crate::state::snapshot::FormSnapshot;
use serde::Serialize;

pub const SUBMIT_LABEL: &str = "Submit";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InputKind {
    Email,
    Password,
}

impl InputKind {
    fn for_field(field: Field) -> Self {
        match field {
            Field::Email => Self::Email,
            Field::Password => Self::Password,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputView {
    pub field: Field,
    pub kind: InputKind,
    pub value: String,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubmitView {
    pub label: String,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub heading: String,
    pub inputs: Vec<InputView>,
    pub submit: SubmitView,
}

impl FormView {
    pub fn input(&self, field: Field) -> Option<&InputView> {
        self.inputs.iter().find(|input| input.field == field)
    }

    pub fn error_for(&self, id: &str) -> Option<&str> {
        Field::from_name(id)
            .and_then(|field| self.input(field))
            .and_then(|input| input.error.as_deref())
    }
}

pub fn render_form(snapshot: &FormSnapshot, message: &str) -> FormView {
    let inputs = Field::ALL
        .into_iter()
        .map(|field| InputView {
            field,
            kind: InputKind::for_field(field),
            value: snapshot.values.get(field).to_string(),
            error: snapshot.visible_error(field).map(str::to_string),
        })
        .collect();

    FormView {
        heading: message.to_string(),
        inputs,
        submit: SubmitView {
            label: SUBMIT_LABEL.to_string(),
            disabled: snapshot.is_submitting,
        },
    }
}
