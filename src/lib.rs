pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod logging;
pub mod runtime;
pub mod state;
pub mod submit;
pub mod terminal;
pub mod ui;
pub mod validation;
pub mod widgets;

pub use core::Field;
pub use core::value::FormValues;
pub use state::form::{FormProps, FormState, SubmitAttempt};
pub use submit::{SubmitError, SubmitHandler};
pub use ui::view::{FormView, render_form};
pub use validation::{FieldError, FieldErrorSet, validate};
