use crate::core::Field;
use crate::logging::REDACTED_VALUE;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Current contents of the form fields.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormValues {
    pub email: String,
    pub password: String,
}

impl FormValues {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Email => self.email.as_str(),
            Field::Password => self.password.as_str(),
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
        };
        *slot = value.into();
    }
}

// Keeps passwords out of logs and panic messages.
impl fmt::Debug for FormValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormValues")
            .field("email", &self.email)
            .field("password", &REDACTED_VALUE)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::FormValues;
    use crate::core::Field;

    #[test]
    fn set_overwrites_only_the_named_field() {
        let mut values = FormValues::new("a@b.com", "");
        values.set(Field::Password, "hunter2");

        assert_eq!(values.get(Field::Email), "a@b.com");
        assert_eq!(values.get(Field::Password), "hunter2");
    }

    #[test]
    fn debug_output_redacts_password() {
        let values = FormValues::new("a@b.com", "hunter2");
        let rendered = format!("{values:?}");

        assert!(rendered.contains("a@b.com"));
        assert!(!rendered.contains("hunter2"));
    }
}
