//! Field-level validation for the sign-up form.
//!
//! [`validate`] is a pure function of the current [`FormValues`]: it never
//! panics, never touches any other state, and reports a field as valid by
//! leaving it out of the returned [`FieldErrorSet`].

pub mod validators;

use crate::core::Field;
use crate::core::value::FormValues;
use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;
use validators::{Validator, run_validators};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldError {
    MissingRequiredField,
    InvalidFormat,
}

impl FieldError {
    pub fn message(self) -> &'static str {
        match self {
            Self::MissingRequiredField => "Required",
            Self::InvalidFormat => "Invalid email address",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl Serialize for FieldError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.message())
    }
}

/// Errors keyed by field, in field order. Absent fields are valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrorSet {
    entries: IndexMap<Field, FieldError>,
}

impl FieldErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: Field) -> Option<FieldError> {
        self.entries.get(&field).copied()
    }

    pub fn message(&self, field: Field) -> Option<&'static str> {
        self.get(field).map(FieldError::message)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, FieldError)> + '_ {
        self.entries.iter().map(|(field, error)| (*field, *error))
    }

    fn insert(&mut self, field: Field, error: FieldError) {
        self.entries.insert(field, error);
    }
}

impl FromIterator<(Field, FieldError)> for FieldErrorSet {
    fn from_iter<I: IntoIterator<Item = (Field, FieldError)>>(iter: I) -> Self {
        let mut set = Self::new();
        for (field, error) in iter {
            set.insert(field, error);
        }
        set
    }
}

static RULES: LazyLock<Vec<(Field, Vec<Validator>)>> = LazyLock::new(|| {
    vec![
        (
            Field::Email,
            vec![validators::required(), validators::email()],
        ),
        (Field::Password, Vec::new()),
    ]
});

pub fn validate(values: &FormValues) -> FieldErrorSet {
    RULES
        .iter()
        .filter_map(|(field, rules)| {
            run_validators(rules, values.get(*field))
                .err()
                .map(|error| (*field, error))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{FieldError, FieldErrorSet, validate};
    use crate::core::Field;
    use crate::core::value::FormValues;
    use proptest::prelude::*;
    use regex::{Regex, RegexBuilder};

    /// The address rule as written, matched case-insensitively on ASCII only.
    fn reference_pattern() -> Regex {
        RegexBuilder::new(r"^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$")
            .case_insensitive(true)
            .unicode(false)
            .build()
            .expect("reference pattern compiles")
    }

    fn expected_error(email: &str, pattern: &Regex) -> Option<FieldError> {
        if email.is_empty() {
            Some(FieldError::MissingRequiredField)
        } else if pattern.is_match(email) {
            None
        } else {
            Some(FieldError::InvalidFormat)
        }
    }

    #[test]
    fn empty_email_is_required() {
        let errors = validate(&FormValues::new("", ""));
        assert_eq!(errors.message(Field::Email), Some("Required"));
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn malformed_email_is_invalid() {
        let errors = validate(&FormValues::new("bob@@example", "x"));
        assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidFormat));
        assert_eq!(errors.message(Field::Email), Some("Invalid email address"));
    }

    #[test]
    fn well_formed_email_has_no_error() {
        let errors = validate(&FormValues::new("bob@example.com", "secret"));
        assert!(errors.is_empty());
    }

    #[test]
    fn password_is_never_validated() {
        let errors = validate(&FormValues::new("bob@example.com", ""));
        assert_eq!(errors.get(Field::Password), None);
    }

    #[test]
    fn errors_serialize_as_message_map() {
        let errors = validate(&FormValues::default());
        let json = serde_json::to_value(&errors).expect("serialize errors");
        assert_eq!(json, serde_json::json!({ "email": "Required" }));
        assert_eq!(
            serde_json::to_value(FieldErrorSet::new()).expect("serialize empty"),
            serde_json::json!({})
        );
    }

    proptest! {
        #[test]
        fn validation_is_idempotent(email in ".{0,40}", password in ".{0,20}") {
            let values = FormValues::new(email, password);
            prop_assert_eq!(validate(&values), validate(&values));
        }

        #[test]
        fn generated_addresses_are_accepted(
            address in "[A-Za-z0-9._%+-]{1,12}@[A-Za-z0-9-]{1,12}\\.[A-Za-z]{2,6}"
        ) {
            let errors = validate(&FormValues::new(address, ""));
            prop_assert!(errors.is_empty());
        }

        #[test]
        fn email_errors_follow_the_address_rule(
            email in prop_oneof![
                ".{0,30}",
                "[A-Za-z0-9._%+@ -]{0,24}",
                "[A-Za-z0-9.]{1,8}@[A-Za-z0-9.-]{1,8}\\.[A-Za-z0-9]{1,4}",
            ],
            password in ".{0,12}",
        ) {
            let pattern = reference_pattern();
            let errors = validate(&FormValues::new(email.clone(), password));
            prop_assert_eq!(errors.get(Field::Email), expected_error(&email, &pattern));
            prop_assert_eq!(errors.get(Field::Password), None);
        }

        #[test]
        fn addresses_without_at_sign_are_invalid(local in "[A-Za-z0-9._-]{1,20}") {
            let errors = validate(&FormValues::new(local, ""));
            prop_assert_eq!(errors.get(Field::Email), Some(FieldError::InvalidFormat));
        }
    }
}
