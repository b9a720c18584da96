use super::FieldError;
use regex::Regex;
use std::sync::LazyLock;

pub type Validator = Box<dyn Fn(&str) -> Result<(), FieldError> + Send + Sync>;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$")
        .expect("email pattern is a valid regex")
});

/// Run a list of validators against `value`, returning the first error.
pub fn run_validators(validators: &[Validator], value: &str) -> Result<(), FieldError> {
    for validator in validators {
        validator(value)?;
    }
    Ok(())
}

/// Rejects the empty string. Whitespace counts as content and is left to
/// later validators.
pub fn required() -> Validator {
    Box::new(|value: &str| {
        if value.is_empty() {
            Err(FieldError::MissingRequiredField)
        } else {
            Ok(())
        }
    })
}

pub fn pattern(re: &'static Regex) -> Validator {
    Box::new(move |value: &str| {
        if re.is_match(value) {
            Ok(())
        } else {
            Err(FieldError::InvalidFormat)
        }
    })
}

/// `local@domain.tld`: local part of letters, digits and `._%+-`, domain of
/// letters, digits and `.-`, final label of two or more letters.
pub fn email() -> Validator {
    pattern(&EMAIL_PATTERN)
}

pub fn is_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}
