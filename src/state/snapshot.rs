use crate::core::Field;
use crate::core::value::FormValues;
use crate::validation::FieldErrorSet;
use indexmap::IndexMap;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    #[default]
    Idle,
    Editing,
    Submitting,
}

/// Per-field touched flags. Every field starts untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TouchedSet {
    flags: IndexMap<Field, bool>,
}

impl TouchedSet {
    pub fn new() -> Self {
        Self {
            flags: Field::ALL.into_iter().map(|field| (field, false)).collect(),
        }
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.flags.get(&field).copied().unwrap_or(false)
    }

    /// Returns `true` when the flag flipped.
    pub fn touch(&mut self, field: Field) -> bool {
        let flag = self.flags.entry(field).or_insert(false);
        let changed = !*flag;
        *flag = true;
        changed
    }

    pub fn touch_all(&mut self) -> bool {
        let mut changed = false;
        for field in Field::ALL {
            changed |= self.touch(field);
        }
        changed
    }
}

impl Default for TouchedSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Immutable copy of the form container, handed to subscribers and to the
/// presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSnapshot {
    pub values: FormValues,
    pub touched: TouchedSet,
    pub errors: FieldErrorSet,
    pub is_submitting: bool,
    pub phase: FormPhase,
    pub submit_count: u64,
}

impl FormSnapshot {
    /// The error text a user should see for `field`: only once the field is
    /// touched and only if the field currently has an error.
    pub fn visible_error(&self, field: Field) -> Option<&'static str> {
        if !self.touched.is_touched(field) {
            return None;
        }
        self.errors.message(field)
    }
}

#[cfg(test)]
mod tests {
    use super::TouchedSet;
    use crate::core::Field;

    #[test]
    fn touch_reports_only_the_first_flip() {
        let mut touched = TouchedSet::new();
        assert!(!touched.is_touched(Field::Email));
        assert!(touched.touch(Field::Email));
        assert!(!touched.touch(Field::Email));
        assert!(touched.is_touched(Field::Email));
        assert!(!touched.is_touched(Field::Password));
    }

    #[test]
    fn touch_all_marks_every_field() {
        let mut touched = TouchedSet::new();
        touched.touch(Field::Email);
        assert!(touched.touch_all());
        assert!(Field::ALL.into_iter().all(|field| touched.is_touched(field)));
        assert!(!touched.touch_all());
    }
}
