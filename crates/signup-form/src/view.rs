// File: src/view.rs
// Purpose: Display state for the form, derived from submitted values and a validation result

use std::collections::BTreeMap;

use crate::error::ValidationFailure;
use crate::field::Field;
use crate::input::{FieldValue, RegistrationInput};
use crate::validator::ValidationOutcome;

const INPUT_CLASS: &str = "w-full px-3 py-2 text-sm leading-tight text-gray-700 border rounded appearance-none focus:outline-none focus:shadow-outline";
const INPUT_ERROR_CLASS: &str = "border-red-500";

pub const LABEL_CLASS: &str = "block mb-2 text-sm font-bold text-gray-700";
pub const ERROR_CLASS: &str = "text-xs italic text-red-500 mt-2";

/// Class list of a text input
pub fn input_class(has_error: bool) -> String {
    if has_error {
        format!("{} {}", INPUT_CLASS, INPUT_ERROR_CLASS)
    } else {
        INPUT_CLASS.to_string()
    }
}

/// Class list of the label next to a checkbox; the label itself turns red
pub fn checkbox_label_class(has_error: bool) -> &'static str {
    if has_error {
        "ml-2 mb-2 text-sm font-bold text-red-500"
    } else {
        "ml-2 mb-2 text-sm font-bold text-gray-700"
    }
}

/// What one input should look like
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDisplay<'a> {
    pub field: Field,
    /// Value to pre-fill; `None` for secrets and checkboxes
    pub value: Option<&'a str>,
    pub checked: bool,
    pub error: Option<&'a str>,
    pub input_class: String,
    pub label_class: &'static str,
}

impl FieldDisplay<'_> {
    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Submitted values plus the latest messages, one per field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormView {
    values: RegistrationInput,
    errors: BTreeMap<Field, String>,
}

impl FormView {
    /// A blank form
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(values: RegistrationInput, errors: BTreeMap<Field, String>) -> Self {
        Self { values, errors }
    }

    pub fn with_failure(values: RegistrationInput, failure: &ValidationFailure) -> Self {
        Self::new(values, failure.errors().clone())
    }

    pub fn from_outcome(values: RegistrationInput, outcome: &ValidationOutcome) -> Self {
        match outcome.failure() {
            Some(failure) => Self::with_failure(values, failure),
            None => Self::new(values, BTreeMap::new()),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn field(&self, field: Field) -> FieldDisplay<'_> {
        let error = self.error(field);

        let (value, checked) = match self.values.value(field) {
            FieldValue::Text(_) if field.is_secret() => (None, false),
            FieldValue::Text(text) => (Some(text), false),
            FieldValue::Checked(checked) => (None, checked),
        };

        let label_class = match field {
            Field::TermsAccepted => checkbox_label_class(error.is_some()),
            _ => LABEL_CLASS,
        };

        FieldDisplay {
            field,
            value,
            checked,
            error,
            input_class: input_class(error.is_some()),
            label_class,
        }
    }
}
