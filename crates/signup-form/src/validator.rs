// File: src/validator.rs
// Purpose: Evaluate the registration schema against a candidate

use std::collections::BTreeMap;
use tracing::debug;

use crate::error::ValidationFailure;
use crate::field::Field;
use crate::input::{Registration, RegistrationInput};
use crate::rules::Schema;

/// Result of validating one candidate
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    Accepted(Registration),
    Rejected(ValidationFailure),
}

impl ValidationOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, ValidationOutcome::Accepted(_))
    }

    pub fn failure(&self) -> Option<&ValidationFailure> {
        match self {
            ValidationOutcome::Accepted(_) => None,
            ValidationOutcome::Rejected(failure) => Some(failure),
        }
    }

    pub fn into_result(self) -> Result<Registration, ValidationFailure> {
        match self {
            ValidationOutcome::Accepted(registration) => Ok(registration),
            ValidationOutcome::Rejected(failure) => Err(failure),
        }
    }
}

impl From<ValidationOutcome> for Result<Registration, ValidationFailure> {
    fn from(outcome: ValidationOutcome) -> Self {
        outcome.into_result()
    }
}

/// Checks candidates against a fixed [`Schema`].
///
/// Holds no state besides the schema, so validating the same candidate twice
/// gives the same outcome.
#[derive(Debug, Clone, Default)]
pub struct RegistrationValidator {
    schema: Schema,
}

impl RegistrationValidator {
    pub fn new(schema: Schema) -> Self {
        Self { schema }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Validate a whole submission.
    ///
    /// Every field rule runs independently. Cross-field rules run only when
    /// all the fields they compare passed on their own.
    pub fn validate(&self, input: &RegistrationInput) -> ValidationOutcome {
        let mut errors = BTreeMap::new();
        let mut phone = None;

        for rule in self.schema.field_rules() {
            match rule.evaluate(input) {
                Ok(coerced) => phone = phone.or(coerced),
                Err(message) => {
                    errors.insert(rule.field, message);
                }
            }
        }

        for rule in self.schema.cross_field_rules() {
            if rule.fields().iter().any(|f| errors.contains_key(f)) {
                continue;
            }
            if let Err(message) = rule.check(input) {
                errors.entry(rule.target).or_insert(message);
            }
        }

        if !errors.is_empty() {
            debug!(invalid = errors.len(), "registration rejected");
            return ValidationOutcome::Rejected(ValidationFailure::new(errors));
        }

        // `Schema::registration` is the only constructor and always carries a
        // phone rule, so a passing phone field has produced its number.
        let Some(phone) = phone else {
            unreachable!("registration schema has no phone rule");
        };

        debug!("registration accepted");
        ValidationOutcome::Accepted(Registration::from_input(input, phone))
    }

    /// Fields whose cross-field check reads `field` but reports elsewhere,
    /// e.g. `confirmPassword` for `password`.
    pub fn dependents(&self, field: Field) -> Vec<Field> {
        self.schema
            .cross_field_rules()
            .iter()
            .filter(|rule| rule.target != field && rule.fields().contains(&field))
            .map(|rule| rule.target)
            .collect()
    }

    /// Validate one field, e.g. when its input loses focus.
    ///
    /// A field that is the target of a cross-field rule also gets that rule,
    /// provided every compared field passes its own rules.
    pub fn validate_field(&self, field: Field, input: &RegistrationInput) -> Option<String> {
        if let Some(rule) = self.schema.rules_for(field) {
            if let Err(message) = rule.check(input) {
                return Some(message);
            }
        }

        self.schema
            .cross_field_rules()
            .iter()
            .filter(|rule| rule.target == field)
            .filter(|rule| rule.fields().iter().all(|f| self.passes_own_rules(*f, input)))
            .find_map(|rule| rule.check(input).err())
    }

    fn passes_own_rules(&self, field: Field, input: &RegistrationInput) -> bool {
        self.schema
            .rules_for(field)
            .map_or(true, |rule| rule.check(input).is_ok())
    }
}
