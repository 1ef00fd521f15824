// File: src/error.rs
// Purpose: Validation failure and configuration errors

use std::collections::BTreeMap;
use std::path::PathBuf;
use thiserror::Error;

use crate::field::Field;

/// A rejected registration: one message per offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("registration rejected: {} invalid field(s)", .errors.len())]
pub struct ValidationFailure {
    errors: BTreeMap<Field, String>,
}

impl ValidationFailure {
    pub fn new(errors: BTreeMap<Field, String>) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &BTreeMap<Field, String> {
        &self.errors
    }

    pub fn into_errors(self) -> BTreeMap<Field, String> {
        self.errors
    }

    /// Message for `field`, if it failed.
    pub fn message(&self, field: Field) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Offending fields in form order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("unknown phone policy `{0}` (expected `numeric` or `international`)")]
    UnknownPhonePolicy(String),

    #[error("invalid port `{0}`")]
    InvalidPort(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_display_counts_fields() {
        let mut errors = BTreeMap::new();
        errors.insert(Field::Email, "Must be a valid email!".to_string());
        errors.insert(Field::FirstName, "This field is required!".to_string());
        let failure = ValidationFailure::new(errors);

        assert_eq!(failure.to_string(), "registration rejected: 2 invalid field(s)");
        assert_eq!(failure.message(Field::Email), Some("Must be a valid email!"));
        assert_eq!(failure.message(Field::Phone), None);

        let order: Vec<Field> = failure.iter().map(|(f, _)| f).collect();
        assert_eq!(order, vec![Field::FirstName, Field::Email]);
    }
}
