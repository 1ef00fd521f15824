// File: src/input.rs
// Purpose: Registration candidate as submitted, and the record it becomes once accepted

use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::field::Field;

/// Current form values, built fresh for each submission attempt.
///
/// Every key is optional in the body: a missing text input is the empty
/// string and an unchecked checkbox (which browsers omit) is `false`.
#[derive(Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RegistrationInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Raw text; coerced to a number by the phone rule.
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    #[serde(rename = "terms", deserialize_with = "deserialize_checkbox")]
    pub terms_accepted: bool,
}

/// Borrowed view of one field's value, as the rules see it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Checked(bool),
}

impl RegistrationInput {
    pub fn value(&self, field: Field) -> FieldValue<'_> {
        match field {
            Field::FirstName => FieldValue::Text(&self.first_name),
            Field::LastName => FieldValue::Text(&self.last_name),
            Field::Email => FieldValue::Text(&self.email),
            Field::Phone => FieldValue::Text(&self.phone),
            Field::Password => FieldValue::Text(&self.password),
            Field::ConfirmPassword => FieldValue::Text(&self.confirm_password),
            Field::TermsAccepted => FieldValue::Checked(self.terms_accepted),
        }
    }
}

impl fmt::Debug for RegistrationInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistrationInput")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"***")
            .field("confirm_password", &"***")
            .field("terms_accepted", &self.terms_accepted)
            .finish()
    }
}

/// An accepted registration.
///
/// Same values as the input it came from, except `phone` which holds the
/// coerced number. Passwords are left out of the serialized form so the
/// record can be logged as-is.
#[derive(Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: f64,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(skip_serializing)]
    pub confirm_password: String,
    #[serde(rename = "terms")]
    pub terms_accepted: bool,
}

impl Registration {
    pub(crate) fn from_input(input: &RegistrationInput, phone: f64) -> Self {
        Self {
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            email: input.email.clone(),
            phone,
            password: input.password.clone(),
            confirm_password: input.confirm_password.clone(),
            terms_accepted: input.terms_accepted,
        }
    }
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("email", &self.email)
            .field("phone", &self.phone)
            .field("password", &"***")
            .field("confirm_password", &"***")
            .field("terms_accepted", &self.terms_accepted)
            .finish()
    }
}

/// Checkbox values arrive as `on` from HTML forms and as booleans from JSON.
fn deserialize_checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct CheckboxVisitor;

    impl<'de> Visitor<'de> for CheckboxVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a boolean or a checkbox value")
        }

        fn visit_bool<E: de::Error>(self, v: bool) -> Result<bool, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<bool, E> {
            Ok(v != 0)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<bool, E> {
            Ok(v != 0)
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<bool, E> {
            Ok(matches!(
                v.trim().to_ascii_lowercase().as_str(),
                "on" | "true" | "1" | "yes" | "checked"
            ))
        }

        fn visit_unit<E: de::Error>(self) -> Result<bool, E> {
            Ok(false)
        }

        fn visit_none<E: de::Error>(self) -> Result<bool, E> {
            Ok(false)
        }
    }

    deserializer.deserialize_any(CheckboxVisitor)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserialize_from_json() {
        let input: RegistrationInput = serde_json::from_str(
            r#"{
                "firstName": "Ada",
                "lastName": "Lovelace",
                "email": "ada@example.com",
                "phone": "3912345678",
                "password": "analytical1",
                "confirmPassword": "analytical1",
                "terms": true
            }"#,
        )
        .unwrap();

        assert_eq!(input.first_name, "Ada");
        assert_eq!(input.confirm_password, "analytical1");
        assert!(input.terms_accepted);
    }

    #[test]
    fn test_missing_keys_default() {
        let input: RegistrationInput = serde_json::from_str(r#"{"email": "a@b.co"}"#).unwrap();
        assert_eq!(input.first_name, "");
        assert_eq!(input.phone, "");
        assert!(!input.terms_accepted);
    }

    #[test]
    fn test_checkbox_string_values() {
        for (raw, expected) in [("on", true), ("true", true), ("1", true), ("off", false), ("", false)] {
            let json = format!(r#"{{"terms": "{}"}}"#, raw);
            let input: RegistrationInput = serde_json::from_str(&json).unwrap();
            assert_eq!(input.terms_accepted, expected, "terms = {:?}", raw);
        }

        let input: RegistrationInput = serde_json::from_str(r#"{"terms": null}"#).unwrap();
        assert!(!input.terms_accepted);
    }

    #[test]
    fn test_debug_hides_passwords() {
        let input = RegistrationInput {
            password: "hunter22hunter".to_string(),
            confirm_password: "hunter22hunter".to_string(),
            ..Default::default()
        };
        let rendered = format!("{:?}", input);
        assert!(!rendered.contains("hunter22hunter"));
    }

    #[test]
    fn test_registration_serialization_skips_passwords() {
        let input = RegistrationInput {
            first_name: "Ada".to_string(),
            password: "analytical1".to_string(),
            confirm_password: "analytical1".to_string(),
            terms_accepted: true,
            ..Default::default()
        };
        let json = serde_json::to_value(Registration::from_input(&input, 42.0)).unwrap();

        assert_eq!(json["firstName"], "Ada");
        assert_eq!(json["phone"], 42.0);
        assert_eq!(json["terms"], true);
        assert!(json.get("password").is_none());
        assert!(json.get("confirmPassword").is_none());
    }
}
