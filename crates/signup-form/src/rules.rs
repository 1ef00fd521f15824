// File: src/rules.rs
// Purpose: Declarative rule set for the registration form

use serde::{Deserialize, Serialize};
use signup_validation as validators;
use std::str::FromStr;

use crate::config::ValidationSettings;
use crate::error::ConfigError;
use crate::field::Field;
use crate::input::{FieldValue, RegistrationInput};

/// Messages shown next to an input when one of its rules fails.
pub mod messages {
    pub const REQUIRED: &str = "This field is required!";
    pub const INVALID_EMAIL: &str = "Must be a valid email!";
    pub const INVALID_PHONE: &str = "Enter a valid phone number! (Ex: +39 XXXXXXXXXX)";
    pub const MALFORMED_PHONE: &str = "Invalid phone number (Ex: +39 XXXXXXXXXX)";
    pub const TERMS_NOT_ACCEPTED: &str = "You must accept Terms and Conditions";
    pub const PASSWORDS_MISMATCH: &str = "Passwords don't match!";

    pub fn password_too_short(min: usize) -> String {
        format!("Password must be atleast {} characters!", min)
    }
}

/// How strictly the phone input is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PhonePolicy {
    /// Anything that coerces to a number >= 1.
    #[default]
    Numeric,
    /// `+<country code> <number>`, e.g. `+39 3123456789`.
    International,
}

impl PhonePolicy {
    pub fn as_str(self) -> &'static str {
        match self {
            PhonePolicy::Numeric => "numeric",
            PhonePolicy::International => "international",
        }
    }
}

impl FromStr for PhonePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "numeric" => Ok(PhonePolicy::Numeric),
            "international" => Ok(PhonePolicy::International),
            other => Err(ConfigError::UnknownPhonePolicy(other.to_string())),
        }
    }
}

/// Coerces the phone text to its numeric value under `policy`.
///
/// Blank input coerces to zero and therefore reports the required message
/// under both policies.
pub fn coerce_phone(raw: &str, policy: PhonePolicy) -> Result<f64, String> {
    match policy {
        PhonePolicy::Numeric => {
            let number = validators::coerce_number(raw).ok_or(messages::INVALID_PHONE)?;
            validators::validate_min(number, 1.0).map_err(|_| messages::REQUIRED)?;
            Ok(number)
        }
        PhonePolicy::International => {
            if raw.trim().is_empty() {
                return Err(messages::REQUIRED.to_string());
            }
            if !validators::is_international_phone(raw) {
                return Err(messages::MALFORMED_PHONE.to_string());
            }
            let number = validators::coerce_number(&validators::phone_digits(raw))
                .ok_or(messages::MALFORMED_PHONE)?;
            validators::validate_min(number, 1.0).map_err(|_| messages::MALFORMED_PHONE)?;
            Ok(number)
        }
    }
}

/// A single predicate over one field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// Text is non-empty; a checkbox is checked.
    Required,
    Email,
    MinChars(usize),
    Phone(PhonePolicy),
    /// Checkbox must be checked.
    MustAccept,
}

impl Rule {
    pub fn check(&self, value: FieldValue<'_>) -> Result<(), String> {
        match (self, value) {
            (Rule::Required, FieldValue::Text(s)) if validators::is_present(s) => Ok(()),
            (Rule::Required, FieldValue::Checked(true)) => Ok(()),
            (Rule::Required, _) => Err(messages::REQUIRED.to_string()),

            (Rule::Email, FieldValue::Text(s)) if validators::is_valid_email(s) => Ok(()),
            (Rule::Email, _) => Err(messages::INVALID_EMAIL.to_string()),

            (Rule::MinChars(min), FieldValue::Text(s)) => validators::validate_min_length(s, *min)
                .map_err(|_| messages::password_too_short(*min)),
            (Rule::MinChars(min), FieldValue::Checked(_)) => {
                Err(messages::password_too_short(*min))
            }

            (Rule::Phone(policy), FieldValue::Text(s)) => coerce_phone(s, *policy).map(|_| ()),
            (Rule::Phone(_), FieldValue::Checked(_)) => Err(messages::INVALID_PHONE.to_string()),

            (Rule::MustAccept, FieldValue::Checked(true)) => Ok(()),
            (Rule::MustAccept, _) => Err(messages::TERMS_NOT_ACCEPTED.to_string()),
        }
    }
}

/// Rules for one field, checked in order; the first failure is reported.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRule {
    pub field: Field,
    pub rules: Vec<Rule>,
}

impl FieldRule {
    pub fn new(field: Field, rules: Vec<Rule>) -> Self {
        Self { field, rules }
    }

    pub fn check(&self, input: &RegistrationInput) -> Result<(), String> {
        self.evaluate(input).map(|_| ())
    }

    /// Like [`check`](Self::check), but hands back the number a phone rule
    /// coerced the text to.
    pub fn evaluate(&self, input: &RegistrationInput) -> Result<Option<f64>, String> {
        let value = input.value(self.field);
        let mut coerced = None;

        for rule in &self.rules {
            match (rule, value) {
                (Rule::Phone(policy), FieldValue::Text(s)) => {
                    coerced = Some(coerce_phone(s, *policy)?);
                }
                _ => rule.check(value)?,
            }
        }

        Ok(coerced)
    }
}

/// Equality between two fields, reported on `target`.
///
/// Only evaluated once both fields pass their own rules.
#[derive(Debug, Clone, PartialEq)]
pub struct CrossFieldRule {
    pub left: Field,
    pub right: Field,
    pub target: Field,
    pub message: String,
}

impl CrossFieldRule {
    pub fn equal(left: Field, right: Field, message: impl Into<String>) -> Self {
        Self {
            left,
            right,
            target: right,
            message: message.into(),
        }
    }

    pub fn fields(&self) -> [Field; 2] {
        [self.left, self.right]
    }

    pub fn check(&self, input: &RegistrationInput) -> Result<(), String> {
        let same = match (input.value(self.left), input.value(self.right)) {
            (FieldValue::Text(a), FieldValue::Text(b)) => validators::equals(a, b),
            (a, b) => a == b,
        };

        if same {
            Ok(())
        } else {
            Err(self.message.clone())
        }
    }
}

/// The registration form's complete rule set.
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    field_rules: Vec<FieldRule>,
    cross_field_rules: Vec<CrossFieldRule>,
}

impl Schema {
    pub fn registration(settings: &ValidationSettings) -> Self {
        let field_rules = vec![
            FieldRule::new(Field::FirstName, vec![Rule::Required]),
            FieldRule::new(Field::LastName, vec![Rule::Required]),
            FieldRule::new(Field::Email, vec![Rule::Required, Rule::Email]),
            FieldRule::new(Field::Phone, vec![Rule::Phone(settings.phone_policy)]),
            FieldRule::new(
                Field::Password,
                vec![Rule::MinChars(settings.password_min_length)],
            ),
            FieldRule::new(Field::ConfirmPassword, vec![Rule::Required]),
            FieldRule::new(Field::TermsAccepted, vec![Rule::MustAccept]),
        ];

        let cross_field_rules = vec![CrossFieldRule::equal(
            Field::Password,
            Field::ConfirmPassword,
            messages::PASSWORDS_MISMATCH,
        )];

        Self {
            field_rules,
            cross_field_rules,
        }
    }

    pub fn field_rules(&self) -> &[FieldRule] {
        &self.field_rules
    }

    pub fn cross_field_rules(&self) -> &[CrossFieldRule] {
        &self.cross_field_rules
    }

    pub fn rules_for(&self, field: Field) -> Option<&FieldRule> {
        self.field_rules.iter().find(|r| r.field == field)
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::registration(&ValidationSettings::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_required_rule() {
        assert!(Rule::Required.check(FieldValue::Text("Ada")).is_ok());
        assert!(Rule::Required.check(FieldValue::Text(" ")).is_ok());
        assert_eq!(
            Rule::Required.check(FieldValue::Text("")),
            Err(messages::REQUIRED.to_string())
        );
        assert!(Rule::Required.check(FieldValue::Checked(false)).is_err());
    }

    #[test]
    fn test_min_chars_message_names_the_minimum() {
        assert_eq!(
            Rule::MinChars(8).check(FieldValue::Text("short1")),
            Err("Password must be atleast 8 characters!".to_string())
        );
        assert!(Rule::MinChars(8).check(FieldValue::Text("longenough")).is_ok());
    }

    #[test]
    fn test_must_accept() {
        assert!(Rule::MustAccept.check(FieldValue::Checked(true)).is_ok());
        assert_eq!(
            Rule::MustAccept.check(FieldValue::Checked(false)),
            Err(messages::TERMS_NOT_ACCEPTED.to_string())
        );
    }

    #[rstest]
    #[case("3123456789", Ok(3123456789.0))]
    #[case(" 42 ", Ok(42.0))]
    #[case("", Err(messages::REQUIRED))]
    #[case("0", Err(messages::REQUIRED))]
    #[case("-3", Err(messages::REQUIRED))]
    #[case("+39 3123456789", Err(messages::INVALID_PHONE))]
    #[case("call me", Err(messages::INVALID_PHONE))]
    fn test_numeric_phone_policy(#[case] raw: &str, #[case] expected: Result<f64, &str>) {
        assert_eq!(
            coerce_phone(raw, PhonePolicy::Numeric),
            expected.map_err(str::to_string)
        );
    }

    #[rstest]
    #[case("+39 3123456789", Ok(393123456789.0))]
    #[case("+393123456789", Ok(393123456789.0))]
    #[case("", Err(messages::REQUIRED))]
    #[case("3123456789", Err(messages::MALFORMED_PHONE))]
    #[case("+39 12345", Err(messages::MALFORMED_PHONE))]
    #[case("+00 000000000000", Err(messages::MALFORMED_PHONE))]
    #[case("+123 45678901234567", Err(messages::MALFORMED_PHONE))]
    #[case("+123 456789012345", Ok(123456789012345.0))]
    fn test_international_phone_policy(#[case] raw: &str, #[case] expected: Result<f64, &str>) {
        assert_eq!(
            coerce_phone(raw, PhonePolicy::International),
            expected.map_err(str::to_string)
        );
    }

    #[test]
    fn test_phone_policy_from_str() {
        assert_eq!("numeric".parse::<PhonePolicy>().unwrap(), PhonePolicy::Numeric);
        assert_eq!(
            " International ".parse::<PhonePolicy>().unwrap(),
            PhonePolicy::International
        );
        assert!("e164".parse::<PhonePolicy>().is_err());
    }

    #[test]
    fn test_field_rule_reports_first_failure() {
        let rule = FieldRule::new(Field::Email, vec![Rule::Required, Rule::Email]);
        let input = RegistrationInput::default();
        assert_eq!(rule.check(&input), Err(messages::REQUIRED.to_string()));
    }

    #[test]
    fn test_evaluate_returns_coerced_phone() {
        let rule = FieldRule::new(Field::Phone, vec![Rule::Phone(PhonePolicy::Numeric)]);
        let input = RegistrationInput {
            phone: " 3912345678 ".to_string(),
            ..Default::default()
        };
        assert_eq!(rule.evaluate(&input), Ok(Some(3912345678.0)));

        let name = FieldRule::new(Field::FirstName, vec![Rule::Required]);
        assert_eq!(name.evaluate(&input), Err(messages::REQUIRED.to_string()));
    }

    #[test]
    fn test_cross_field_rule_targets_right_field() {
        let rule = CrossFieldRule::equal(Field::Password, Field::ConfirmPassword, "nope");
        assert_eq!(rule.target, Field::ConfirmPassword);

        let input = RegistrationInput {
            password: "longenough1".to_string(),
            confirm_password: "different1".to_string(),
            ..Default::default()
        };
        assert_eq!(rule.check(&input), Err("nope".to_string()));

        let matching = RegistrationInput {
            confirm_password: "longenough1".to_string(),
            ..input
        };
        assert_eq!(rule.check(&matching), Ok(()));
    }

    #[test]
    fn test_registration_schema_covers_every_field() {
        let schema = Schema::default();
        for field in Field::ALL {
            assert!(schema.rules_for(field).is_some(), "no rule for {}", field);
        }
        assert_eq!(schema.cross_field_rules().len(), 1);
    }
}
