// File: src/field.rs
// Purpose: Identity and naming of the registration form fields

use serde::{Deserialize, Serialize};

/// One input of the registration form.
///
/// Declaration order is form order, so ordered maps keyed by `Field` list
/// errors top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
    TermsAccepted,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Phone,
        Field::Password,
        Field::ConfirmPassword,
        Field::TermsAccepted,
    ];

    /// Key used in error mappings.
    pub fn key(self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Password => "password",
            Field::ConfirmPassword => "confirmPassword",
            Field::TermsAccepted => "termsAccepted",
        }
    }

    /// `name` attribute of the input, i.e. the key in the submitted form body.
    pub fn input_name(self) -> &'static str {
        match self {
            Field::TermsAccepted => "terms",
            other => other.key(),
        }
    }

    /// DOM id of the input; labels point at it.
    pub fn input_id(self) -> &'static str {
        match self {
            Field::ConfirmPassword => "c_password",
            other => other.input_name(),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Phone => "Phone number",
            Field::Password => "Password",
            Field::ConfirmPassword => "Confirm Password",
            Field::TermsAccepted => "Accept Terms & Conditions",
        }
    }

    /// Input `type` attribute.
    pub fn input_type(self) -> &'static str {
        match self {
            Field::Email => "email",
            Field::Password | Field::ConfirmPassword => "password",
            Field::TermsAccepted => "checkbox",
            _ => "text",
        }
    }

    /// Secret inputs are never echoed back into re-rendered markup.
    pub fn is_secret(self) -> bool {
        matches!(self, Field::Password | Field::ConfirmPassword)
    }

    /// Parses either the error key or the input name.
    pub fn from_key(key: &str) -> Option<Field> {
        Field::ALL
            .into_iter()
            .find(|f| f.key() == key || f.input_name() == key)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}
