//! # signup-form
//!
//! The registration form: a plain data record, a separate declarative rule set
//! over that record, and the pieces that turn a validation result into markup.
//!
//! ```rust,ignore
//! use signup_form::{RegistrationInput, RegistrationValidator, ValidationOutcome};
//!
//! let validator = RegistrationValidator::default();
//! match validator.validate(&input) {
//!     ValidationOutcome::Accepted(registration) => submit(registration),
//!     ValidationOutcome::Rejected(failure) => {
//!         for (field, message) in failure.iter() {
//!             println!("{}: {}", field.key(), message);
//!         }
//!     }
//! }
//! ```
//!
//! ## Modules
//!
//! - [`field`] - the seven form fields and their names
//! - [`input`] - `RegistrationInput` (raw candidate) and `Registration` (accepted record)
//! - [`rules`] - field rules, the cross-field rule and the messages they produce
//! - [`validator`] - evaluation of a `Schema` against a candidate
//! - [`view`] - display state derived from a validation result
//! - [`form_field`] - HTML5 / `data-validate` attributes derived from the schema
//! - [`render`] - maud templates for the form and the confirmation page
//! - [`config`] - `signup.toml` and environment overrides

pub mod config;
pub mod error;
pub mod field;
pub mod form_field;
pub mod input;
pub mod render;
pub mod rules;
pub mod validator;
pub mod view;

pub use config::{AppConfig, ServerConfig, ValidationSettings};
pub use error::{ConfigError, ValidationFailure};
pub use field::Field;
pub use form_field::FieldAttrs;
pub use input::{FieldValue, Registration, RegistrationInput};
pub use rules::{CrossFieldRule, FieldRule, PhonePolicy, Rule, Schema};
pub use validator::{RegistrationValidator, ValidationOutcome};
pub use view::{FieldDisplay, FormView};
