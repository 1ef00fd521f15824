//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// Local part may hold dots but must end on a non-dot; each domain label starts
// with an alphanumeric and the TLD is alphabetic with 2+ letters.
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[a-z0-9_'+\-.]*[a-z0-9_+\-]@([a-z0-9][a-z0-9\-]*\.)+[a-z]{2,}$")
        .expect("email pattern is valid")
});

/// Validates email syntax
///
/// Checks for:
/// - Exactly one '@' with a non-empty local part
/// - Local part does not start with '.' and has no ".."
/// - Dotted domain ending in an alphabetic TLD of 2+ characters
pub fn is_valid_email(email: &str) -> bool {
    if email.starts_with('.') || email.contains("..") {
        return false;
    }

    EMAIL_RE.is_match(email)
}
