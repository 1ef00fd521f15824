//! Phone number format checks

use once_cell::sync::Lazy;
use regex::Regex;

/// Shortest accepted international number, e.g. `+39 123456789`.
pub const MIN_INTERNATIONAL_LEN: usize = 13;

static INTERNATIONAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+[0-9]{1,3} ?[0-9]{6,14}$").expect("phone pattern is valid"));

/// E.164 caps a full number, country code included, at 15 digits.
pub const MAX_INTERNATIONAL_DIGITS: usize = 15;

/// `+<country code> <subscriber number>`, the space being optional.
pub fn is_international_phone(raw: &str) -> bool {
    raw.chars().count() >= MIN_INTERNATIONAL_LEN
        && INTERNATIONAL_RE.is_match(raw)
        && phone_digits(raw).len() <= MAX_INTERNATIONAL_DIGITS
}

/// Strips the leading `+` and separators, leaving the digits to coerce.
pub fn phone_digits(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_international_numbers() {
        assert!(is_international_phone("+39 3123456789"));
        assert!(is_international_phone("+393123456789"));
        assert!(is_international_phone("+1 5551234567"));
    }

    #[test]
    fn test_rejects_malformed_numbers() {
        assert!(!is_international_phone("3123456789"));
        assert!(!is_international_phone("+39 12345"));
        assert!(!is_international_phone("+39  3123456789"));
        assert!(!is_international_phone("+39 312-345-6789"));
        assert!(!is_international_phone("+3912 3123456789"));
        assert!(!is_international_phone(""));
    }

    #[test]
    fn test_caps_total_digits() {
        // 15 digits
        assert!(is_international_phone("+123 456789012345"));
        // 16 and 17 digits
        assert!(!is_international_phone("+123 4567890123456"));
        assert!(!is_international_phone("+123 45678901234567"));
    }

    #[test]
    fn test_phone_digits() {
        assert_eq!(phone_digits("+39 3123456789"), "393123456789");
        assert_eq!(phone_digits("+1"), "1");
    }
}
