//! String validation functions

/// Length in Unicode scalar values, not bytes.
pub fn char_len(s: &str) -> usize {
    s.chars().count()
}

/// A value is present when it holds at least one character.
///
/// Whitespace counts: `" "` is present.
pub fn is_present(s: &str) -> bool {
    !s.is_empty()
}

/// Validates minimum length
pub fn validate_min_length(s: &str, min: usize) -> Result<(), String> {
    if char_len(s) >= min {
        Ok(())
    } else {
        Err(format!("Must be at least {} characters", min))
    }
}

/// Equality validator
pub fn equals(value: &str, expected: &str) -> bool {
    value == expected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_validators() {
        assert!(validate_min_length("hello", 3).is_ok());
        assert!(validate_min_length("hi", 3).is_err());
        assert!(validate_min_length("", 0).is_ok());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        // 4 chars, 8 bytes
        assert_eq!(char_len("ñañá"), 4);
        assert!(validate_min_length("ñañá", 5).is_err());
        assert!(validate_min_length("ñañá", 4).is_ok());
    }

    #[test]
    fn test_presence() {
        assert!(is_present("a"));
        assert!(is_present(" "));
        assert!(!is_present(""));
    }

    #[test]
    fn test_equality() {
        assert!(equals("test", "test"));
        assert!(!equals("test", "Test"));
    }
}
