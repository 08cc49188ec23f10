//! Field format matchers shared by validation and the form's lookup gates.

use regex::Regex;
use std::sync::OnceLock;

/// Format constraints for the customer fields that follow a fixed pattern.
///
/// The same matchers gate the form's asynchronous side effects: a PAN
/// lookup fires only when the field matches [`FieldFormat::Pan`], a postcode
/// lookup only when the field matches [`FieldFormat::Postcode`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    /// 10 characters: five uppercase letters, four digits, one letter.
    Pan,
    /// Exactly six digits.
    Postcode,
    /// Exactly ten digits.
    Mobile,
    /// Simple email syntax (local@domain.tld).
    Email,
}

impl FieldFormat {
    /// Check whether `value` matches this format.
    pub fn matches(&self, value: &str) -> bool {
        match self {
            FieldFormat::Pan => Self::pan_regex().is_match(value),
            FieldFormat::Postcode => Self::postcode_regex().is_match(value),
            FieldFormat::Mobile => Self::mobile_regex().is_match(value),
            FieldFormat::Email => Self::email_regex().is_match(value),
        }
    }

    fn pan_regex() -> &'static Regex {
        static PAN_REGEX: OnceLock<Regex> = OnceLock::new();
        PAN_REGEX.get_or_init(|| Regex::new(r"^[A-Z]{5}[0-9]{4}[A-Z]$").unwrap())
    }

    fn postcode_regex() -> &'static Regex {
        static POSTCODE_REGEX: OnceLock<Regex> = OnceLock::new();
        POSTCODE_REGEX.get_or_init(|| Regex::new(r"^[0-9]{6}$").unwrap())
    }

    fn mobile_regex() -> &'static Regex {
        static MOBILE_REGEX: OnceLock<Regex> = OnceLock::new();
        MOBILE_REGEX.get_or_init(|| Regex::new(r"^[0-9]{10}$").unwrap())
    }

    fn email_regex() -> &'static Regex {
        static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();
        EMAIL_REGEX.get_or_init(|| {
            Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pan_accepts_valid_pattern() {
        assert!(FieldFormat::Pan.matches("ABCDE1234F"));
    }

    #[test]
    fn test_pan_rejects_lowercase() {
        assert!(!FieldFormat::Pan.matches("abcde1234f"));
    }

    #[test]
    fn test_pan_rejects_short_input() {
        assert!(!FieldFormat::Pan.matches("abc"));
        assert!(!FieldFormat::Pan.matches(""));
    }

    #[test]
    fn test_pan_rejects_trailing_garbage() {
        assert!(!FieldFormat::Pan.matches("ABCDE1234FX"));
    }

    #[test]
    fn test_postcode_accepts_six_digits() {
        assert!(FieldFormat::Postcode.matches("560001"));
    }

    #[test]
    fn test_postcode_rejects_partial_input() {
        assert!(!FieldFormat::Postcode.matches("12"));
        assert!(!FieldFormat::Postcode.matches("5600011"));
        assert!(!FieldFormat::Postcode.matches("56000a"));
    }

    #[test]
    fn test_mobile_accepts_ten_digits() {
        assert!(FieldFormat::Mobile.matches("9876543210"));
    }

    #[test]
    fn test_mobile_rejects_other_lengths() {
        assert!(!FieldFormat::Mobile.matches("987654321"));
        assert!(!FieldFormat::Mobile.matches("98765432100"));
        assert!(!FieldFormat::Mobile.matches("98765-4321"));
    }

    #[test]
    fn test_email_accepts_simple_address() {
        assert!(FieldFormat::Email.matches("asha@example.com"));
        assert!(FieldFormat::Email.matches("a.b+c@mail.example.co.in"));
    }

    #[test]
    fn test_email_rejects_malformed_address() {
        assert!(!FieldFormat::Email.matches("asha"));
        assert!(!FieldFormat::Email.matches("asha@"));
        assert!(!FieldFormat::Email.matches("asha@example"));
        assert!(!FieldFormat::Email.matches("a sha@example.com"));
    }
}
