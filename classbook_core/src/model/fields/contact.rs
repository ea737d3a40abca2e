use super::{
    starts_with_non_whitespace, FieldError, FieldResult, MAX_PHONE_DIGITS, MIN_PHONE_DIGITS,
};
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

const EMAIL_PATTERN: &str = concat!(
    r"^[A-Za-z0-9]+([+_.-][A-Za-z0-9]+)*",
    r"@([A-Za-z0-9]+(-[A-Za-z0-9]+)*\.)*([A-Za-z0-9]+(-[A-Za-z0-9]+)*){2,}$"
);

static EMAIL_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

fn email_regex() -> Option<&'static Regex> {
    EMAIL_REGEX
        .get_or_init(|| Regex::new(EMAIL_PATTERN).ok())
        .as_ref()
}

/// Digits-only phone number
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(value: &str) -> FieldResult<Self> {
        if Self::is_valid(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(FieldError::invalid_phone())
        }
    }

    pub fn is_valid(value: &str) -> bool {
        (MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&value.len())
            && value.chars().all(|c| c.is_ascii_digit())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Email address of the form `local-part@domain`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Email(String);

impl Email {
    pub fn new(value: &str) -> FieldResult<Self> {
        if Self::is_valid(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(FieldError::InvalidEmail)
        }
    }

    pub fn is_valid(value: &str) -> bool {
        email_regex().is_some_and(|re| re.is_match(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

text_field!(
    /// Postal address; any text not starting with whitespace
    Address,
    starts_with_non_whitespace,
    FieldError::InvalidAddress
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_pattern_compiles() {
        assert!(Regex::new(EMAIL_PATTERN).is_ok());
    }

    #[test]
    fn test_phone_bounds() {
        assert!(!Phone::is_valid(""));
        assert!(!Phone::is_valid("91"));
        assert!(Phone::is_valid("911"));
        assert!(Phone::is_valid("93121534"));
        assert!(Phone::is_valid("124293842033123"));
        assert!(!Phone::is_valid("1242938420331234"));
        assert!(!Phone::is_valid("9011p041"));
        assert!(!Phone::is_valid("9312 1534"));
    }

    #[test]
    fn test_valid_emails() {
        assert!(Email::is_valid("PeterJack_1190@example.com"));
        assert!(Email::is_valid("a@bc"));
        assert!(Email::is_valid("test@localhost"));
        assert!(Email::is_valid("a1+be.d@example1.com"));
        assert!(Email::is_valid("peter_jack@very-very-very-long-example.com"));
        assert!(Email::is_valid("e1234567@u.nus.edu"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!Email::is_valid(""));
        assert!(!Email::is_valid("@example.com"));
        assert!(!Email::is_valid("peterjackexample.com"));
        assert!(!Email::is_valid("peterjack@"));
        assert!(!Email::is_valid("peterjack@example.c"));
        assert!(!Email::is_valid("peterjack@-example.com"));
        assert!(!Email::is_valid("peterjack@example.com-"));
        assert!(!Email::is_valid("-peterjack@example.com"));
        assert!(!Email::is_valid("peter..jack@example.com"));
        assert!(!Email::is_valid("peter jack@example.com"));
        assert!(!Email::is_valid("peterjack@example_com"));
    }

    #[test]
    fn test_address() {
        assert!(Address::is_valid("Blk 456, Den Road, #01-355"));
        assert!(Address::is_valid("-"));
        assert!(!Address::is_valid(""));
        assert!(!Address::is_valid(" "));
        assert_eq!(Address::new(""), Err(FieldError::InvalidAddress));
    }
}
