use super::{FieldError, FieldResult, MAX_NAME_LENGTH};
use std::fmt;

/// A person's name: alphanumeric words separated by spaces
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Name(String);

impl Name {
    pub fn new(value: &str) -> FieldResult<Self> {
        if !Self::has_valid_characters(value) {
            return Err(FieldError::InvalidName);
        }
        if value.chars().count() > MAX_NAME_LENGTH {
            return Err(FieldError::NameTooLong {
                max: MAX_NAME_LENGTH,
            });
        }
        Ok(Self(value.to_string()))
    }

    pub fn is_valid(value: &str) -> bool {
        Self::has_valid_characters(value) && value.chars().count() <= MAX_NAME_LENGTH
    }

    fn has_valid_characters(value: &str) -> bool {
        let mut chars = value.chars();
        match chars.next() {
            Some(first) if first.is_ascii_alphanumeric() => {
                chars.all(|c| c.is_ascii_alphanumeric() || c == ' ')
            }
            _ => false,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whitespace-separated words of the name
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }

    /// Names identify the same person when equal ignoring case
    pub fn matches_ignore_case(&self, other: &Name) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Name {
    type Err = FieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::new(value)
    }
}
