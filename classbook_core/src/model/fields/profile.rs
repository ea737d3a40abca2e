use super::{is_ascii_alphanumeric_word, starts_with_non_whitespace, FieldError, FieldResult};
use std::fmt;

/// Gender as recorded in the school register
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    /// Accepts `M` or `F` in either case
    pub fn new(value: &str) -> FieldResult<Self> {
        match value {
            "M" | "m" => Ok(Gender::Male),
            "F" | "f" => Ok(Gender::Female),
            _ => Err(FieldError::InvalidGender),
        }
    }

    pub fn is_valid(value: &str) -> bool {
        Self::new(value).is_ok()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "M",
            Gender::Female => "F",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

text_field!(
    /// A class or co-curricular activity the person is involved in
    Involvement,
    starts_with_non_whitespace,
    FieldError::InvalidInvolvement
);

text_field!(
    /// Form class such as `4E1`
    FormClass,
    is_ascii_alphanumeric_word,
    FieldError::InvalidFormClass
);

/// Free-text medical notes; empty means none recorded
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MedicalHistory(String);

impl MedicalHistory {
    pub fn new(value: &str) -> Self {
        Self(value.to_string())
    }

    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MedicalHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
