//! Validated field values
//!
//! Every value type here can only be built through a constructor that checks
//! its constraint, and renders back to the exact text it was built from.

/// Generates a string-backed field type with the usual accessors
macro_rules! text_field {
    ($(#[$meta:meta])* $name:ident, $validate:expr, $error:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(String);

        impl $name {
            pub fn new(value: &str) -> $crate::model::fields::FieldResult<Self> {
                if Self::is_valid(value) {
                    Ok(Self(value.to_string()))
                } else {
                    Err($error)
                }
            }

            pub fn is_valid(value: &str) -> bool {
                let validate: fn(&str) -> bool = $validate;
                validate(value)
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::model::fields::FieldError;

            fn from_str(value: &str) -> Result<Self, Self::Err> {
                Self::new(value)
            }
        }
    };
}

mod contact;
mod meeting;
mod name;
mod profile;
mod tag;

pub use contact::{Address, Email, Phone};
pub use meeting::{Location, MeetingDateTime, MeetingDescription};
pub use name::Name;
pub use profile::{FormClass, Gender, Involvement, MedicalHistory};
pub use tag::{Tag, TagSet};

use crate::config::constants::compile_time::fields::*;
use crate::logging::{codes, Code};

pub type FieldResult<T> = Result<T, FieldError>;

/// A field value that violates its constraint; the message is the constraint
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Names should only contain alphanumeric characters and spaces, and it should not be blank")]
    InvalidName,

    #[error("Names should be at most {max} characters long")]
    NameTooLong { max: usize },

    #[error("Phone numbers should only contain numbers, and it should be between {min} and {max} digits long")]
    InvalidPhone { min: usize, max: usize },

    #[error(
        "Emails should be of the format local-part@domain and adhere to the following constraints:\n\
         1. The local-part should only contain alphanumeric characters and these special characters, \
         excluding the parentheses, (+_.-). The local-part may not start or end with any special characters.\n\
         2. This is followed by a '@' and then a domain name. The domain name is made up of domain labels \
         separated by periods.\n\
         The domain name must:\n    \
         - end with a domain label at least 2 characters long\n    \
         - have each domain label start and end with alphanumeric characters\n    \
         - have each domain label consist of alphanumeric characters, separated only by hyphens, if any."
    )]
    InvalidEmail,

    #[error("Addresses can take any values, and it should not be blank")]
    InvalidAddress,

    #[error("Gender should be either M or F")]
    InvalidGender,

    #[error("Involvement can take any values, and it should not be blank")]
    InvalidInvolvement,

    #[error("Form class should only contain alphanumeric characters, and it should not be blank")]
    InvalidFormClass,

    #[error("Tags names should be alphanumeric")]
    InvalidTag,

    #[error("At most {max} tags can be attached")]
    TooManyTags { max: usize },

    #[error("Meeting descriptions can take any values, and it should not be blank")]
    InvalidMeetingDescription,

    #[error("Meeting date-times should be in the format YYYY-MM-DD HH:MM")]
    InvalidMeetingDateTime,

    #[error("Locations can take any values, and it should not be blank")]
    InvalidLocation,
}

impl FieldError {
    pub fn invalid_phone() -> Self {
        Self::InvalidPhone {
            min: MIN_PHONE_DIGITS,
            max: MAX_PHONE_DIGITS,
        }
    }

    pub fn error_code(&self) -> Code {
        codes::parse::INVALID_FIELD
    }
}

/// Text whose first character is present and not whitespace
fn starts_with_non_whitespace(value: &str) -> bool {
    value.chars().next().is_some_and(|c| !c.is_whitespace())
}

fn is_ascii_alphanumeric_word(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_errors_share_code() {
        assert_eq!(FieldError::InvalidTag.error_code(), codes::parse::INVALID_FIELD);
        assert_eq!(
            FieldError::invalid_phone().to_string(),
            "Phone numbers should only contain numbers, and it should be between 3 and 15 digits long"
        );
    }

    #[test]
    fn test_starts_with_non_whitespace() {
        assert!(starts_with_non_whitespace("Blk 30"));
        assert!(!starts_with_non_whitespace(""));
        assert!(!starts_with_non_whitespace(" Blk 30"));
    }
}
