//! Errors raised while turning a command line into a command

use classbook_core::logging::{codes, Code};
use classbook_core::model::fields::FieldError;

pub type ParseResult<T> = Result<T, ParseError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("Invalid command format! \n{usage}")]
    InvalidCommandFormat { usage: String },

    #[error("Unknown command")]
    UnknownCommand,

    #[error("Index is not a non-zero unsigned integer.")]
    InvalidIndex,

    #[error(transparent)]
    InvalidField(#[from] FieldError),

    #[error("At least one field to edit must be provided.")]
    NoFieldsProvided,
}

impl ParseError {
    /// Create invalid command format error carrying the command's usage
    pub fn invalid_format(usage: &str) -> Self {
        Self::InvalidCommandFormat {
            usage: usage.to_string(),
        }
    }

    /// Get error code for global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::InvalidCommandFormat { .. } => codes::parse::INVALID_COMMAND_FORMAT,
            Self::UnknownCommand => codes::parse::UNKNOWN_COMMAND,
            Self::InvalidIndex => codes::parse::INVALID_INDEX,
            Self::InvalidField(error) => error.error_code(),
            Self::NoFieldsProvided => codes::parse::NO_FIELDS_PROVIDED,
        }
    }
}
