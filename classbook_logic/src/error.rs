use crate::commands::CommandError;
use crate::parser::ParseError;
use classbook_core::logging::Code;

/// Anything that stops a line of input from taking effect
///
/// Messages are passed through unchanged so they can be shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogicError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),
}

impl LogicError {
    /// Get error code for global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::Parse(error) => error.error_code(),
            Self::Command(error) => error.error_code(),
        }
    }
}
