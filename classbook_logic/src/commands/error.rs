//! Errors raised while executing a command against the model

use classbook_core::logging::{codes, Code};
use classbook_core::messages;
use classbook_core::ModelError;

pub type CommandOutcome = Result<super::CommandResult, CommandError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
    #[error("{message}")]
    InvalidDisplayedIndex { message: String },

    #[error("{message}")]
    Duplicate { message: String },

    #[error(transparent)]
    Model(#[from] ModelError),
}

impl CommandError {
    pub fn invalid_student_index() -> Self {
        Self::InvalidDisplayedIndex {
            message: messages::MESSAGE_INVALID_STUDENT_DISPLAYED_INDEX.to_string(),
        }
    }

    pub fn invalid_teacher_index() -> Self {
        Self::InvalidDisplayedIndex {
            message: messages::MESSAGE_INVALID_TEACHER_DISPLAYED_INDEX.to_string(),
        }
    }

    pub fn invalid_meeting_index() -> Self {
        Self::InvalidDisplayedIndex {
            message: messages::MESSAGE_INVALID_MEETING_DISPLAYED_INDEX.to_string(),
        }
    }

    pub fn duplicate(message: &str) -> Self {
        Self::Duplicate {
            message: message.to_string(),
        }
    }

    /// Get error code for global logging system
    pub fn error_code(&self) -> Code {
        match self {
            Self::InvalidDisplayedIndex { .. } => codes::command::INVALID_DISPLAYED_INDEX,
            Self::Duplicate { .. } => codes::command::DUPLICATE_ENTITY,
            Self::Model(error) => error.error_code(),
        }
    }
}
