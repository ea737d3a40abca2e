//! Model mutation errors

use crate::logging::{codes, Code};

pub type ModelResult<T> = Result<T, ModelError>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("Operation would result in duplicate students")]
    DuplicateStudent,

    #[error("Operation would result in duplicate teachers")]
    DuplicateTeacher,

    #[error("Operation would result in duplicate meetings")]
    DuplicateMeeting,

    #[error("Student not found in the address book")]
    StudentNotFound,

    #[error("Teacher not found in the address book")]
    TeacherNotFound,

    #[error("Meeting not found in the address book")]
    MeetingNotFound,
}

impl ModelError {
    pub fn is_duplicate(&self) -> bool {
        matches!(
            self,
            Self::DuplicateStudent | Self::DuplicateTeacher | Self::DuplicateMeeting
        )
    }

    /// Get error code for global logging system
    pub fn error_code(&self) -> Code {
        if self.is_duplicate() {
            codes::model::DUPLICATE_ENTRY
        } else {
            codes::model::ENTRY_NOT_FOUND
        }
    }
}
