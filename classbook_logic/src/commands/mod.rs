//! Typed commands and their execution
//!
//! A [`Command`] is fully validated when it is built; executing it only checks
//! what depends on the model, such as whether a displayed index exists. A
//! failing command leaves the model untouched.

pub mod descriptors;
pub mod error;
pub mod general;
pub mod meeting;
pub mod student;
pub mod teacher;

pub use descriptors::{
    CopyCommandDescriptor, CopyField, EditStudentDescriptor, EditTeacherDescriptor,
};
pub use error::{CommandError, CommandOutcome};
pub use general::{CopyCommand, ExitCommand, HelpCommand};
pub use meeting::{AddMeetingCommand, DeleteMeetingCommand};
pub use student::{
    AddStudentCommand, ClearStudentsCommand, DeleteStudentCommand, EditStudentCommand,
    FindStudentCommand, ListStudentsCommand, MedicalHistoryCommand,
};
pub use teacher::{
    AddTeacherCommand, DeleteTeacherCommand, EditTeacherCommand, FindTeacherCommand,
    ListTeachersCommand,
};

use crate::parser::CommandWord;
use classbook_core::model::Model;

/// Outcome of a successful command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    /// Message shown to the user
    pub feedback: String,
    /// The front end should show help
    pub show_help: bool,
    /// The front end should terminate
    pub exit: bool,
    /// Text placed on the clipboard by a copy command
    pub copied: Option<String>,
}

impl CommandResult {
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            show_help: false,
            exit: false,
            copied: None,
        }
    }

    pub fn help(feedback: impl Into<String>) -> Self {
        Self {
            show_help: true,
            ..Self::new(feedback)
        }
    }

    pub fn exit(feedback: impl Into<String>) -> Self {
        Self {
            exit: true,
            ..Self::new(feedback)
        }
    }

    pub fn copied(feedback: impl Into<String>, content: String) -> Self {
        Self {
            copied: Some(content),
            ..Self::new(feedback)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddStudent(AddStudentCommand),
    AddTeacher(AddTeacherCommand),
    AddMeeting(AddMeetingCommand),
    EditStudent(EditStudentCommand),
    EditTeacher(EditTeacherCommand),
    DeleteStudent(DeleteStudentCommand),
    DeleteTeacher(DeleteTeacherCommand),
    DeleteMeeting(DeleteMeetingCommand),
    MedicalHistory(MedicalHistoryCommand),
    FindStudents(FindStudentCommand),
    FindTeachers(FindTeacherCommand),
    ListStudents(ListStudentsCommand),
    ListTeachers(ListTeachersCommand),
    ClearStudents(ClearStudentsCommand),
    Copy(CopyCommand),
    Help(HelpCommand),
    Exit(ExitCommand),
}

impl Command {
    pub fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        match self {
            Self::AddStudent(command) => command.execute(model),
            Self::AddTeacher(command) => command.execute(model),
            Self::AddMeeting(command) => command.execute(model),
            Self::EditStudent(command) => command.execute(model),
            Self::EditTeacher(command) => command.execute(model),
            Self::DeleteStudent(command) => command.execute(model),
            Self::DeleteTeacher(command) => command.execute(model),
            Self::DeleteMeeting(command) => command.execute(model),
            Self::MedicalHistory(command) => command.execute(model),
            Self::FindStudents(command) => command.execute(model),
            Self::FindTeachers(command) => command.execute(model),
            Self::ListStudents(command) => command.execute(model),
            Self::ListTeachers(command) => command.execute(model),
            Self::ClearStudents(command) => command.execute(model),
            Self::Copy(command) => command.execute(model),
            Self::Help(command) => command.execute(model),
            Self::Exit(command) => command.execute(model),
        }
    }

    /// Command word this command is invoked by
    pub fn word(&self) -> CommandWord {
        match self {
            Self::AddStudent(_) => CommandWord::Student,
            Self::AddTeacher(_) => CommandWord::Teacher,
            Self::AddMeeting(_) => CommandWord::Meeting,
            Self::EditStudent(_) => CommandWord::EditStudent,
            Self::EditTeacher(_) => CommandWord::EditTeacher,
            Self::DeleteStudent(_) => CommandWord::DeleteStudent,
            Self::DeleteTeacher(_) => CommandWord::DeleteTeacher,
            Self::DeleteMeeting(_) => CommandWord::Delete,
            Self::MedicalHistory(_) => CommandWord::Medical,
            Self::FindStudents(_) => CommandWord::Find,
            Self::FindTeachers(_) => CommandWord::FindTeacher,
            Self::ListStudents(_) => CommandWord::List,
            Self::ListTeachers(_) => CommandWord::ListTeacher,
            Self::ClearStudents(_) => CommandWord::Clear,
            Self::Copy(_) => CommandWord::Copy,
            Self::Help(_) => CommandWord::Help,
            Self::Exit(_) => CommandWord::Exit,
        }
    }
}

/// Usage text of every command, one paragraph each
pub fn help_text() -> String {
    CommandWord::ALL
        .iter()
        .map(|word| word.usage())
        .collect::<Vec<_>>()
        .join("\n\n")
}
