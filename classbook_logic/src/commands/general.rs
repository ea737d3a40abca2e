//! Copy, help and exit

use super::descriptors::CopyCommandDescriptor;
use super::error::CommandOutcome;
use super::CommandResult;
use classbook_core::model::{Model, Student};

/// Collect one field of every displayed student
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyCommand {
    pub descriptor: CopyCommandDescriptor,
}

impl CopyCommand {
    pub const USAGE: &'static str = "copy: Copies the given field of every student in the \
        displayed list, separated by spaces.\n\
        Parameters: FIELD (one of name, phone, email, address)\n\
        Example: copy email";

    pub fn new(descriptor: CopyCommandDescriptor) -> Self {
        Self { descriptor }
    }

    /// Space-joined field values in display order; empty for an unknown field
    pub fn copy_content(&self, students: &[&Student]) -> String {
        students
            .iter()
            .filter_map(|student| self.descriptor.field.extract(*student))
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        let content = self.copy_content(&model.filtered_student_list());
        Ok(CommandResult::copied(
            format!("Copied {}: {}", self.descriptor.field, content),
            content,
        ))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HelpCommand;

impl HelpCommand {
    pub const USAGE: &'static str = "help: Shows program usage instructions.\nExample: help";
    pub const SHOWING_HELP_MESSAGE: &'static str = "Showing help.";

    pub fn execute(&self, _model: &mut dyn Model) -> CommandOutcome {
        Ok(CommandResult::help(Self::SHOWING_HELP_MESSAGE))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExitCommand;

impl ExitCommand {
    pub const USAGE: &'static str = "exit: Exits the program.";
    pub const MESSAGE_EXIT_ACKNOWLEDGEMENT: &'static str =
        "Exiting Address Book as requested ...";

    pub fn execute(&self, _model: &mut dyn Model) -> CommandOutcome {
        Ok(CommandResult::exit(Self::MESSAGE_EXIT_ACKNOWLEDGEMENT))
    }
}
