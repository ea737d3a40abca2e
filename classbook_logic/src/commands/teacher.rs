//! Commands acting on the teacher list

use super::descriptors::EditTeacherDescriptor;
use super::error::{CommandError, CommandOutcome};
use super::CommandResult;
use classbook_core::messages;
use classbook_core::model::{Model, Person, PersonPredicate, Teacher};
use classbook_core::Index;

fn displayed_teacher(model: &dyn Model, index: Index) -> Result<Teacher, CommandError> {
    index
        .get(&model.filtered_teacher_list())
        .map(|teacher| (*teacher).clone())
        .ok_or_else(CommandError::invalid_teacher_index)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddTeacherCommand {
    pub teacher: Teacher,
}

impl AddTeacherCommand {
    pub const USAGE: &'static str = "teacher: Adds a teacher to the address book. \
        Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS g/GENDER i/INVOLVEMENT [t/TAG]...\n\
        Example: teacher n/Mary Tan p/98765432 e/marytan@example.com a/311, Clementi Ave 2, #02-25 \
        g/F i/Form teacher t/mentor";

    pub fn new(teacher: Teacher) -> Self {
        Self { teacher }
    }

    pub fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        if model.has_teacher(&self.teacher) {
            return Err(CommandError::duplicate(messages::MESSAGE_DUPLICATE_TEACHER));
        }

        model.add_teacher(self.teacher.clone())?;
        Ok(CommandResult::new(format!(
            "New teacher added: {}",
            self.teacher
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditTeacherCommand {
    pub index: Index,
    pub descriptor: EditTeacherDescriptor,
}

impl EditTeacherCommand {
    pub const USAGE: &'static str = "editteacher: Edits the details of the teacher identified \
        by the index number used in the displayed teacher list. \
        Existing values will be overwritten by the input values.\n\
        Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] \
        [g/GENDER] [i/INVOLVEMENT] [t/TAG]...\n\
        Example: editteacher 1 p/91234567 i/Chemistry";

    pub fn new(index: Index, descriptor: EditTeacherDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        let target = displayed_teacher(model, self.index)?;
        let edited = self.descriptor.apply_to(&target);

        if !target.is_same_person(&edited) && model.has_teacher(&edited) {
            return Err(CommandError::duplicate(messages::MESSAGE_DUPLICATE_TEACHER));
        }

        model.set_teacher(&target, edited.clone())?;
        model.update_filtered_teacher_list(PersonPredicate::ShowAll);
        Ok(CommandResult::new(format!("Edited Teacher: {}", edited)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTeacherCommand {
    pub index: Index,
}

impl DeleteTeacherCommand {
    pub const USAGE: &'static str = "deleteteacher: Deletes the teacher identified by the index \
        number used in the displayed teacher list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: deleteteacher 1";

    pub fn new(index: Index) -> Self {
        Self { index }
    }

    pub fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        let target = displayed_teacher(model, self.index)?;
        model.delete_teacher(&target)?;
        Ok(CommandResult::new(format!("Deleted Teacher: {}", target)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindTeacherCommand {
    pub predicate: PersonPredicate,
}

impl FindTeacherCommand {
    pub const USAGE: &'static str = "findteacher: Finds all teachers whose names contain any of \
        the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
        Parameters: KEYWORD [MORE_KEYWORDS]...\n\
        Example: findteacher mary tan";

    pub fn new(predicate: PersonPredicate) -> Self {
        Self { predicate }
    }

    pub fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        model.update_filtered_teacher_list(self.predicate.clone());
        Ok(CommandResult::new(messages::persons_listed_overview(
            model.filtered_teacher_list().len(),
        )))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListTeachersCommand;

impl ListTeachersCommand {
    pub const USAGE: &'static str = "listteacher: Lists all teachers.";
    pub const MESSAGE_SUCCESS: &'static str = "Listed all teachers";

    pub fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        model.update_filtered_teacher_list(PersonPredicate::ShowAll);
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}
