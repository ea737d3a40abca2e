//! Commands acting on the student list

use super::descriptors::EditStudentDescriptor;
use super::error::{CommandError, CommandOutcome};
use super::CommandResult;
use classbook_core::messages;
use classbook_core::model::fields::MedicalHistory;
use classbook_core::model::{Model, Person, PersonPredicate, Student};
use classbook_core::Index;

/// Look up a student in the displayed list
fn displayed_student(model: &dyn Model, index: Index) -> Result<Student, CommandError> {
    index
        .get(&model.filtered_student_list())
        .map(|student| (*student).clone())
        .ok_or_else(CommandError::invalid_student_index)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddStudentCommand {
    pub student: Student,
}

impl AddStudentCommand {
    pub const USAGE: &'static str = "student: Adds a student to the address book. \
        Parameters: n/NAME p/PHONE e/EMAIL a/ADDRESS g/GENDER i/INVOLVEMENT \
        ec/EMERGENCY_CONTACT fc/FORM_CLASS [t/TAG]...\n\
        Example: student n/John Doe p/98765432 e/johnd@example.com a/311, Clementi Ave 2, #02-25 \
        g/M i/Math class ec/91234567 fc/4E1 t/monitor";

    pub fn new(student: Student) -> Self {
        Self { student }
    }

    pub fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        if model.has_student(&self.student) {
            return Err(CommandError::duplicate(messages::MESSAGE_DUPLICATE_STUDENT));
        }

        model.add_student(self.student.clone())?;
        Ok(CommandResult::new(format!(
            "New student added: {}",
            self.student
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditStudentCommand {
    pub index: Index,
    pub descriptor: EditStudentDescriptor,
}

impl EditStudentCommand {
    pub const USAGE: &'static str = "editstudent: Edits the details of the student identified \
        by the index number used in the displayed student list. \
        Existing values will be overwritten by the input values.\n\
        Parameters: INDEX (must be a positive integer) [n/NAME] [p/PHONE] [e/EMAIL] [a/ADDRESS] \
        [g/GENDER] [i/INVOLVEMENT] [ec/EMERGENCY_CONTACT] [fc/FORM_CLASS] [t/TAG]...\n\
        Example: editstudent 1 p/91234567 e/johndoe@example.com";

    pub fn new(index: Index, descriptor: EditStudentDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        let target = displayed_student(model, self.index)?;
        let edited = self.descriptor.apply_to(&target);

        if !target.is_same_person(&edited) && model.has_student(&edited) {
            return Err(CommandError::duplicate(messages::MESSAGE_DUPLICATE_STUDENT));
        }

        model.set_student(&target, edited.clone())?;
        model.update_filtered_student_list(PersonPredicate::ShowAll);
        Ok(CommandResult::new(format!("Edited Student: {}", edited)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteStudentCommand {
    pub index: Index,
}

impl DeleteStudentCommand {
    pub const USAGE: &'static str = "deletestudent: Deletes the student identified by the index \
        number used in the displayed student list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: deletestudent 1";

    pub fn new(index: Index) -> Self {
        Self { index }
    }

    pub fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        let target = displayed_student(model, self.index)?;
        model.delete_student(&target)?;
        Ok(CommandResult::new(format!("Deleted Student: {}", target)))
    }
}

/// Replace the medical history of a displayed student
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MedicalHistoryCommand {
    pub index: Index,
    pub medical_history: MedicalHistory,
}

impl MedicalHistoryCommand {
    pub const USAGE: &'static str = "medical: Sets the medical history of the student identified \
        by the index number used in the displayed student list. \
        An empty history removes the existing one.\n\
        Parameters: INDEX (must be a positive integer) m/[MEDICAL_HISTORY]\n\
        Example: medical 1 m/Asthma";

    pub fn new(index: Index, medical_history: MedicalHistory) -> Self {
        Self {
            index,
            medical_history,
        }
    }

    pub fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        let target = displayed_student(model, self.index)?;
        let edited = target.with_medical_history(self.medical_history.clone());

        model.set_student(&target, edited.clone())?;

        let feedback = if self.medical_history.is_empty() {
            format!("Removed medical history from Student: {}", edited)
        } else {
            format!("Added medical history to Student: {}", edited)
        };
        Ok(CommandResult::new(feedback))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindStudentCommand {
    pub predicate: PersonPredicate,
}

impl FindStudentCommand {
    pub const USAGE: &'static str = "find: Finds all students whose names contain any of \
        the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
        Parameters: KEYWORD [MORE_KEYWORDS]...\n\
        Example: find alice bob charlie";

    pub fn new(predicate: PersonPredicate) -> Self {
        Self { predicate }
    }

    pub fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        model.update_filtered_student_list(self.predicate.clone());
        Ok(CommandResult::new(messages::persons_listed_overview(
            model.filtered_student_list().len(),
        )))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListStudentsCommand;

impl ListStudentsCommand {
    pub const USAGE: &'static str = "list: Lists all students.";
    pub const MESSAGE_SUCCESS: &'static str = "Listed all students";

    pub fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        model.update_filtered_student_list(PersonPredicate::ShowAll);
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}

/// Remove every student; teachers and meetings are kept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearStudentsCommand;

impl ClearStudentsCommand {
    pub const USAGE: &'static str = "clear: Removes all students from the address book.";
    pub const MESSAGE_SUCCESS: &'static str = "All students have been cleared!";

    pub fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        let mut address_book = model.address_book().clone();
        address_book.clear_students();
        model.set_address_book(address_book);
        Ok(CommandResult::new(Self::MESSAGE_SUCCESS))
    }
}
