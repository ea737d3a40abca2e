//! In-memory model of the classbook
//!
//! [`AddressBook`] holds the canonical collections. [`ModelManager`] wraps it
//! together with user preferences and the filters that decide which students
//! and teachers are currently displayed. Commands only ever see the model
//! through the [`Model`] trait, and address entries by their position in the
//! displayed lists.

pub mod address_book;
pub mod error;
pub mod fields;
pub mod meeting;
pub mod person;
pub mod predicate;
pub mod student;
pub mod teacher;
pub mod unique_list;

#[cfg(test)]
pub(crate) mod testutil;

pub use address_book::AddressBook;
pub use error::{ModelError, ModelResult};
pub use meeting::Meeting;
pub use person::Person;
pub use predicate::PersonPredicate;
pub use student::Student;
pub use teacher::Teacher;

use crate::config::UserPrefs;
use crate::logging::codes;
use crate::{log_debug, log_success};

/// Everything a command may read or change
pub trait Model {
    fn user_prefs(&self) -> &UserPrefs;
    fn set_user_prefs(&mut self, user_prefs: UserPrefs);

    fn address_book(&self) -> &AddressBook;
    fn set_address_book(&mut self, address_book: AddressBook);

    fn has_student(&self, student: &Student) -> bool;
    fn add_student(&mut self, student: Student) -> ModelResult<()>;
    fn set_student(&mut self, target: &Student, edited: Student) -> ModelResult<()>;
    fn delete_student(&mut self, student: &Student) -> ModelResult<()>;

    fn has_teacher(&self, teacher: &Teacher) -> bool;
    fn add_teacher(&mut self, teacher: Teacher) -> ModelResult<()>;
    fn set_teacher(&mut self, target: &Teacher, edited: Teacher) -> ModelResult<()>;
    fn delete_teacher(&mut self, teacher: &Teacher) -> ModelResult<()>;

    fn has_meeting(&self, meeting: &Meeting) -> bool;
    fn add_meeting(&mut self, meeting: Meeting) -> ModelResult<()>;
    fn set_meeting(&mut self, target: &Meeting, edited: Meeting) -> ModelResult<()>;
    fn delete_meeting(&mut self, meeting: &Meeting) -> ModelResult<()>;

    /// Students passing the current student filter, in address book order
    fn filtered_student_list(&self) -> Vec<&Student>;
    fn update_filtered_student_list(&mut self, predicate: PersonPredicate);

    /// Teachers passing the current teacher filter, in address book order
    fn filtered_teacher_list(&self) -> Vec<&Teacher>;
    fn update_filtered_teacher_list(&mut self, predicate: PersonPredicate);

    /// Meetings are never filtered
    fn meeting_list(&self) -> &[Meeting];
}

#[derive(Debug, Clone, Default)]
pub struct ModelManager {
    address_book: AddressBook,
    user_prefs: UserPrefs,
    student_filter: PersonPredicate,
    teacher_filter: PersonPredicate,
}

impl ModelManager {
    pub fn new(address_book: AddressBook, user_prefs: UserPrefs) -> Self {
        log_debug!("Initializing model",
            "students" => address_book.students().len(),
            "teachers" => address_book.teachers().len(),
            "meetings" => address_book.meetings().len()
        );

        Self {
            address_book,
            user_prefs,
            student_filter: PersonPredicate::ShowAll,
            teacher_filter: PersonPredicate::ShowAll,
        }
    }

    pub fn student_filter(&self) -> &PersonPredicate {
        &self.student_filter
    }

    pub fn teacher_filter(&self) -> &PersonPredicate {
        &self.teacher_filter
    }
}

impl Model for ModelManager {
    fn user_prefs(&self) -> &UserPrefs {
        &self.user_prefs
    }

    fn set_user_prefs(&mut self, user_prefs: UserPrefs) {
        self.user_prefs = user_prefs;
    }

    fn address_book(&self) -> &AddressBook {
        &self.address_book
    }

    fn set_address_book(&mut self, address_book: AddressBook) {
        self.address_book = address_book;
    }

    fn has_student(&self, student: &Student) -> bool {
        self.address_book.has_student(student)
    }

    fn add_student(&mut self, student: Student) -> ModelResult<()> {
        let name = student.name.to_string();
        self.address_book.add_student(student)?;
        self.student_filter = PersonPredicate::ShowAll;
        log_success!(codes::success::MODEL_UPDATED, "Student added", "name" => name);
        Ok(())
    }

    fn set_student(&mut self, target: &Student, edited: Student) -> ModelResult<()> {
        self.address_book.set_student(target, edited)
    }

    fn delete_student(&mut self, student: &Student) -> ModelResult<()> {
        self.address_book.remove_student(student)?;
        log_success!(codes::success::MODEL_UPDATED, "Student removed", "name" => student.name);
        Ok(())
    }

    fn has_teacher(&self, teacher: &Teacher) -> bool {
        self.address_book.has_teacher(teacher)
    }

    fn add_teacher(&mut self, teacher: Teacher) -> ModelResult<()> {
        let name = teacher.name.to_string();
        self.address_book.add_teacher(teacher)?;
        self.teacher_filter = PersonPredicate::ShowAll;
        log_success!(codes::success::MODEL_UPDATED, "Teacher added", "name" => name);
        Ok(())
    }

    fn set_teacher(&mut self, target: &Teacher, edited: Teacher) -> ModelResult<()> {
        self.address_book.set_teacher(target, edited)
    }

    fn delete_teacher(&mut self, teacher: &Teacher) -> ModelResult<()> {
        self.address_book.remove_teacher(teacher)?;
        log_success!(codes::success::MODEL_UPDATED, "Teacher removed", "name" => teacher.name);
        Ok(())
    }

    fn has_meeting(&self, meeting: &Meeting) -> bool {
        self.address_book.has_meeting(meeting)
    }

    fn add_meeting(&mut self, meeting: Meeting) -> ModelResult<()> {
        self.address_book.add_meeting(meeting)
    }

    fn set_meeting(&mut self, target: &Meeting, edited: Meeting) -> ModelResult<()> {
        self.address_book.set_meeting(target, edited)
    }

    fn delete_meeting(&mut self, meeting: &Meeting) -> ModelResult<()> {
        self.address_book.remove_meeting(meeting).map(|_| ())
    }

    fn filtered_student_list(&self) -> Vec<&Student> {
        self.address_book
            .students()
            .iter()
            .filter(|student| self.student_filter.test(*student))
            .collect()
    }

    fn update_filtered_student_list(&mut self, predicate: PersonPredicate) {
        log_debug!("Student filter updated", "filter" => format!("{:?}", predicate));
        self.student_filter = predicate;
    }

    fn filtered_teacher_list(&self) -> Vec<&Teacher> {
        self.address_book
            .teachers()
            .iter()
            .filter(|teacher| self.teacher_filter.test(*teacher))
            .collect()
    }

    fn update_filtered_teacher_list(&mut self, predicate: PersonPredicate) {
        log_debug!("Teacher filter updated", "filter" => format!("{:?}", predicate));
        self.teacher_filter = predicate;
    }

    fn meeting_list(&self) -> &[Meeting] {
        self.address_book.meetings()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testutil::{student, typical_address_book};
    use assert_matches::assert_matches;

    fn typical_model() -> ModelManager {
        ModelManager::new(typical_address_book(), UserPrefs::default())
    }

    #[test]
    fn test_filtered_list_follows_predicate() {
        let mut model = typical_model();
        let total = model.filtered_student_list().len();

        model.update_filtered_student_list(PersonPredicate::name_contains_keywords(["Alice"]));
        let shown = model.filtered_student_list();
        assert_eq!(shown.len(), 1);
        assert_eq!(shown[0].name.as_str(), "Alice Pauline");

        model.update_filtered_student_list(PersonPredicate::ShowAll);
        assert_eq!(model.filtered_student_list().len(), total);
    }

    #[test]
    fn test_add_student_resets_filter() {
        let mut model = typical_model();
        model.update_filtered_student_list(PersonPredicate::name_contains_keywords(["Alice"]));

        model.add_student(student("Hoon Meier")).unwrap();

        assert_eq!(model.student_filter(), &PersonPredicate::ShowAll);
        assert!(model.has_student(&student("hoon meier")));
    }

    #[test]
    fn test_duplicate_add_leaves_model_unchanged() {
        let mut model = typical_model();
        let before = model.address_book().clone();

        assert_matches!(
            model.add_student(student("Alice Pauline")),
            Err(ModelError::DuplicateStudent)
        );
        assert_eq!(model.address_book(), &before);
    }

    #[test]
    fn test_delete_student() {
        let mut model = typical_model();
        let alice = model.filtered_student_list()[0].clone();

        model.delete_student(&alice).unwrap();

        assert!(!model.has_student(&alice));
        assert_matches!(model.delete_student(&alice), Err(ModelError::StudentNotFound));
    }

    #[test]
    fn test_meeting_list_is_unfiltered() {
        let mut model = typical_model();
        let meetings = model.meeting_list().len();
        model.update_filtered_student_list(PersonPredicate::name_contains_keywords(["nobody"]));
        model.update_filtered_teacher_list(PersonPredicate::name_contains_keywords(["nobody"]));

        assert!(model.filtered_student_list().is_empty());
        assert!(model.filtered_teacher_list().is_empty());
        assert_eq!(model.meeting_list().len(), meetings);
    }
}
