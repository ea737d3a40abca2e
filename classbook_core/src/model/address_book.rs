use super::error::ModelResult;
use super::meeting::Meeting;
use super::student::Student;
use super::teacher::Teacher;
use super::unique_list::UniqueList;

/// Canonical collections of students, teachers and meetings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    students: UniqueList<Student>,
    teachers: UniqueList<Teacher>,
    meetings: UniqueList<Meeting>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an address book from raw entries, rejecting duplicates
    pub fn from_parts(
        students: Vec<Student>,
        teachers: Vec<Teacher>,
        meetings: Vec<Meeting>,
    ) -> ModelResult<Self> {
        Ok(Self {
            students: UniqueList::from_vec(students)?,
            teachers: UniqueList::from_vec(teachers)?,
            meetings: UniqueList::from_vec(meetings)?,
        })
    }

    // Students

    pub fn students(&self) -> &[Student] {
        self.students.as_slice()
    }

    pub fn has_student(&self, student: &Student) -> bool {
        self.students.contains(student)
    }

    pub fn add_student(&mut self, student: Student) -> ModelResult<()> {
        self.students.add(student)
    }

    pub fn set_student(&mut self, target: &Student, edited: Student) -> ModelResult<()> {
        self.students.set(target, edited)
    }

    pub fn remove_student(&mut self, student: &Student) -> ModelResult<Student> {
        self.students.remove(student)
    }

    pub fn clear_students(&mut self) {
        self.students.clear();
    }

    // Teachers

    pub fn teachers(&self) -> &[Teacher] {
        self.teachers.as_slice()
    }

    pub fn has_teacher(&self, teacher: &Teacher) -> bool {
        self.teachers.contains(teacher)
    }

    pub fn add_teacher(&mut self, teacher: Teacher) -> ModelResult<()> {
        self.teachers.add(teacher)
    }

    pub fn set_teacher(&mut self, target: &Teacher, edited: Teacher) -> ModelResult<()> {
        self.teachers.set(target, edited)
    }

    pub fn remove_teacher(&mut self, teacher: &Teacher) -> ModelResult<Teacher> {
        self.teachers.remove(teacher)
    }

    // Meetings

    pub fn meetings(&self) -> &[Meeting] {
        self.meetings.as_slice()
    }

    pub fn has_meeting(&self, meeting: &Meeting) -> bool {
        self.meetings.contains(meeting)
    }

    pub fn add_meeting(&mut self, meeting: Meeting) -> ModelResult<()> {
        self.meetings.add(meeting)
    }

    pub fn set_meeting(&mut self, target: &Meeting, edited: Meeting) -> ModelResult<()> {
        self.meetings.set(target, edited)
    }

    pub fn remove_meeting(&mut self, meeting: &Meeting) -> ModelResult<Meeting> {
        self.meetings.remove(meeting)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testutil::{meeting, student, teacher, typical_address_book};
    use crate::model::ModelError;
    use assert_matches::assert_matches;

    #[test]
    fn test_from_parts_rejects_duplicates() {
        let result = AddressBook::from_parts(
            vec![student("Alice Pauline"), student("ALICE PAULINE")],
            vec![],
            vec![],
        );
        assert_matches!(result, Err(ModelError::DuplicateStudent));
    }

    #[test]
    fn test_clear_students_keeps_other_collections() {
        let mut book = typical_address_book();
        let teachers = book.teachers().len();
        let meetings = book.meetings().len();

        book.clear_students();

        assert!(book.students().is_empty());
        assert_eq!(book.teachers().len(), teachers);
        assert_eq!(book.meetings().len(), meetings);
    }

    #[test]
    fn test_students_and_teachers_are_separate_namespaces() {
        let mut book = AddressBook::new();
        book.add_student(student("Alice Pauline")).unwrap();
        book.add_teacher(teacher("Alice Pauline")).unwrap();

        assert!(book.has_student(&student("alice pauline")));
        assert!(book.has_teacher(&teacher("alice pauline")));
        assert!(!book.has_meeting(&meeting("PTM", "2022-10-31 14:30")));
    }
}
