//! Ordered collection that refuses two entries with the same identity

use super::error::{ModelError, ModelResult};
use super::meeting::Meeting;
use super::person::Person;
use super::student::Student;
use super::teacher::Teacher;

/// Identity rule an entity must satisfy to live in a [`UniqueList`]
pub trait Identity: Clone + PartialEq {
    fn is_same_entity(&self, other: &Self) -> bool;
    fn duplicate_error() -> ModelError;
    fn not_found_error() -> ModelError;
}

impl Identity for Student {
    fn is_same_entity(&self, other: &Self) -> bool {
        self.is_same_person(other)
    }

    fn duplicate_error() -> ModelError {
        ModelError::DuplicateStudent
    }

    fn not_found_error() -> ModelError {
        ModelError::StudentNotFound
    }
}

impl Identity for Teacher {
    fn is_same_entity(&self, other: &Self) -> bool {
        self.is_same_person(other)
    }

    fn duplicate_error() -> ModelError {
        ModelError::DuplicateTeacher
    }

    fn not_found_error() -> ModelError {
        ModelError::TeacherNotFound
    }
}

impl Identity for Meeting {
    fn is_same_entity(&self, other: &Self) -> bool {
        self.is_same_meeting(other)
    }

    fn duplicate_error() -> ModelError {
        ModelError::DuplicateMeeting
    }

    fn not_found_error() -> ModelError {
        ModelError::MeetingNotFound
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UniqueList<T> {
    items: Vec<T>,
}

impl<T> Default for UniqueList<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: Identity> UniqueList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from entries, rejecting any identity clash
    pub fn from_vec(items: Vec<T>) -> ModelResult<Self> {
        let mut list = Self::new();
        for item in items {
            list.add(item)?;
        }
        Ok(list)
    }

    pub fn contains(&self, item: &T) -> bool {
        self.items.iter().any(|existing| existing.is_same_entity(item))
    }

    pub fn add(&mut self, item: T) -> ModelResult<()> {
        if self.contains(&item) {
            return Err(T::duplicate_error());
        }
        self.items.push(item);
        Ok(())
    }

    /// Replace `target` in place; `edited` may keep the target's identity
    pub fn set(&mut self, target: &T, edited: T) -> ModelResult<()> {
        let position = self
            .items
            .iter()
            .position(|existing| existing == target)
            .ok_or_else(T::not_found_error)?;

        if !target.is_same_entity(&edited) && self.contains(&edited) {
            return Err(T::duplicate_error());
        }

        self.items[position] = edited;
        Ok(())
    }

    pub fn remove(&mut self, item: &T) -> ModelResult<T> {
        let position = self
            .items
            .iter()
            .position(|existing| existing == item)
            .ok_or_else(T::not_found_error)?;
        Ok(self.items.remove(position))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::testutil::{meeting, student};
    use assert_matches::assert_matches;

    #[test]
    fn test_add_rejects_same_identity() {
        let mut list = UniqueList::new();
        list.add(student("Alice Pauline")).unwrap();

        assert_matches!(
            list.add(student("alice pauline")),
            Err(ModelError::DuplicateStudent)
        );
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_set_allows_keeping_identity() {
        let alice = student("Alice Pauline");
        let mut list = UniqueList::from_vec(vec![alice.clone(), student("Benson Meier")]).unwrap();

        let renamed = Student {
            name: "ALICE PAULINE".parse().unwrap(),
            ..alice.clone()
        };
        list.set(&alice, renamed.clone()).unwrap();
        assert_eq!(list.as_slice()[0], renamed);
    }

    #[test]
    fn test_set_rejects_clash_with_other_entry() {
        let alice = student("Alice Pauline");
        let mut list = UniqueList::from_vec(vec![alice.clone(), student("Benson Meier")]).unwrap();

        assert_matches!(
            list.set(&alice, student("benson meier")),
            Err(ModelError::DuplicateStudent)
        );
        assert_eq!(list.as_slice()[0], alice);
    }

    #[test]
    fn test_remove_missing_entry() {
        let mut list: UniqueList<Meeting> = UniqueList::new();
        assert_matches!(
            list.remove(&meeting("PTM", "2022-10-31 14:30")),
            Err(ModelError::MeetingNotFound)
        );
    }

    #[test]
    fn test_meeting_identity_uses_description_and_time() {
        let mut list = UniqueList::new();
        list.add(meeting("PTM", "2022-10-31 14:30")).unwrap();
        list.add(meeting("PTM", "2022-11-01 14:30")).unwrap();

        assert_matches!(
            list.add(meeting("PTM", "2022-10-31 14:30")),
            Err(ModelError::DuplicateMeeting)
        );
    }
}
