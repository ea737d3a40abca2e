//! Partial field sets used by the edit and copy commands

use classbook_core::model::fields::{
    Address, Email, FormClass, Gender, Involvement, Name, Phone, TagSet,
};
use classbook_core::model::{Person, Student, Teacher};
use std::fmt;

/// Fields to change on a student; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditStudentDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub gender: Option<Gender>,
    pub involvement: Option<Involvement>,
    pub emergency_contact: Option<Phone>,
    pub form_class: Option<FormClass>,
    pub tags: Option<TagSet>,
}

impl EditStudentDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.gender.is_some()
            || self.involvement.is_some()
            || self.emergency_contact.is_some()
            || self.form_class.is_some()
            || self.tags.is_some()
    }

    /// New student with the edited fields applied; medical history is kept
    pub fn apply_to(&self, student: &Student) -> Student {
        Student {
            name: self.name.clone().unwrap_or_else(|| student.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| student.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| student.email.clone()),
            address: self.address.clone().unwrap_or_else(|| student.address.clone()),
            involvement: self
                .involvement
                .clone()
                .unwrap_or_else(|| student.involvement.clone()),
            tags: self.tags.clone().unwrap_or_else(|| student.tags.clone()),
            emergency_contact: self
                .emergency_contact
                .clone()
                .unwrap_or_else(|| student.emergency_contact.clone()),
            form_class: self
                .form_class
                .clone()
                .unwrap_or_else(|| student.form_class.clone()),
            gender: self.gender.unwrap_or(student.gender),
            medical_history: student.medical_history.clone(),
        }
    }
}

/// Fields to change on a teacher; `None` keeps the current value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditTeacherDescriptor {
    pub name: Option<Name>,
    pub phone: Option<Phone>,
    pub email: Option<Email>,
    pub address: Option<Address>,
    pub gender: Option<Gender>,
    pub involvement: Option<Involvement>,
    pub tags: Option<TagSet>,
}

impl EditTeacherDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.name.is_some()
            || self.phone.is_some()
            || self.email.is_some()
            || self.address.is_some()
            || self.gender.is_some()
            || self.involvement.is_some()
            || self.tags.is_some()
    }

    pub fn apply_to(&self, teacher: &Teacher) -> Teacher {
        Teacher {
            name: self.name.clone().unwrap_or_else(|| teacher.name.clone()),
            phone: self.phone.clone().unwrap_or_else(|| teacher.phone.clone()),
            email: self.email.clone().unwrap_or_else(|| teacher.email.clone()),
            address: self.address.clone().unwrap_or_else(|| teacher.address.clone()),
            gender: self.gender.unwrap_or(teacher.gender),
            involvement: self
                .involvement
                .clone()
                .unwrap_or_else(|| teacher.involvement.clone()),
            tags: self.tags.clone().unwrap_or_else(|| teacher.tags.clone()),
        }
    }
}

/// Person field a copy command collects
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyField {
    Name,
    Phone,
    Email,
    Address,
    /// Accepted at parse time; copies nothing
    Unrecognized(String),
}

impl CopyField {
    pub fn from_name(field: &str) -> Self {
        match field {
            "name" => Self::Name,
            "phone" => Self::Phone,
            "email" => Self::Email,
            "address" => Self::Address,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Name => "name",
            Self::Phone => "phone",
            Self::Email => "email",
            Self::Address => "address",
            Self::Unrecognized(field) => field,
        }
    }

    /// Text of this field for one person, `None` when unrecognized
    pub fn extract<P: Person>(&self, person: &P) -> Option<String> {
        match self {
            Self::Name => Some(person.name().to_string()),
            Self::Phone => Some(person.phone().to_string()),
            Self::Email => Some(person.email().to_string()),
            Self::Address => Some(person.address().to_string()),
            Self::Unrecognized(_) => None,
        }
    }
}

impl fmt::Display for CopyField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyCommandDescriptor {
    pub field: CopyField,
}

impl CopyCommandDescriptor {
    pub fn new(field: &str) -> Self {
        Self {
            field: CopyField::from_name(field),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{alice, benson, elle};

    #[test]
    fn test_empty_descriptor_edits_nothing() {
        let descriptor = EditStudentDescriptor::default();
        assert!(!descriptor.is_any_field_edited());
        assert_eq!(descriptor.apply_to(&alice()), alice());
    }

    #[test]
    fn test_apply_keeps_unedited_fields() {
        let descriptor = EditStudentDescriptor {
            phone: Some(Phone::new("99999999").unwrap()),
            ..Default::default()
        };
        let edited = descriptor.apply_to(&benson());

        assert_eq!(
            edited,
            Student {
                phone: Phone::new("99999999").unwrap(),
                ..benson()
            }
        );
    }

    #[test]
    fn test_teacher_apply_keeps_unedited_fields() {
        let descriptor = EditTeacherDescriptor {
            involvement: Some(Involvement::new("Physics").unwrap()),
            ..Default::default()
        };
        let edited = descriptor.apply_to(&elle());

        assert_eq!(
            edited,
            Teacher {
                involvement: Involvement::new("Physics").unwrap(),
                ..elle()
            }
        );
    }

    #[test]
    fn test_copy_field_names() {
        assert_eq!(CopyField::from_name("phone"), CopyField::Phone);
        assert_eq!(
            CopyField::from_name("Phone"),
            CopyField::Unrecognized("Phone".to_string())
        );
        assert_eq!(CopyField::from_name("fish").extract(&alice()), None);
        assert_eq!(
            CopyField::Email.extract(&alice()).as_deref(),
            Some("alice@example.com")
        );
    }
}
