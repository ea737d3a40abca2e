use super::fields::{
    Address, Email, FormClass, Gender, Involvement, MedicalHistory, Name, Phone, TagSet,
};
use super::person::Person;
use std::fmt;

/// A student record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    pub involvement: Involvement,
    pub tags: TagSet,
    pub emergency_contact: Phone,
    pub form_class: FormClass,
    pub gender: Gender,
    pub medical_history: MedicalHistory,
}

impl Student {
    /// Copy of this student with only the medical history replaced
    pub fn with_medical_history(&self, medical_history: MedicalHistory) -> Self {
        Self {
            medical_history,
            ..self.clone()
        }
    }
}

impl Person for Student {
    fn name(&self) -> &Name {
        &self.name
    }

    fn phone(&self) -> &Phone {
        &self.phone
    }

    fn email(&self) -> &Email {
        &self.email
    }

    fn address(&self) -> &Address {
        &self.address
    }

    fn gender(&self) -> Gender {
        self.gender
    }

    fn involvement(&self) -> &Involvement {
        &self.involvement
    }

    fn tags(&self) -> &TagSet {
        &self.tags
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Gender: {}; Involvement: {}; \
             Form Class: {}; Emergency Contact: {}",
            self.name,
            self.phone,
            self.email,
            self.address,
            self.gender,
            self.involvement,
            self.form_class,
            self.emergency_contact,
        )?;
        if !self.medical_history.is_empty() {
            write!(f, "; Medical History: {}", self.medical_history)?;
        }
        if !self.tags.is_empty() {
            write!(f, "; Tags: {}", self.tags)?;
        }
        Ok(())
    }
}
