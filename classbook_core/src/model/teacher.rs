use super::fields::{Address, Email, Gender, Involvement, Name, Phone, TagSet};
use super::person::Person;
use std::fmt;

/// A teacher record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teacher {
    pub name: Name,
    pub phone: Phone,
    pub email: Email,
    pub address: Address,
    pub gender: Gender,
    pub involvement: Involvement,
    pub tags: TagSet,
}

impl Person for Teacher {
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

impl fmt::Display for Teacher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Phone: {}; Email: {}; Address: {}; Gender: {}; Involvement: {}",
            self.name, self.phone, self.email, self.address, self.gender, self.involvement,
        )?;
        if !self.tags.is_empty() {
            write!(f, "; Tags: {}", self.tags)?;
        }
        Ok(())
    }
}
