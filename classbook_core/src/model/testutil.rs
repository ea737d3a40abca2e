//! Fixtures shared by model tests

use super::fields::{
    Address, Email, FormClass, Gender, Involvement, Location, MedicalHistory, MeetingDateTime,
    MeetingDescription, Name, Phone, TagSet,
};
use super::{AddressBook, Meeting, Student, Teacher};

pub fn student(name: &str) -> Student {
    Student {
        name: Name::new(name).unwrap(),
        phone: Phone::new("94351253").unwrap(),
        email: Email::new("student@example.com").unwrap(),
        address: Address::new("123, Jurong West Ave 6, #08-111").unwrap(),
        involvement: Involvement::new("Math class").unwrap(),
        tags: TagSet::empty(),
        emergency_contact: Phone::new("91234567").unwrap(),
        form_class: FormClass::new("4E1").unwrap(),
        gender: Gender::Female,
        medical_history: MedicalHistory::none(),
    }
}

pub fn teacher(name: &str) -> Teacher {
    Teacher {
        name: Name::new(name).unwrap(),
        phone: Phone::new("98765432").unwrap(),
        email: Email::new("teacher@example.com").unwrap(),
        address: Address::new("311, Clementi Ave 2, #02-25").unwrap(),
        gender: Gender::Male,
        involvement: Involvement::new("Form teacher").unwrap(),
        tags: TagSet::empty(),
    }
}

pub fn meeting(description: &str, date_time: &str) -> Meeting {
    Meeting {
        description: MeetingDescription::new(description).unwrap(),
        date_time: MeetingDateTime::new(date_time).unwrap(),
        location: Location::new("Staff room").unwrap(),
    }
}

pub fn typical_address_book() -> AddressBook {
    AddressBook::from_parts(
        vec![
            student("Alice Pauline"),
            student("Benson Meier"),
            student("Carl Kurz"),
        ],
        vec![teacher("Daniel Meier"), teacher("Elle Meyer")],
        vec![meeting("PTM", "2022-10-31 14:30")],
    )
    .unwrap()
}
