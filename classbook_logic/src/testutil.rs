//! Fixtures shared by parser and command tests

use classbook_core::config::UserPrefs;
use classbook_core::model::fields::{
    Address, Email, FormClass, Gender, Involvement, Location, MedicalHistory, MeetingDateTime,
    MeetingDescription, Name, Phone, Tag, TagSet,
};
use classbook_core::model::{AddressBook, Meeting, Student, Teacher};
use classbook_core::{Index, ModelManager};
use std::collections::BTreeSet;

pub fn index(one_based: usize) -> Index {
    Index::from_one_based(one_based).unwrap()
}

fn tags(names: &[&str]) -> TagSet {
    let tags: BTreeSet<Tag> = names.iter().map(|name| Tag::new(name).unwrap()).collect();
    TagSet::new(tags).unwrap()
}

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

pub fn alice() -> Student {
    Student {
        email: Email::new("alice@example.com").unwrap(),
        tags: tags(&["friends"]),
        ..student("Alice Pauline")
    }
}

pub fn benson() -> Student {
    Student {
        phone: Phone::new("98765432").unwrap(),
        email: Email::new("johnd@example.com").unwrap(),
        gender: Gender::Male,
        tags: tags(&["owesMoney", "friends"]),
        medical_history: MedicalHistory::new("Asthma"),
        ..student("Benson Meier")
    }
}

pub fn carl() -> Student {
    Student {
        phone: Phone::new("95352563").unwrap(),
        email: Email::new("heinz@example.com").unwrap(),
        gender: Gender::Male,
        form_class: FormClass::new("3A2").unwrap(),
        ..student("Carl Kurz")
    }
}

pub fn daniel() -> Teacher {
    teacher("Daniel Meier")
}

pub fn elle() -> Teacher {
    Teacher {
        phone: Phone::new("94822240").unwrap(),
        email: Email::new("werner@example.com").unwrap(),
        gender: Gender::Female,
        involvement: Involvement::new("Chemistry").unwrap(),
        tags: tags(&["mentor"]),
        ..teacher("Elle Meyer")
    }
}

pub fn typical_model() -> ModelManager {
    let address_book = AddressBook::from_parts(
        vec![alice(), benson(), carl()],
        vec![daniel(), elle()],
        vec![
            meeting("PTM", "2022-10-31 14:30"),
            meeting("Staff briefing", "2022-11-01 08:00"),
        ],
    )
    .unwrap();
    ModelManager::new(address_book, UserPrefs::default())
}
