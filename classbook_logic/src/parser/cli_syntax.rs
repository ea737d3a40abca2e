//! Argument prefixes of the command language

use std::fmt;

/// Marker that introduces an argument value, such as `n/`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(prefix: &'static str) -> Self {
        Self(prefix)
    }

    pub const fn as_str(&self) -> &'static str {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

// Person fields
pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");
pub const PREFIX_ADDRESS: Prefix = Prefix::new("a/");
pub const PREFIX_GENDER: Prefix = Prefix::new("g/");
pub const PREFIX_INVOLVEMENT: Prefix = Prefix::new("i/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");

// Student-only fields
pub const PREFIX_EMERGENCY_CONTACT: Prefix = Prefix::new("ec/");
pub const PREFIX_FORM_CLASS: Prefix = Prefix::new("fc/");
pub const PREFIX_MEDICAL_HISTORY: Prefix = Prefix::new("m/");

// Meeting fields
pub const PREFIX_DESCRIPTION: Prefix = Prefix::new("d/");
pub const PREFIX_DATE_TIME: Prefix = Prefix::new("dt/");
pub const PREFIX_LOCATION: Prefix = Prefix::new("l/");

pub const ALL_PREFIXES: [Prefix; 13] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_GENDER,
    PREFIX_INVOLVEMENT,
    PREFIX_TAG,
    PREFIX_EMERGENCY_CONTACT,
    PREFIX_FORM_CLASS,
    PREFIX_MEDICAL_HISTORY,
    PREFIX_DESCRIPTION,
    PREFIX_DATE_TIME,
    PREFIX_LOCATION,
];
