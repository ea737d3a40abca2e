use super::fields::{Address, Email, Gender, Involvement, Name, Phone, TagSet};

/// Read view shared by students and teachers
pub trait Person {
    fn name(&self) -> &Name;
    fn phone(&self) -> &Phone;
    fn email(&self) -> &Email;
    fn address(&self) -> &Address;
    fn gender(&self) -> Gender;
    fn involvement(&self) -> &Involvement;
    fn tags(&self) -> &TagSet;

    /// Two persons are the same person when their names match ignoring case
    fn is_same_person(&self, other: &Self) -> bool
    where
        Self: Sized,
    {
        self.name().matches_ignore_case(other.name())
    }
}
