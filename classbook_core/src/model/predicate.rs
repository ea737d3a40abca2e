//! Display filters for the student and teacher lists

use super::person::Person;

/// Which persons a displayed list shows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PersonPredicate {
    #[default]
    ShowAll,
    /// Name contains any keyword as a whole word, ignoring case
    NameContainsKeywords(Vec<String>),
}

impl PersonPredicate {
    pub fn name_contains_keywords<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::NameContainsKeywords(keywords.into_iter().map(Into::into).collect())
    }

    pub fn test<P: Person>(&self, person: &P) -> bool {
        match self {
            Self::ShowAll => true,
            Self::NameContainsKeywords(keywords) => keywords.iter().any(|keyword| {
                person
                    .name()
                    .words()
                    .any(|word| word.eq_ignore_ascii_case(keyword))
            }),
        }
    }
}
