use super::{is_ascii_alphanumeric_word, FieldError, FieldResult, MAX_TAGS_PER_ENTITY};
use std::collections::BTreeSet;
use std::fmt;

/// Single-word alphanumeric label
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    pub fn new(value: &str) -> FieldResult<Self> {
        if Self::is_valid(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(FieldError::InvalidTag)
        }
    }

    pub fn is_valid(value: &str) -> bool {
        is_ascii_alphanumeric_word(value)
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.0)
    }
}

/// Ordered, duplicate-free set of tags
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TagSet(BTreeSet<Tag>);

impl TagSet {
    pub fn new(tags: BTreeSet<Tag>) -> FieldResult<Self> {
        if tags.len() > MAX_TAGS_PER_ENTITY {
            return Err(FieldError::TooManyTags {
                max: MAX_TAGS_PER_ENTITY,
            });
        }
        Ok(Self(tags))
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Tag> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, tag: &Tag) -> bool {
        self.0.contains(tag)
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in &self.0 {
            write!(f, "{}", tag)?;
        }
        Ok(())
    }
}
