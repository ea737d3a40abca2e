//! Field parsers shared by every command parser
//!
//! Each function trims its input before validating it.

use super::error::{ParseError, ParseResult};
use classbook_core::model::fields::{
    Address, Email, FormClass, Gender, Involvement, Location, MedicalHistory, MeetingDateTime,
    MeetingDescription, Name, Phone, Tag, TagSet,
};
use classbook_core::config::constants::compile_time::command::MAX_FIND_KEYWORDS;
use classbook_core::Index;
use std::collections::BTreeSet;

/// Parse a one-based index; rejects zero, signs and overflow
pub fn parse_index(one_based_index: &str) -> ParseResult<Index> {
    let trimmed = one_based_index.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidIndex);
    }
    trimmed
        .parse::<usize>()
        .ok()
        .and_then(Index::from_one_based)
        .ok_or(ParseError::InvalidIndex)
}

pub fn parse_name(name: &str) -> ParseResult<Name> {
    Ok(Name::new(name.trim())?)
}

pub fn parse_phone(phone: &str) -> ParseResult<Phone> {
    Ok(Phone::new(phone.trim())?)
}

pub fn parse_email(email: &str) -> ParseResult<Email> {
    Ok(Email::new(email.trim())?)
}

pub fn parse_address(address: &str) -> ParseResult<Address> {
    Ok(Address::new(address.trim())?)
}

pub fn parse_gender(gender: &str) -> ParseResult<Gender> {
    Ok(Gender::new(gender.trim())?)
}

pub fn parse_involvement(involvement: &str) -> ParseResult<Involvement> {
    Ok(Involvement::new(involvement.trim())?)
}

pub fn parse_form_class(form_class: &str) -> ParseResult<FormClass> {
    Ok(FormClass::new(form_class.trim())?)
}

/// Any text is a valid medical history; empty clears it
pub fn parse_medical_history(medical_history: &str) -> MedicalHistory {
    MedicalHistory::new(medical_history.trim())
}

pub fn parse_tag(tag: &str) -> ParseResult<Tag> {
    Ok(Tag::new(tag.trim())?)
}

/// Parse every tag, failing on the first invalid one
pub fn parse_tags<S: AsRef<str>>(tags: &[S]) -> ParseResult<TagSet> {
    let tags = tags
        .iter()
        .map(|tag| parse_tag(tag.as_ref()))
        .collect::<ParseResult<BTreeSet<Tag>>>()?;
    Ok(TagSet::new(tags)?)
}

/// Tags for an edit: `None` when no `t/` was given, an empty set for a lone empty `t/`
pub fn parse_tags_for_edit(tags: &[String]) -> ParseResult<Option<TagSet>> {
    match tags {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(TagSet::empty())),
        _ => parse_tags(tags).map(Some),
    }
}

pub fn parse_meeting_description(description: &str) -> ParseResult<MeetingDescription> {
    Ok(MeetingDescription::new(description.trim())?)
}

pub fn parse_meeting_date_time(date_time: &str) -> ParseResult<MeetingDateTime> {
    Ok(MeetingDateTime::new(date_time.trim())?)
}

pub fn parse_location(location: &str) -> ParseResult<Location> {
    Ok(Location::new(location.trim())?)
}

/// Whitespace-separated keywords; empty when the input is blank
pub fn parse_keywords(args: &str) -> Vec<String> {
    args.split_whitespace()
        .take(MAX_FIND_KEYWORDS)
        .map(str::to_string)
        .collect()
}
