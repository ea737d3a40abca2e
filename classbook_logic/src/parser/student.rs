//! Parsers for the student commands

use super::cli_syntax::*;
use super::error::{ParseError, ParseResult};
use super::parser_util::*;
use super::tokenizer::ArgumentTokenizer;
use super::CommandParser;
use crate::commands::{
    AddStudentCommand, Command, DeleteStudentCommand, EditStudentCommand, EditStudentDescriptor,
    FindStudentCommand, MedicalHistoryCommand,
};
use classbook_core::model::fields::MedicalHistory;
use classbook_core::model::{PersonPredicate, Student};

const STUDENT_PREFIXES: [Prefix; 9] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_GENDER,
    PREFIX_INVOLVEMENT,
    PREFIX_TAG,
    PREFIX_EMERGENCY_CONTACT,
    PREFIX_FORM_CLASS,
];

pub struct AddStudentParser;

impl CommandParser for AddStudentParser {
    fn parse(&self, args: &str) -> ParseResult<Command> {
        let arguments = ArgumentTokenizer::tokenize(args, &STUDENT_PREFIXES);

        let required = [
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_GENDER,
            PREFIX_INVOLVEMENT,
            PREFIX_EMERGENCY_CONTACT,
            PREFIX_FORM_CLASS,
        ];
        if !arguments.are_prefixes_present(&required) || !arguments.preamble().is_empty() {
            return Err(ParseError::invalid_format(AddStudentCommand::USAGE));
        }

        let value = |prefix| arguments.value(prefix).unwrap_or_default();
        let student = Student {
            name: parse_name(value(PREFIX_NAME))?,
            phone: parse_phone(value(PREFIX_PHONE))?,
            email: parse_email(value(PREFIX_EMAIL))?,
            address: parse_address(value(PREFIX_ADDRESS))?,
            involvement: parse_involvement(value(PREFIX_INVOLVEMENT))?,
            tags: parse_tags(arguments.all_values(PREFIX_TAG))?,
            emergency_contact: parse_phone(value(PREFIX_EMERGENCY_CONTACT))?,
            form_class: parse_form_class(value(PREFIX_FORM_CLASS))?,
            gender: parse_gender(value(PREFIX_GENDER))?,
            medical_history: MedicalHistory::none(),
        };

        Ok(Command::AddStudent(AddStudentCommand::new(student)))
    }
}

pub struct EditStudentParser;

impl CommandParser for EditStudentParser {
    fn parse(&self, args: &str) -> ParseResult<Command> {
        let arguments = ArgumentTokenizer::tokenize(args, &STUDENT_PREFIXES);

        let index = parse_index(arguments.preamble())
            .map_err(|_| ParseError::invalid_format(EditStudentCommand::USAGE))?;

        let descriptor = EditStudentDescriptor {
            name: arguments.value(PREFIX_NAME).map(parse_name).transpose()?,
            phone: arguments.value(PREFIX_PHONE).map(parse_phone).transpose()?,
            email: arguments.value(PREFIX_EMAIL).map(parse_email).transpose()?,
            address: arguments.value(PREFIX_ADDRESS).map(parse_address).transpose()?,
            gender: arguments.value(PREFIX_GENDER).map(parse_gender).transpose()?,
            involvement: arguments
                .value(PREFIX_INVOLVEMENT)
                .map(parse_involvement)
                .transpose()?,
            emergency_contact: arguments
                .value(PREFIX_EMERGENCY_CONTACT)
                .map(parse_phone)
                .transpose()?,
            form_class: arguments
                .value(PREFIX_FORM_CLASS)
                .map(parse_form_class)
                .transpose()?,
            tags: parse_tags_for_edit(arguments.all_values(PREFIX_TAG))?,
        };

        if !descriptor.is_any_field_edited() {
            return Err(ParseError::NoFieldsProvided);
        }

        Ok(Command::EditStudent(EditStudentCommand::new(
            index, descriptor,
        )))
    }
}

pub struct DeleteStudentParser;

impl CommandParser for DeleteStudentParser {
    fn parse(&self, args: &str) -> ParseResult<Command> {
        let index = parse_index(args)
            .map_err(|_| ParseError::invalid_format(DeleteStudentCommand::USAGE))?;
        Ok(Command::DeleteStudent(DeleteStudentCommand::new(index)))
    }
}

pub struct MedicalHistoryParser;

impl CommandParser for MedicalHistoryParser {
    fn parse(&self, args: &str) -> ParseResult<Command> {
        let arguments = ArgumentTokenizer::tokenize(args, &[PREFIX_MEDICAL_HISTORY]);

        let index = parse_index(arguments.preamble())
            .map_err(|_| ParseError::invalid_format(MedicalHistoryCommand::USAGE))?;
        let history = arguments
            .value(PREFIX_MEDICAL_HISTORY)
            .map(parse_medical_history)
            .ok_or_else(|| ParseError::invalid_format(MedicalHistoryCommand::USAGE))?;

        Ok(Command::MedicalHistory(MedicalHistoryCommand::new(
            index, history,
        )))
    }
}

pub struct FindStudentParser;

impl CommandParser for FindStudentParser {
    fn parse(&self, args: &str) -> ParseResult<Command> {
        let keywords = parse_keywords(args);
        if keywords.is_empty() {
            return Err(ParseError::invalid_format(FindStudentCommand::USAGE));
        }
        Ok(Command::FindStudents(FindStudentCommand::new(
            PersonPredicate::NameContainsKeywords(keywords),
        )))
    }
}
