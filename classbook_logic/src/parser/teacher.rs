//! Parsers for the teacher commands

use super::cli_syntax::*;
use super::error::{ParseError, ParseResult};
use super::parser_util::*;
use super::tokenizer::ArgumentTokenizer;
use super::CommandParser;
use crate::commands::{
    AddTeacherCommand, Command, DeleteTeacherCommand, EditTeacherCommand, EditTeacherDescriptor,
    FindTeacherCommand,
};
use classbook_core::model::{PersonPredicate, Teacher};

const TEACHER_PREFIXES: [Prefix; 7] = [
    PREFIX_NAME,
    PREFIX_PHONE,
    PREFIX_EMAIL,
    PREFIX_ADDRESS,
    PREFIX_GENDER,
    PREFIX_INVOLVEMENT,
    PREFIX_TAG,
];

pub struct AddTeacherParser;

impl CommandParser for AddTeacherParser {
    fn parse(&self, args: &str) -> ParseResult<Command> {
        let arguments = ArgumentTokenizer::tokenize(args, &TEACHER_PREFIXES);

        let required = [
            PREFIX_NAME,
            PREFIX_PHONE,
            PREFIX_EMAIL,
            PREFIX_ADDRESS,
            PREFIX_GENDER,
            PREFIX_INVOLVEMENT,
        ];
        if !arguments.are_prefixes_present(&required) || !arguments.preamble().is_empty() {
            return Err(ParseError::invalid_format(AddTeacherCommand::USAGE));
        }

        let value = |prefix| arguments.value(prefix).unwrap_or_default();
        let teacher = Teacher {
            name: parse_name(value(PREFIX_NAME))?,
            phone: parse_phone(value(PREFIX_PHONE))?,
            email: parse_email(value(PREFIX_EMAIL))?,
            address: parse_address(value(PREFIX_ADDRESS))?,
            gender: parse_gender(value(PREFIX_GENDER))?,
            involvement: parse_involvement(value(PREFIX_INVOLVEMENT))?,
            tags: parse_tags(arguments.all_values(PREFIX_TAG))?,
        };

        Ok(Command::AddTeacher(AddTeacherCommand::new(teacher)))
    }
}

pub struct EditTeacherParser;

impl CommandParser for EditTeacherParser {
    fn parse(&self, args: &str) -> ParseResult<Command> {
        let arguments = ArgumentTokenizer::tokenize(args, &TEACHER_PREFIXES);

        let index = parse_index(arguments.preamble())
            .map_err(|_| ParseError::invalid_format(EditTeacherCommand::USAGE))?;

        let descriptor = EditTeacherDescriptor {
            name: arguments.value(PREFIX_NAME).map(parse_name).transpose()?,
            phone: arguments.value(PREFIX_PHONE).map(parse_phone).transpose()?,
            email: arguments.value(PREFIX_EMAIL).map(parse_email).transpose()?,
            address: arguments.value(PREFIX_ADDRESS).map(parse_address).transpose()?,
            gender: arguments.value(PREFIX_GENDER).map(parse_gender).transpose()?,
            involvement: arguments
                .value(PREFIX_INVOLVEMENT)
                .map(parse_involvement)
                .transpose()?,
            tags: parse_tags_for_edit(arguments.all_values(PREFIX_TAG))?,
        };

        if !descriptor.is_any_field_edited() {
            return Err(ParseError::NoFieldsProvided);
        }

        Ok(Command::EditTeacher(EditTeacherCommand::new(
            index, descriptor,
        )))
    }
}

pub struct DeleteTeacherParser;

impl CommandParser for DeleteTeacherParser {
    fn parse(&self, args: &str) -> ParseResult<Command> {
        let index = parse_index(args)
            .map_err(|_| ParseError::invalid_format(DeleteTeacherCommand::USAGE))?;
        Ok(Command::DeleteTeacher(DeleteTeacherCommand::new(index)))
    }
}

pub struct FindTeacherParser;

impl CommandParser for FindTeacherParser {
    fn parse(&self, args: &str) -> ParseResult<Command> {
        let keywords = parse_keywords(args);
        if keywords.is_empty() {
            return Err(ParseError::invalid_format(FindTeacherCommand::USAGE));
        }
        Ok(Command::FindTeachers(FindTeacherCommand::new(
            PersonPredicate::NameContainsKeywords(keywords),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::*;
    use classbook_core::model::fields::{FieldError, Gender};

    #[test]
    fn test_add_teacher() {
        let command = AddTeacherParser
            .parse(" n/Mary Tan p/98765432 e/mary@example.com a/Clementi g/f i/Chemistry t/mentor")
            .unwrap();

        let Command::AddTeacher(AddTeacherCommand { teacher }) = command else {
            panic!("expected add teacher command");
        };
        assert_eq!(teacher.name.as_str(), "Mary Tan");
        assert_eq!(teacher.gender, Gender::Female);
        assert_eq!(teacher.tags.to_string(), "[mentor]");
    }

    #[test]
    fn test_add_teacher_ignores_student_prefixes() {
        let result = AddTeacherParser
            .parse(" n/Mary Tan p/98765432 e/mary@example.com a/Clementi g/F i/Chemistry fc/4E1");

        let Ok(Command::AddTeacher(AddTeacherCommand { teacher })) = result else {
            panic!("expected add teacher command");
        };
        assert_eq!(teacher.involvement.as_str(), "Chemistry fc/4E1");
    }

    #[test]
    fn test_add_teacher_missing_involvement() {
        assert_eq!(
            AddTeacherParser.parse(" n/Mary Tan p/98765432 e/mary@example.com a/Clementi g/F"),
            Err(ParseError::invalid_format(AddTeacherCommand::USAGE))
        );
    }

    #[test]
    fn test_edit_teacher() {
        let command = EditTeacherParser.parse(" 1 i/Physics t/").unwrap();
        let Command::EditTeacher(EditTeacherCommand { index: target, descriptor }) = command else {
            panic!("expected edit teacher command");
        };
        assert_eq!(target, index(1));
        assert_eq!(descriptor.involvement.unwrap().as_str(), "Physics");
        assert!(descriptor.tags.unwrap().is_empty());

        assert_eq!(EditTeacherParser.parse(" 1"), Err(ParseError::NoFieldsProvided));
        assert_eq!(
            EditTeacherParser.parse(" 1 p/12"),
            Err(ParseError::InvalidField(FieldError::invalid_phone()))
        );
    }

    #[test]
    fn test_delete_and_find_teacher() {
        assert_eq!(
            DeleteTeacherParser.parse("2"),
            Ok(Command::DeleteTeacher(DeleteTeacherCommand::new(index(2))))
        );
        assert_eq!(
            DeleteTeacherParser.parse(" +2"),
            Err(ParseError::invalid_format(DeleteTeacherCommand::USAGE))
        );
        assert_eq!(
            FindTeacherParser.parse(""),
            Err(ParseError::invalid_format(FindTeacherCommand::USAGE))
        );
    }
}
