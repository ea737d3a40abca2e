//! Parsers for the meeting commands

use super::cli_syntax::*;
use super::error::{ParseError, ParseResult};
use super::parser_util::*;
use super::tokenizer::ArgumentTokenizer;
use super::CommandParser;
use crate::commands::{AddMeetingCommand, Command, DeleteMeetingCommand};
use classbook_core::model::Meeting;

pub struct AddMeetingParser;

impl CommandParser for AddMeetingParser {
    fn parse(&self, args: &str) -> ParseResult<Command> {
        let prefixes = [PREFIX_DESCRIPTION, PREFIX_DATE_TIME, PREFIX_LOCATION];
        let arguments = ArgumentTokenizer::tokenize(args, &prefixes);

        if !arguments.are_prefixes_present(&prefixes) || !arguments.preamble().is_empty() {
            return Err(ParseError::invalid_format(AddMeetingCommand::USAGE));
        }

        let value = |prefix| arguments.value(prefix).unwrap_or_default();
        let meeting = Meeting {
            description: parse_meeting_description(value(PREFIX_DESCRIPTION))?,
            date_time: parse_meeting_date_time(value(PREFIX_DATE_TIME))?,
            location: parse_location(value(PREFIX_LOCATION))?,
        };

        Ok(Command::AddMeeting(AddMeetingCommand::new(meeting)))
    }
}

pub struct DeleteMeetingParser;

impl CommandParser for DeleteMeetingParser {
    fn parse(&self, args: &str) -> ParseResult<Command> {
        let index = parse_index(args)
            .map_err(|_| ParseError::invalid_format(DeleteMeetingCommand::USAGE))?;
        Ok(Command::DeleteMeeting(DeleteMeetingCommand::new(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::*;
    use classbook_core::model::fields::FieldError;

    #[test]
    fn test_add_meeting() {
        assert_eq!(
            AddMeetingParser.parse(" d/Science fair dt/2022-11-05 09:00 l/Staff room"),
            Ok(Command::AddMeeting(AddMeetingCommand::new(meeting(
                "Science fair",
                "2022-11-05 09:00"
            ))))
        );
    }

    #[test]
    fn test_add_meeting_bad_date_time() {
        assert_eq!(
            AddMeetingParser.parse(" d/Science fair dt/05-11-2022 l/Staff room"),
            Err(ParseError::InvalidField(FieldError::InvalidMeetingDateTime))
        );
    }

    #[test]
    fn test_add_meeting_missing_location() {
        assert_eq!(
            AddMeetingParser.parse(" d/Science fair dt/2022-11-05 09:00"),
            Err(ParseError::invalid_format(AddMeetingCommand::USAGE))
        );
    }

    #[test]
    fn test_delete_meeting() {
        assert_eq!(
            DeleteMeetingParser.parse(" 1 "),
            Ok(Command::DeleteMeeting(DeleteMeetingCommand::new(index(1))))
        );
        for input in ["", " 0", " -1", " 1 2", " one"] {
            assert_eq!(
                DeleteMeetingParser.parse(input),
                Err(ParseError::invalid_format(DeleteMeetingCommand::USAGE)),
                "{input}"
            );
        }
    }
}
