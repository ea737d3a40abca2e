use super::error::{ParseError, ParseResult};
use super::CommandParser;
use crate::commands::{Command, CopyCommand, CopyCommandDescriptor};

pub struct CopyParser;

impl CommandParser for CopyParser {
    fn parse(&self, args: &str) -> ParseResult<Command> {
        let field = args.trim();
        if field.is_empty() {
            return Err(ParseError::invalid_format(CopyCommand::USAGE));
        }
        Ok(Command::Copy(CopyCommand::new(CopyCommandDescriptor::new(
            field,
        ))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::CopyField;

    #[test]
    fn test_copy_field_is_kept_permissive() {
        let Ok(Command::Copy(command)) = CopyParser.parse(" fish ") else {
            panic!("expected copy command");
        };
        assert_eq!(
            command.descriptor.field,
            CopyField::Unrecognized("fish".to_string())
        );
    }

    #[test]
    fn test_copy_requires_field() {
        assert_eq!(
            CopyParser.parse("  "),
            Err(ParseError::invalid_format(CopyCommand::USAGE))
        );
    }
}
