//! Turns a line of user input into a typed [`Command`]
//!
//! The first whitespace-delimited word selects the command; the remainder is
//! handed to that command's parser untouched.

pub mod cli_syntax;
pub mod error;
pub mod general;
pub mod meeting;
pub mod parser_util;
pub mod student;
pub mod teacher;
pub mod tokenizer;

pub use cli_syntax::Prefix;
pub use error::{ParseError, ParseResult};
pub use tokenizer::{ArgumentMultimap, ArgumentTokenizer};

use crate::commands::{
    AddMeetingCommand, AddStudentCommand, AddTeacherCommand, ClearStudentsCommand, Command,
    CopyCommand, DeleteMeetingCommand, DeleteStudentCommand, DeleteTeacherCommand,
    EditStudentCommand, EditTeacherCommand, ExitCommand, FindStudentCommand, FindTeacherCommand,
    HelpCommand, ListStudentsCommand, ListTeachersCommand, MedicalHistoryCommand,
};
use classbook_core::config::constants::compile_time::command::MAX_COMMAND_LENGTH;
use classbook_core::log_debug;
use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Parses the arguments that follow a command word
pub trait CommandParser {
    fn parse(&self, args: &str) -> ParseResult<Command>;
}

/// Every word the address book understands, matched case-sensitively
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandWord {
    Student,
    Teacher,
    Meeting,
    EditStudent,
    EditTeacher,
    DeleteStudent,
    DeleteTeacher,
    Delete,
    Medical,
    Find,
    FindTeacher,
    List,
    ListTeacher,
    Clear,
    Copy,
    Help,
    Exit,
}

impl CommandWord {
    pub const ALL: [CommandWord; 17] = [
        CommandWord::Student,
        CommandWord::Teacher,
        CommandWord::Meeting,
        CommandWord::EditStudent,
        CommandWord::EditTeacher,
        CommandWord::DeleteStudent,
        CommandWord::DeleteTeacher,
        CommandWord::Delete,
        CommandWord::Medical,
        CommandWord::Find,
        CommandWord::FindTeacher,
        CommandWord::List,
        CommandWord::ListTeacher,
        CommandWord::Clear,
        CommandWord::Copy,
        CommandWord::Help,
        CommandWord::Exit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CommandWord::Student => "student",
            CommandWord::Teacher => "teacher",
            CommandWord::Meeting => "meeting",
            CommandWord::EditStudent => "editstudent",
            CommandWord::EditTeacher => "editteacher",
            CommandWord::DeleteStudent => "deletestudent",
            CommandWord::DeleteTeacher => "deleteteacher",
            CommandWord::Delete => "delete",
            CommandWord::Medical => "medical",
            CommandWord::Find => "find",
            CommandWord::FindTeacher => "findteacher",
            CommandWord::List => "list",
            CommandWord::ListTeacher => "listteacher",
            CommandWord::Clear => "clear",
            CommandWord::Copy => "copy",
            CommandWord::Help => "help",
            CommandWord::Exit => "exit",
        }
    }

    pub fn from_str(word: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|candidate| candidate.as_str() == word)
    }

    /// Usage message of the command invoked by this word
    pub fn usage(&self) -> &'static str {
        match self {
            CommandWord::Student => AddStudentCommand::USAGE,
            CommandWord::Teacher => AddTeacherCommand::USAGE,
            CommandWord::Meeting => AddMeetingCommand::USAGE,
            CommandWord::EditStudent => EditStudentCommand::USAGE,
            CommandWord::EditTeacher => EditTeacherCommand::USAGE,
            CommandWord::DeleteStudent => DeleteStudentCommand::USAGE,
            CommandWord::DeleteTeacher => DeleteTeacherCommand::USAGE,
            CommandWord::Delete => DeleteMeetingCommand::USAGE,
            CommandWord::Medical => MedicalHistoryCommand::USAGE,
            CommandWord::Find => FindStudentCommand::USAGE,
            CommandWord::FindTeacher => FindTeacherCommand::USAGE,
            CommandWord::List => ListStudentsCommand::USAGE,
            CommandWord::ListTeacher => ListTeachersCommand::USAGE,
            CommandWord::Clear => ClearStudentsCommand::USAGE,
            CommandWord::Copy => CopyCommand::USAGE,
            CommandWord::Help => HelpCommand::USAGE,
            CommandWord::Exit => ExitCommand::USAGE,
        }
    }

    /// Hand `arguments` to this word's parser; argument-free words ignore them
    fn dispatch(&self, arguments: &str) -> ParseResult<Command> {
        match self {
            CommandWord::Student => student::AddStudentParser.parse(arguments),
            CommandWord::Teacher => teacher::AddTeacherParser.parse(arguments),
            CommandWord::Meeting => meeting::AddMeetingParser.parse(arguments),
            CommandWord::EditStudent => student::EditStudentParser.parse(arguments),
            CommandWord::EditTeacher => teacher::EditTeacherParser.parse(arguments),
            CommandWord::DeleteStudent => student::DeleteStudentParser.parse(arguments),
            CommandWord::DeleteTeacher => teacher::DeleteTeacherParser.parse(arguments),
            CommandWord::Delete => meeting::DeleteMeetingParser.parse(arguments),
            CommandWord::Medical => student::MedicalHistoryParser.parse(arguments),
            CommandWord::Find => student::FindStudentParser.parse(arguments),
            CommandWord::FindTeacher => teacher::FindTeacherParser.parse(arguments),
            CommandWord::Copy => general::CopyParser.parse(arguments),
            CommandWord::List => Ok(Command::ListStudents(ListStudentsCommand)),
            CommandWord::ListTeacher => Ok(Command::ListTeachers(ListTeachersCommand)),
            CommandWord::Clear => Ok(Command::ClearStudents(ClearStudentsCommand)),
            CommandWord::Help => Ok(Command::Help(HelpCommand)),
            CommandWord::Exit => Ok(Command::Exit(ExitCommand)),
        }
    }
}

impl fmt::Display for CommandWord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn command_format() -> Option<&'static Regex> {
    static FORMAT: OnceLock<Option<Regex>> = OnceLock::new();
    FORMAT
        .get_or_init(|| Regex::new(r"^(?P<command_word>\S+)(?P<arguments>(?s).*)$").ok())
        .as_ref()
}

/// Entry point for parsing a full line of user input
#[derive(Debug, Default, Clone, Copy)]
pub struct AddressBookParser;

impl AddressBookParser {
    pub fn new() -> Self {
        Self
    }

    pub fn parse_command(&self, user_input: &str) -> ParseResult<Command> {
        let trimmed = user_input.trim();
        if trimmed.is_empty() || trimmed.len() > MAX_COMMAND_LENGTH {
            return Err(ParseError::invalid_format(HelpCommand::USAGE));
        }

        let captures = command_format()
            .and_then(|format| format.captures(trimmed))
            .ok_or_else(|| ParseError::invalid_format(HelpCommand::USAGE))?;
        let word = captures.name("command_word").map_or("", |m| m.as_str());
        let arguments = captures.name("arguments").map_or("", |m| m.as_str());

        let Some(command_word) = CommandWord::from_str(word) else {
            log_debug!("Unrecognised command word", "word" => word);
            return Err(ParseError::UnknownCommand);
        };

        log_debug!("Dispatching command", "word" => command_word, "arguments" => arguments.len());

        command_word.dispatch(arguments)
    }
}
