//! # Classbook Logic
//!
//! Turns command lines into typed commands and runs them against a
//! [`classbook_core::Model`].
//!
//! ```text
//! "editstudent 1 p/91234567"
//!     -> AddressBookParser (command word lookup)
//!     -> EditStudentParser (ArgumentTokenizer + parser_util)
//!     -> Command::EditStudent
//!     -> Command::execute(&mut dyn Model) -> CommandResult
//! ```

pub mod commands;
pub mod error;
pub mod logic;
pub mod parser;

#[cfg(test)]
pub(crate) mod testutil;

pub use commands::{Command, CommandError, CommandResult};
pub use error::LogicError;
pub use logic::LogicManager;
pub use parser::{AddressBookParser, CommandWord, ParseError};

pub mod prelude {
    pub use crate::commands::{Command, CommandError, CommandResult};
    pub use crate::error::LogicError;
    pub use crate::logic::LogicManager;
    pub use crate::parser::{
        AddressBookParser, ArgumentMultimap, ArgumentTokenizer, CommandWord, ParseError, Prefix,
    };
}
