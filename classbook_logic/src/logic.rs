//! Parse-then-execute driver used by every front end

use crate::commands::CommandResult;
use crate::error::LogicError;
use crate::parser::AddressBookParser;
use classbook_core::logging::{self, codes};
use classbook_core::model::{Model, ModelManager};
use classbook_core::{log_debug, log_error, log_success};
use std::time::Instant;

/// Owns the model and runs command lines against it
pub struct LogicManager<M: Model = ModelManager> {
    model: M,
    parser: AddressBookParser,
}

impl<M: Model> LogicManager<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            parser: AddressBookParser::new(),
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn model_mut(&mut self) -> &mut M {
        &mut self.model
    }

    /// Parse and run one line of input
    ///
    /// On error the model is left exactly as it was.
    pub fn execute(&mut self, command_text: &str) -> Result<CommandResult, LogicError> {
        let start_time = Instant::now();

        logging::with_command_context(command_text, || {
            let result = self.parse_and_run(command_text);

            match &result {
                Ok(outcome) => {
                    log_success!(
                        codes::success::COMMAND_EXECUTED,
                        "Command executed",
                        "duration_us" => start_time.elapsed().as_micros(),
                        "exit" => outcome.exit
                    );
                }
                Err(err) => {
                    log_error!(err.error_code(), &err.to_string());
                }
            }

            result
        })
    }

    fn parse_and_run(&mut self, command_text: &str) -> Result<CommandResult, LogicError> {
        let command = self.parser.parse_command(command_text)?;
        log_success!(
            codes::success::COMMAND_PARSED,
            "Command parsed",
            "word" => command.word()
        );

        let result = command.execute(&mut self.model)?;
        log_debug!(
            "Model after command",
            "students" => self.model.address_book().students().len(),
            "teachers" => self.model.address_book().teachers().len(),
            "meetings" => self.model.meeting_list().len()
        );

        Ok(result)
    }
}

impl Default for LogicManager<ModelManager> {
    fn default() -> Self {
        Self::new(ModelManager::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{CommandError, ExitCommand};
    use crate::parser::ParseError;
    use crate::testutil::*;
    use classbook_core::logging::{LogLevel, LoggingService, MemoryLogger};
    use classbook_core::messages;
    use std::sync::Arc;

    #[test]
    fn test_invalid_command_format() {
        let mut logic = LogicManager::new(typical_model());
        let err = logic.execute("uicfhmowqewca").unwrap_err();

        assert_eq!(err, LogicError::Parse(ParseError::UnknownCommand));
        assert_eq!(err.to_string(), messages::MESSAGE_UNKNOWN_COMMAND);
    }

    #[test]
    fn test_invalid_index_leaves_model_unchanged() {
        let mut logic = LogicManager::new(typical_model());
        let before = logic.model().address_book().clone();

        let err = logic.execute("deletestudent 9").unwrap_err();

        assert_eq!(err, LogicError::Command(CommandError::invalid_student_index()));
        assert_eq!(logic.model().address_book(), &before);
    }

    #[test]
    fn test_add_then_find() {
        let mut logic = LogicManager::new(typical_model());

        let result = logic
            .execute("student n/Amy Bee p/11111111 e/amy@example.com a/Block 312 g/F i/Choir ec/22222222 fc/2B")
            .unwrap();
        assert!(result.feedback.starts_with("New student added: Amy Bee"));

        let result = logic.execute("find amy").unwrap();
        assert_eq!(result.feedback, "1 persons listed!");
        assert_eq!(logic.model().filtered_student_list().len(), 1);
    }

    #[test]
    fn test_duplicate_student_message() {
        let mut logic = LogicManager::new(typical_model());
        let err = logic
            .execute("student n/alice pauline p/11111111 e/amy@example.com a/Street g/F i/Choir ec/22222222 fc/2B")
            .unwrap_err();

        assert_eq!(err.to_string(), messages::MESSAGE_DUPLICATE_STUDENT);
    }

    #[test]
    fn test_exit_sets_flag() {
        let mut logic = LogicManager::<ModelManager>::default();
        let result = logic.execute("exit").unwrap();

        assert!(result.exit);
        assert_eq!(result.feedback, ExitCommand::MESSAGE_EXIT_ACKNOWLEDGEMENT);
    }

    #[test]
    fn test_events_are_logged_with_command_context() {
        let memory = Arc::new(MemoryLogger::new());
        let service = Arc::new(LoggingService::new(memory.clone(), LogLevel::Debug));
        // Only this test installs the process-wide logger
        logging::init_global_logging_with_service(service).unwrap();

        let mut logic = LogicManager::new(typical_model());
        logic.execute("list").unwrap();
        let _ = logic.execute("deletestudent 42");

        assert!(memory.has_success_with_code(codes::success::COMMAND_PARSED));
        assert!(memory.has_success_with_code(codes::success::COMMAND_EXECUTED));
        assert!(memory.has_error_with_code(codes::command::INVALID_DISPLAYED_INDEX));

        let failure = memory
            .get_events_with_code(codes::command::INVALID_DISPLAYED_INDEX)
            .into_iter()
            .find(|event| {
                event.context.get("command").map(String::as_str) == Some("deletestudent 42")
            });
        assert!(failure.is_some());

        let _ = logic.execute("frobnicate now");
        let unknown: Vec<_> = memory
            .get_events_with_code(codes::parse::UNKNOWN_COMMAND)
            .into_iter()
            .filter(|event| {
                event.context.get("command").map(String::as_str) == Some("frobnicate now")
            })
            .collect();
        assert_eq!(unknown.len(), 1);
        assert!(unknown[0].is_error());
    }
}
