//! # Classbook CLI
//!
//! Line-oriented session over any reader and writer, so the same loop drives
//! the interactive prompt, scripted `--command` runs and tests.

use classbook_core::config::UserPrefs;
use classbook_core::model::Model;
use classbook_core::{log_info, log_warning};
use classbook_logic::commands::help_text;
use classbook_logic::{CommandResult, LogicManager};
use std::io::{self, BufRead, Write};

pub const WELCOME_MESSAGE: &str = "Welcome to Classbook! Type `help` to see every command.";

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionSummary {
    pub commands_run: usize,
    pub failures: usize,
    /// The session stopped because of an `exit` command rather than end of input
    pub exited: bool,
}

/// Run one line and print its outcome; returns whether the session should end
fn run_line<M: Model, W: Write>(
    line: &str,
    writer: &mut W,
    logic: &mut LogicManager<M>,
    summary: &mut SessionSummary,
) -> io::Result<bool> {
    summary.commands_run += 1;

    match logic.execute(line) {
        Ok(result) => {
            print_result(writer, &result)?;
            Ok(result.exit)
        }
        Err(err) => {
            summary.failures += 1;
            writeln!(writer, "{}", err)?;
            Ok(false)
        }
    }
}

fn print_result<W: Write>(writer: &mut W, result: &CommandResult) -> io::Result<()> {
    writeln!(writer, "{}", result.feedback)?;
    if result.show_help {
        writeln!(writer)?;
        writeln!(writer, "{}", help_text())?;
    }
    Ok(())
}

/// Read commands line by line until `exit` or end of input
pub fn run_session<R, W, M>(
    reader: R,
    mut writer: W,
    logic: &mut LogicManager<M>,
    prefs: &UserPrefs,
) -> io::Result<SessionSummary>
where
    R: BufRead,
    W: Write,
    M: Model,
{
    let mut summary = SessionSummary::default();

    if prefs.show_welcome {
        writeln!(writer, "{}", WELCOME_MESSAGE)?;
    }

    let mut lines = reader.lines();
    loop {
        write!(writer, "{}", prefs.prompt)?;
        writer.flush()?;

        let Some(line) = lines.next() else {
            writeln!(writer)?;
            break;
        };
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        if run_line(&line, &mut writer, logic, &mut summary)? {
            summary.exited = true;
            break;
        }
    }

    log_info!(
        "Session ended",
        "commands" => summary.commands_run,
        "failures" => summary.failures
    );
    Ok(summary)
}

/// Run a fixed list of commands without prompting
pub fn run_script<W, M, S>(
    commands: &[S],
    mut writer: W,
    logic: &mut LogicManager<M>,
) -> io::Result<SessionSummary>
where
    W: Write,
    M: Model,
    S: AsRef<str>,
{
    let mut summary = SessionSummary::default();

    for command in commands {
        if run_line(command.as_ref(), &mut writer, logic, &mut summary)? {
            summary.exited = true;
            break;
        }
    }

    if summary.failures > 0 {
        log_warning!("Scripted commands failed", "failures" => summary.failures);
    }
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use classbook_core::ModelManager;
    use classbook_logic::commands::{ExitCommand, HelpCommand};
    use std::io::Cursor;

    fn prefs() -> UserPrefs {
        UserPrefs {
            prompt: "> ".to_string(),
            show_welcome: false,
        }
    }

    fn session(input: &str) -> (String, SessionSummary, LogicManager) {
        let mut logic = LogicManager::<ModelManager>::default();
        let mut output = Vec::new();
        let summary = run_session(Cursor::new(input), &mut output, &mut logic, &prefs()).unwrap();
        (String::from_utf8(output).unwrap(), summary, logic)
    }

    #[test]
    fn test_session_runs_until_exit() {
        let (output, summary, logic) = session(
            "teacher n/Mary Tan p/98765432 e/mary@example.com a/Clementi g/F i/Chemistry\n\
             exit\n\
             list\n",
        );

        assert!(output.contains("New teacher added: Mary Tan"));
        assert!(output.contains(ExitCommand::MESSAGE_EXIT_ACKNOWLEDGEMENT));
        assert!(!output.contains("Listed all students"));
        assert_eq!(summary.commands_run, 2);
        assert!(summary.exited);
        assert_eq!(logic.model().address_book().teachers().len(), 1);
    }

    #[test]
    fn test_session_reports_errors_and_continues() {
        let (output, summary, _) = session("frobnicate\n\nlist\n");

        assert!(output.contains("Unknown command"));
        assert!(output.contains("Listed all students"));
        assert_eq!(summary.failures, 1);
        assert_eq!(summary.commands_run, 2);
        assert!(!summary.exited);
    }

    #[test]
    fn test_help_prints_usage_of_every_command() {
        let (output, _, _) = session("help\n");

        assert!(output.contains(HelpCommand::SHOWING_HELP_MESSAGE));
        assert!(output.contains("editstudent:"));
        assert!(output.contains("findteacher:"));
    }

    #[test]
    fn test_welcome_and_prompt() {
        let mut logic = LogicManager::<ModelManager>::default();
        let mut output = Vec::new();
        let prefs = UserPrefs {
            prompt: "cb> ".to_string(),
            show_welcome: true,
        };

        run_session(Cursor::new("exit\n"), &mut output, &mut logic, &prefs).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert!(output.starts_with(WELCOME_MESSAGE));
        assert!(output.contains("cb> "));
    }

    #[test]
    fn test_script_stops_at_exit() {
        let mut logic = LogicManager::<ModelManager>::default();
        let mut output = Vec::new();

        let summary = run_script(
            &["meeting d/PTM dt/2022-10-31 14:30 l/Hall", "delete 5", "exit", "clear"],
            &mut output,
            &mut logic,
        )
        .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(output.contains("New meeting added: PTM"));
        assert!(output.contains("The meeting index provided is invalid"));
        assert_eq!(summary.commands_run, 3);
        assert_eq!(summary.failures, 1);
        assert!(summary.exited);
    }
}
