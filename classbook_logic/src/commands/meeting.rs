//! Commands acting on the meeting list

use super::error::{CommandError, CommandOutcome};
use super::CommandResult;
use classbook_core::messages;
use classbook_core::model::{Meeting, Model};
use classbook_core::Index;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddMeetingCommand {
    pub meeting: Meeting,
}

impl AddMeetingCommand {
    pub const USAGE: &'static str = "meeting: Adds a meeting to the address book. \
        Parameters: d/DESCRIPTION dt/DATE_TIME (YYYY-MM-DD HH:MM) l/LOCATION\n\
        Example: meeting d/Parent-teacher meeting dt/2022-10-31 14:30 l/Staff room";

    pub fn new(meeting: Meeting) -> Self {
        Self { meeting }
    }

    pub fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        if model.has_meeting(&self.meeting) {
            return Err(CommandError::duplicate(messages::MESSAGE_DUPLICATE_MEETING));
        }

        model.add_meeting(self.meeting.clone())?;
        Ok(CommandResult::new(format!(
            "New meeting added: {}",
            self.meeting
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteMeetingCommand {
    pub index: Index,
}

impl DeleteMeetingCommand {
    pub const USAGE: &'static str = "delete: Deletes the meeting identified by the index number \
        used in the displayed meeting list.\n\
        Parameters: INDEX (must be a positive integer)\n\
        Example: delete 1";

    pub fn new(index: Index) -> Self {
        Self { index }
    }

    pub fn execute(&self, model: &mut dyn Model) -> CommandOutcome {
        let target = self
            .index
            .get(model.meeting_list())
            .cloned()
            .ok_or_else(CommandError::invalid_meeting_index)?;

        model.delete_meeting(&target)?;
        Ok(CommandResult::new(format!("Deleted Meeting: {}", target)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::*;

    #[test]
    fn test_delete_meeting_by_index() {
        let mut model = typical_model();
        let first = model.meeting_list()[0].clone();
        let count = model.meeting_list().len();

        let result = DeleteMeetingCommand::new(index(1))
            .execute(&mut model)
            .unwrap();

        assert_eq!(result.feedback, format!("Deleted Meeting: {}", first));
        assert_eq!(model.meeting_list().len(), count - 1);
        assert!(!model.has_meeting(&first));
    }

    #[test]
    fn test_delete_meeting_out_of_bounds() {
        let mut model = typical_model();
        let before = model.address_book().clone();
        let past_end = model.meeting_list().len() + 1;

        let result = DeleteMeetingCommand::new(index(past_end)).execute(&mut model);

        assert_eq!(result, Err(CommandError::invalid_meeting_index()));
        assert_eq!(
            result.unwrap_err().to_string(),
            "The meeting index provided is invalid"
        );
        assert_eq!(model.address_book(), &before);
    }

    #[test]
    fn test_add_meeting_rejects_duplicate() {
        let mut model = typical_model();
        let command = AddMeetingCommand::new(meeting("Science fair", "2022-11-05 09:00"));

        let result = command.execute(&mut model).unwrap();
        assert!(result.feedback.starts_with("New meeting added: Science fair"));

        assert_eq!(
            command.execute(&mut model),
            Err(CommandError::duplicate(messages::MESSAGE_DUPLICATE_MEETING))
        );
    }
}
