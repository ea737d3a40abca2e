use super::fields::{Location, MeetingDateTime, MeetingDescription};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meeting {
    pub description: MeetingDescription,
    pub date_time: MeetingDateTime,
    pub location: Location,
}

impl Meeting {
    /// Same meeting when description and time both match
    pub fn is_same_meeting(&self, other: &Meeting) -> bool {
        self.description == other.description && self.date_time == other.date_time
    }
}

impl fmt::Display for Meeting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}; Date Time: {}; Location: {}",
            self.description, self.date_time, self.location
        )
    }
}
