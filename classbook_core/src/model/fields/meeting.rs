use super::{starts_with_non_whitespace, FieldError, FieldResult, MEETING_DATE_TIME_FORMAT};
use chrono::NaiveDateTime;
use std::fmt;

text_field!(
    /// What the meeting is about
    MeetingDescription,
    starts_with_non_whitespace,
    FieldError::InvalidMeetingDescription
);

text_field!(
    /// Where the meeting takes place
    Location,
    starts_with_non_whitespace,
    FieldError::InvalidLocation
);

/// Minute-precision meeting time, written `YYYY-MM-DD HH:MM`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MeetingDateTime(NaiveDateTime);

impl MeetingDateTime {
    pub fn new(value: &str) -> FieldResult<Self> {
        NaiveDateTime::parse_from_str(value, MEETING_DATE_TIME_FORMAT)
            .map(Self)
            .map_err(|_| FieldError::InvalidMeetingDateTime)
    }

    pub fn is_valid(value: &str) -> bool {
        Self::new(value).is_ok()
    }

    pub fn value(&self) -> NaiveDateTime {
        self.0
    }
}

impl fmt::Display for MeetingDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(MEETING_DATE_TIME_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_date_time_parses() {
        let when = MeetingDateTime::new("2022-10-31 14:30").unwrap();
        assert_eq!(when.value().month(), 10);
        assert_eq!(when.value().hour(), 14);
        assert_eq!(when.to_string(), "2022-10-31 14:30");
    }

    #[test]
    fn test_date_time_rejects_bad_input() {
        for input in ["", "2022-10-31", "31/10/2022 14:30", "2022-02-30 10:00", "2022-10-31 25:00"] {
            assert_eq!(
                MeetingDateTime::new(input),
                Err(FieldError::InvalidMeetingDateTime),
                "{input}"
            );
        }
    }

    #[test]
    fn test_description_and_location() {
        assert!(MeetingDescription::is_valid("PTM with parents"));
        assert!(!MeetingDescription::is_valid(""));
        assert!(Location::is_valid("Staff room"));
        assert!(!Location::is_valid(" Staff room"));
    }
}
