//! User-facing messages shared by several commands

pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format! \n";
pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_INVALID_INDEX: &str = "Index is not a non-zero unsigned integer.";
pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";

pub const MESSAGE_INVALID_STUDENT_DISPLAYED_INDEX: &str = "The student index provided is invalid";
pub const MESSAGE_INVALID_TEACHER_DISPLAYED_INDEX: &str = "The teacher index provided is invalid";
pub const MESSAGE_INVALID_MEETING_DISPLAYED_INDEX: &str = "The meeting index provided is invalid";

pub const MESSAGE_DUPLICATE_STUDENT: &str = "This student already exists in the address book";
pub const MESSAGE_DUPLICATE_TEACHER: &str = "This teacher already exists in the address book";
pub const MESSAGE_DUPLICATE_MEETING: &str = "This meeting already exists in the address book";

/// "N persons listed!" as reported by the find and list commands
pub fn persons_listed_overview(count: usize) -> String {
    format!("{} persons listed!", count)
}

/// Prefix the usage text of a command with the invalid-format banner
pub fn invalid_command_format(usage: &str) -> String {
    format!("{}{}", MESSAGE_INVALID_COMMAND_FORMAT, usage)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_command_format_layout() {
        assert_eq!(
            invalid_command_format("list: lists"),
            "Invalid command format! \nlist: lists"
        );
    }

    #[test]
    fn test_persons_listed_overview() {
        assert_eq!(persons_listed_overview(0), "0 persons listed!");
        assert_eq!(persons_listed_overview(3), "3 persons listed!");
    }
}
