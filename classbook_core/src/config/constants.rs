pub mod compile_time {
    pub mod fields {
        /// Shortest accepted phone number
        pub const MIN_PHONE_DIGITS: usize = 3;

        /// Longest accepted phone number (E.164 upper bound)
        pub const MAX_PHONE_DIGITS: usize = 15;

        /// Maximum characters in a person's name
        pub const MAX_NAME_LENGTH: usize = 100;

        /// Maximum tags attached to a single student or teacher
        /// RESOURCE: Bounds the per-entity tag set
        pub const MAX_TAGS_PER_ENTITY: usize = 32;

        /// Input format of meeting date-times
        pub const MEETING_DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M";
    }

    pub mod command {
        /// Maximum accepted length of one command line
        /// SECURITY: Rejects pasted garbage before tokenization
        pub const MAX_COMMAND_LENGTH: usize = 4096;

        /// Maximum keywords accepted by a find command
        pub const MAX_FIND_KEYWORDS: usize = 64;
    }

    pub mod logging {
        /// Maximum characters of a command line echoed into log context
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 200;
    }
}
