//! Consolidated log codes and classification system
//!
//! Single source of truth for every code the classbook emits, together with the
//! metadata used to classify and describe it.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }
}

/// Metadata attached to a code
#[derive(Debug, Clone)]
pub struct CodeMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl CodeMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Configuration error codes
pub mod config {
    use super::Code;

    pub const CONFIG_IO_ERROR: Code = Code::new("E005");
    pub const CONFIG_PARSE_ERROR: Code = Code::new("E006");
}

/// Command-line parsing error codes
pub mod parse {
    use super::Code;

    pub const INVALID_COMMAND_FORMAT: Code = Code::new("E020");
    pub const UNKNOWN_COMMAND: Code = Code::new("E021");
    pub const INVALID_INDEX: Code = Code::new("E022");
    pub const INVALID_FIELD: Code = Code::new("E023");
    pub const NO_FIELDS_PROVIDED: Code = Code::new("E024");
}

/// Command execution error codes
pub mod command {
    use super::Code;

    pub const INVALID_DISPLAYED_INDEX: Code = Code::new("E040");
    pub const DUPLICATE_ENTITY: Code = Code::new("E041");
}

/// Model error codes
pub mod model {
    use super::Code;

    pub const DUPLICATE_ENTRY: Code = Code::new("E060");
    pub const ENTRY_NOT_FOUND: Code = Code::new("E061");
}

// ============================================================================
// SUCCESS CODE CONSTANTS
// ============================================================================

/// Success codes
pub mod success {
    use super::Code;

    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I001");
    pub const CONFIG_LOADED: Code = Code::new("I002");
    pub const COMMAND_PARSED: Code = Code::new("I020");
    pub const COMMAND_EXECUTED: Code = Code::new("I040");
    pub const MODEL_UPDATED: Code = Code::new("I060");
}

// ============================================================================
// CODE METADATA REGISTRY
// ============================================================================

static CODE_REGISTRY: OnceLock<HashMap<&'static str, CodeMetadata>> = OnceLock::new();

fn get_code_registry() -> &'static HashMap<&'static str, CodeMetadata> {
    CODE_REGISTRY.get_or_init(|| {
        let entries = [
            CodeMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                "Critical internal error",
                "File a bug report with the command that triggered it",
            ),
            CodeMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                "System initialization failure",
                "Check configuration and logging setup",
            ),
            CodeMetadata::new(
                "E005",
                "Config",
                Severity::High,
                "Configuration file could not be read",
                "Check the configuration path and its permissions",
            ),
            CodeMetadata::new(
                "E006",
                "Config",
                Severity::High,
                "Configuration file is not valid TOML",
                "Fix the reported TOML syntax or field types",
            ),
            CodeMetadata::new(
                "E020",
                "Parse",
                Severity::Low,
                "Command does not match its expected format",
                "Follow the usage shown for the command",
            ),
            CodeMetadata::new(
                "E021",
                "Parse",
                Severity::Low,
                "Command word is not recognised",
                "Type `help` to list the available commands",
            ),
            CodeMetadata::new(
                "E022",
                "Parse",
                Severity::Low,
                "Index is not a non-zero unsigned integer",
                "Use a positive number from the displayed list",
            ),
            CodeMetadata::new(
                "E023",
                "Parse",
                Severity::Low,
                "Field value violates its constraint",
                "Correct the field value as described in the message",
            ),
            CodeMetadata::new(
                "E024",
                "Parse",
                Severity::Low,
                "Edit command without any field to change",
                "Provide at least one prefixed field",
            ),
            CodeMetadata::new(
                "E040",
                "Command",
                Severity::Low,
                "Index is outside the displayed list",
                "List the entries again and pick a displayed index",
            ),
            CodeMetadata::new(
                "E041",
                "Command",
                Severity::Low,
                "Entry already exists",
                "Change the identifying fields or edit the existing entry",
            ),
            CodeMetadata::new(
                "E060",
                "Model",
                Severity::Medium,
                "Model rejected a duplicate entry",
                "Check identity fields before inserting",
            ),
            CodeMetadata::new(
                "E061",
                "Model",
                Severity::Medium,
                "Entry to remove or replace is not in the model",
                "Resolve the entry from the current model state",
            ),
            CodeMetadata::new(
                "I001",
                "System",
                Severity::Low,
                "Logging initialized",
                "None",
            ),
            CodeMetadata::new(
                "I002",
                "Config",
                Severity::Low,
                "Configuration loaded",
                "None",
            ),
            CodeMetadata::new(
                "I020",
                "Parse",
                Severity::Low,
                "Command parsed",
                "None",
            ),
            CodeMetadata::new(
                "I040",
                "Command",
                Severity::Low,
                "Command executed",
                "None",
            ),
            CodeMetadata::new(
                "I060",
                "Model",
                Severity::Low,
                "Model updated",
                "None",
            ),
        ];

        entries
            .into_iter()
            .map(|metadata| (metadata.code, metadata))
            .collect()
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get metadata for a specific code
pub fn get_code_metadata(code: &str) -> Option<&'static CodeMetadata> {
    get_code_registry().get(code)
}

/// Get severity from code
pub fn get_severity(code: &str) -> Severity {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Get human-readable description for code
pub fn get_description(code: &str) -> &'static str {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for code
pub fn get_action(code: &str) -> &'static str {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get category from code
pub fn get_category(code: &str) -> &'static str {
    get_code_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_declared_code_has_metadata() {
        let declared = [
            system::INTERNAL_ERROR,
            system::INITIALIZATION_FAILURE,
            config::CONFIG_IO_ERROR,
            config::CONFIG_PARSE_ERROR,
            parse::INVALID_COMMAND_FORMAT,
            parse::UNKNOWN_COMMAND,
            parse::INVALID_INDEX,
            parse::INVALID_FIELD,
            parse::NO_FIELDS_PROVIDED,
            command::INVALID_DISPLAYED_INDEX,
            command::DUPLICATE_ENTITY,
            model::DUPLICATE_ENTRY,
            model::ENTRY_NOT_FOUND,
            success::SYSTEM_INITIALIZATION_COMPLETED,
            success::CONFIG_LOADED,
            success::COMMAND_PARSED,
            success::COMMAND_EXECUTED,
            success::MODEL_UPDATED,
        ];

        for code in declared {
            assert!(
                get_code_metadata(code.as_str()).is_some(),
                "missing metadata for {}",
                code
            );
        }
    }

    #[test]
    fn test_unknown_code_fallbacks() {
        assert_eq!(get_description("NOPE"), "Unknown error");
        assert_eq!(get_category("NOPE"), "Unknown");
        assert_eq!(get_severity("NOPE"), Severity::Medium);
    }

    #[test]
    fn test_classification() {
        assert_eq!(get_category(parse::UNKNOWN_COMMAND.as_str()), "Parse");
        assert_eq!(
            get_severity(system::INTERNAL_ERROR.as_str()),
            Severity::Critical
        );
    }
}
