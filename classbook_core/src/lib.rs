//! # Classbook Core
//!
//! Shared foundation for the classbook workspace: the in-memory model of
//! students, teachers and meetings, the validated field value types they are
//! built from, and the ambient logging and configuration services used by the
//! command layer in `classbook_logic`.

// Internal modules
pub mod config;
pub mod index;
#[macro_use]
pub mod logging;
pub mod messages;
pub mod model;

// Re-export key types for library consumers
pub use config::{AppConfig, ConfigError};
pub use index::Index;
pub use model::{AddressBook, Model, ModelError, ModelManager};
