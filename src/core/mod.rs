// Public modules
pub mod command_spec;
pub mod defaults;
pub mod environment;
pub mod error;
pub mod generate;
pub mod identifier;
pub mod scaffold;

// Internal modules - not part of public API
pub(crate) mod paths;

// Re-export common types for convenience
pub use command_spec::{CommandDescriptor, ProjectContext};
pub use error::{Error, ErrorCode, Result};
