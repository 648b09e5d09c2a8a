//! Error types for hadut.
//!
//! Uses thiserror for derive macros. Every variant maps to a CLI exit code.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for hadut operations.
#[derive(Error, Debug)]
pub enum HadutError {
    /// The hadoop executable was not found in the home directory or on `PATH`.
    #[error(
        "couldn't find {tool} executable. Please set {home_var} or add the {tool} executable to your PATH"
    )]
    ExecutableNotFound { tool: String, home_var: String },

    /// A caller-supplied argument is unusable (e.g. a jar that cannot be read).
    #[error("{0}")]
    InvalidArgument(String),

    /// A checked command ran but exited nonzero.
    #[error("error running {command} (exit code {code})")]
    CommandFailed { command: String, code: i32 },

    /// The child process could not be started at all.
    #[error("failed to execute {command}: {reason}")]
    SpawnFailed { command: String, reason: String },

    /// The configuration file could not be read or holds invalid values.
    #[error("{0}")]
    ConfigError(String),
}

impl HadutError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            HadutError::ExecutableNotFound { .. } => exit_codes::EXECUTABLE_NOT_FOUND,
            HadutError::InvalidArgument(_) => exit_codes::USER_ERROR,
            HadutError::CommandFailed { .. } => exit_codes::COMMAND_FAILURE,
            HadutError::SpawnFailed { .. } => exit_codes::SPAWN_FAILURE,
            HadutError::ConfigError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for hadut operations.
pub type Result<T> = std::result::Result<T, HadutError>;
