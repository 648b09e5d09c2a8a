//! Exit code constants for the hadut CLI.
//!
//! - 0: Success
//! - 1: User error (bad arguments, unreadable file, bad config)
//! - 2: A checked hadoop command exited nonzero
//! - 3: The hadoop executable could not be located
//! - 4: The child process could not be started

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, missing input files, or invalid config.
pub const USER_ERROR: i32 = 1;

/// A checked hadoop invocation exited with a nonzero status.
pub const COMMAND_FAILURE: i32 = 2;

/// No hadoop executable in the home directory or on the search path.
pub const EXECUTABLE_NOT_FOUND: i32 = 3;

/// The operating system refused to start the child process.
pub const SPAWN_FAILURE: i32 = 4;

/// Convert a child exit code into a value usable as a process exit status.
///
/// Codes outside `0..=255` (including `-1` for signal termination) map to
/// [`USER_ERROR`] so a failing child never looks like success.
pub fn clamp_child_code(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(USER_ERROR as u8)
}
