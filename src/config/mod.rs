//! Tool configuration for hadut.
//!
//! This module defines the `ToolConfig` struct that names the hadoop
//! executable, the environment variables consulted when locating and
//! launching it, and the fixed keys/paths the invocation shapes rely on.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! defaults for every field, and validation of config values.

mod model;
mod operations;


pub use model::{
    DEFAULT_CLASSPATH_VAR, DEFAULT_HOME_VAR, DEFAULT_PIPES_EXECUTABLE_KEY,
    DEFAULT_SHARED_RESOURCE_DIR, DEFAULT_TOOL_NAME, ToolConfig,
};
