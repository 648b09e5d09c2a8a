//! Tool configuration model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Name of the executable looked up under `<home>/bin` and on `PATH`.
pub const DEFAULT_TOOL_NAME: &str = "hadoop";

/// Environment variable designating the hadoop installation directory.
pub const DEFAULT_HOME_VAR: &str = "HADOOP_HOME";

/// Environment variable the hadoop launcher appends to its classpath.
pub const DEFAULT_CLASSPATH_VAR: &str = "HADOOP_CLASSPATH";

/// System-wide directory searched last by the resource finder.
pub const DEFAULT_SHARED_RESOURCE_DIR: &str = "/usr/share/java";

/// Job property naming the program a pipes job runs.
pub const DEFAULT_PIPES_EXECUTABLE_KEY: &str = "hadoop.pipes.executable";

/// Configuration for locating and invoking the hadoop tool.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// File name of the executable (default: "hadoop").
    pub tool_name: String,

    /// Home directory variable; `<home>/bin/<tool_name>` is tried first.
    pub home_var: String,

    /// Variable set in the child environment when extra classpath entries
    /// are supplied to a class launch.
    pub classpath_var: String,

    /// Last-resort directory for the resource finder.
    pub shared_resource_dir: PathBuf,

    /// Property key carrying the program path of a pipes job.
    pub pipes_executable_key: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            tool_name: DEFAULT_TOOL_NAME.to_string(),
            home_var: DEFAULT_HOME_VAR.to_string(),
            classpath_var: DEFAULT_CLASSPATH_VAR.to_string(),
            shared_resource_dir: PathBuf::from(DEFAULT_SHARED_RESOURCE_DIR),
            pipes_executable_key: DEFAULT_PIPES_EXECUTABLE_KEY.to_string(),
        }
    }
}
