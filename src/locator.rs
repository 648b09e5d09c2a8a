//! Hadoop executable resolution.
//!
//! Search order, first match wins:
//! 1. `<home_var>/bin/<tool_name>`, when the home variable is set
//! 2. `<dir>/<tool_name>` for each directory on `PATH`, in order; an empty
//!    `PATH` entry stands for the current directory
//!
//! A candidate must exist and be executable. The winner is made absolute.

use crate::config::ToolConfig;
use crate::env::EnvSnapshot;
use crate::error::{HadutError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// Returns true if `path` is a regular file with any execute bit set.
///
/// The bits are not matched against the current user. On non-Unix
/// platforms there is no execute bit, so any regular file counts.
pub fn is_executable(path: &Path) -> bool {
    let Ok(metadata) = std::fs::metadata(path) else {
        return false;
    };
    if !metadata.is_file() {
        return false;
    }

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        metadata.permissions().mode() & 0o111 != 0
    }
    #[cfg(not(unix))]
    {
        true
    }
}

/// Locate the hadoop executable described by `config` within `env`.
///
/// # Returns
///
/// * `Ok(PathBuf)` - Absolute path to an existing, executable file
/// * `Err(HadutError::ExecutableNotFound)` - No candidate matched
pub fn locate_executable(config: &ToolConfig, env: &EnvSnapshot) -> Result<PathBuf> {
    let found = home_candidate(config, env).or_else(|| search_path(config, env));

    let Some(path) = found else {
        return Err(HadutError::ExecutableNotFound {
            tool: config.tool_name.clone(),
            home_var: config.home_var.clone(),
        });
    };

    let path = std::path::absolute(&path).map_err(|e| {
        HadutError::InvalidArgument(format!(
            "cannot make '{}' absolute: {}",
            path.display(),
            e
        ))
    })?;
    debug!("Using {} executable: {}", config.tool_name, path.display());
    Ok(path)
}

fn home_candidate(config: &ToolConfig, env: &EnvSnapshot) -> Option<PathBuf> {
    let home = env.get(&config.home_var)?;
    let candidate = Path::new(home).join("bin").join(&config.tool_name);
    if is_executable(&candidate) {
        Some(candidate)
    } else {
        trace!(
            "{} is set but {} is not executable",
            config.home_var,
            candidate.display()
        );
        None
    }
}

fn search_path(config: &ToolConfig, env: &EnvSnapshot) -> Option<PathBuf> {
    let path_var = env.get("PATH")?;
    let cwd = std::env::current_dir().unwrap_or_default();

    let dirs = std::env::split_paths(path_var).map(|dir| {
        if dir.as_os_str().is_empty() {
            cwd.clone()
        } else {
            dir
        }
    });
    let search = std::env::join_paths(dirs).ok()?;

    match which::which_in(&config.tool_name, Some(search), &cwd) {
        Ok(path) => Some(path),
        Err(e) => {
            trace!("{} not found on PATH: {}", config.tool_name, e);
            None
        }
    }
}
