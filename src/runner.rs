//! Child process execution.
//!
//! `ProcessRunner` is the single seam between hadut and the operating
//! system. `SystemRunner` spawns real processes; tests substitute a runner
//! that records invocations instead.

use crate::args::display_command;
use crate::env::EnvMap;
use crate::error::{HadutError, Result};
use std::ffi::OsString;
use std::process::{Command, Stdio};
use tracing::debug;

/// What to do with the child's standard streams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Child writes straight to the parent's stdout/stderr.
    #[default]
    Inherit,
    /// Both streams go to the null device.
    Discard,
    /// Stdout is collected and returned; stderr is inherited.
    Capture,
}

/// One child process to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Full argument vector; element 0 is the program.
    pub argv: Vec<OsString>,
    /// Replacement environment. `None` inherits the parent's.
    pub env: Option<EnvMap>,
    pub output: OutputMode,
}

impl Invocation {
    pub fn new<I, S>(argv: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            argv: argv.into_iter().map(Into::into).collect(),
            env: None,
            output: OutputMode::Inherit,
        }
    }

    /// Run the child with exactly this environment.
    pub fn with_env(mut self, env: EnvMap) -> Self {
        self.env = Some(env);
        self
    }

    pub fn with_output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    /// Shell-quoted command line, for logs and error messages.
    pub fn command_line(&self) -> String {
        display_command(&self.argv)
    }
}

/// How a finished child exited.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessOutcome {
    /// Exit code; `-1` when the child was terminated by a signal.
    pub code: i32,
    /// Captured stdout (empty unless `OutputMode::Capture` was requested).
    pub stdout: String,
}

impl ProcessOutcome {
    pub fn success(&self) -> bool {
        self.code == 0
    }
}

/// Spawns a child, blocks until it exits, and reports the outcome.
pub trait ProcessRunner {
    /// Run `invocation` to completion.
    ///
    /// # Returns
    ///
    /// * `Ok(ProcessOutcome)` - The child ran; any exit code is reported here
    /// * `Err(HadutError::SpawnFailed)` - The child could not be started
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutcome>;
}

impl<R: ProcessRunner + ?Sized> ProcessRunner for &R {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutcome> {
        (**self).run(invocation)
    }
}

/// Runner backed by `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutcome> {
        let Some((program, args)) = invocation.argv.split_first() else {
            return Err(HadutError::InvalidArgument(
                "cannot run an empty command".to_string(),
            ));
        };

        let mut command = Command::new(program);
        command.args(args);

        if let Some(env) = &invocation.env {
            command.env_clear().envs(env);
        }

        match invocation.output {
            OutputMode::Inherit => {}
            OutputMode::Discard => {
                command.stdout(Stdio::null()).stderr(Stdio::null());
            }
            OutputMode::Capture => {
                command.stdout(Stdio::piped());
            }
        }

        debug!("running {}", invocation.command_line());

        let spawn_error = |e: std::io::Error| HadutError::SpawnFailed {
            command: program.to_string_lossy().into_owned(),
            reason: e.to_string(),
        };

        if invocation.output == OutputMode::Capture {
            let output = command.output().map_err(spawn_error)?;
            Ok(ProcessOutcome {
                code: output.status.code().unwrap_or(-1),
                stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            })
        } else {
            let status = command.status().map_err(spawn_error)?;
            Ok(ProcessOutcome {
                code: status.code().unwrap_or(-1),
                stdout: String::new(),
            })
        }
    }
}
