//! Hadoop invoker.
//!
//! `Hadoop` owns the located executable and runs every invocation shape
//! through a [`ProcessRunner`]. Checked operations turn a nonzero exit into
//! `HadutError::CommandFailed`; unchecked ones hand the exit code back.


use crate::args::{Properties, build_args, build_target_args, with_property};
use crate::config::ToolConfig;
use crate::env::{Classpath, EnvSnapshot, derive_child_env};
use crate::error::{HadutError, Result};
use crate::locator::locate_executable;
use crate::resources;
use crate::runner::{Invocation, OutputMode, ProcessRunner, SystemRunner};
use std::fs::File;
use std::path::{Path, PathBuf};

/// Filesystem-operations subcommand.
pub const DFS: &str = "dfs";
/// Jar-execution subcommand.
pub const JAR: &str = "jar";
/// Pipes-job subcommand.
pub const PIPES: &str = "pipes";
/// Job-control subcommand.
pub const JOB: &str = "job";
/// `job` flag listing active task trackers, one per line.
pub const LIST_ACTIVE_TRACKERS: &str = "-list-active-trackers";

/// Handle to a located hadoop executable.
///
/// Build one with [`Hadoop::init`] and pass it by reference to whatever
/// needs to run hadoop. The handle never changes after construction.
#[derive(Debug, Clone)]
pub struct Hadoop<R: ProcessRunner = SystemRunner> {
    executable: PathBuf,
    config: ToolConfig,
    runner: R,
}

impl Hadoop<SystemRunner> {
    /// Locate hadoop with the default configuration.
    pub fn init() -> Result<Self> {
        Self::init_with(ToolConfig::default())
    }

    /// Locate hadoop using `config` and the current process environment.
    ///
    /// # Returns
    ///
    /// * `Ok(Hadoop)` - Ready to run commands
    /// * `Err(HadutError::ExecutableNotFound)` - No executable in the home directory or on `PATH`
    pub fn init_with(config: ToolConfig) -> Result<Self> {
        config.validate()?;
        let executable = locate_executable(&config, &EnvSnapshot::capture())?;
        Ok(Self::with_runner(executable, config, SystemRunner))
    }
}

impl<R: ProcessRunner> Hadoop<R> {
    /// Build a handle around an already-known executable and runner.
    pub fn with_runner(executable: impl Into<PathBuf>, config: ToolConfig, runner: R) -> Self {
        Self {
            executable: executable.into(),
            config,
            runner,
        }
    }

    pub fn executable(&self) -> &Path {
        &self.executable
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    /// Run `hadoop <subcommand> -D... args...` and return its exit code.
    ///
    /// `Err` only means the child could not be started.
    pub fn run_cmd(
        &self,
        subcommand: &str,
        properties: &Properties,
        args: &[String],
    ) -> Result<i32> {
        let argv = build_args(&self.executable, subcommand, properties, args);
        self.status(Invocation::new(argv))
    }

    /// Like [`run_cmd`](Self::run_cmd), failing on a nonzero exit.
    pub fn run_cmd_checked(
        &self,
        subcommand: &str,
        properties: &Properties,
        args: &[String],
    ) -> Result<()> {
        let code = self.run_cmd(subcommand, properties, args)?;
        self.check(subcommand, code)
    }

    /// Run `hadoop dfs args...`, failing on a nonzero exit.
    ///
    /// ```no_run
    /// use hadut::args::to_args;
    /// use hadut::hadoop::Hadoop;
    ///
    /// let hadoop = Hadoop::init()?;
    /// hadoop.dfs(&to_args(["-mkdir", "/user/me/input"]))?;
    /// # Ok::<(), hadut::error::HadutError>(())
    /// ```
    pub fn dfs(&self, args: &[String]) -> Result<()> {
        self.run_cmd_checked(DFS, &Properties::new(), args)
    }

    /// Check whether `path` exists on the cluster filesystem (`dfs -stat`).
    ///
    /// Child output is discarded; any nonzero exit reads as "absent".
    pub fn path_exists(&self, path: &str) -> Result<bool> {
        let argv = build_args(
            &self.executable,
            DFS,
            &Properties::new(),
            &["-stat".to_string(), path.to_string()],
        );
        let code = self.status(Invocation::new(argv).with_output(OutputMode::Discard))?;
        Ok(code == 0)
    }

    /// Run `hadoop jar <jar> -D... args...`, failing on a nonzero exit.
    ///
    /// The jar path comes right after `jar`; hadoop reads the first operand
    /// of `jar` as the file to run.
    ///
    /// The jar must exist and be readable; otherwise this fails with
    /// `HadutError::InvalidArgument` before anything is spawned.
    pub fn run_jar(&self, jar: &Path, properties: &Properties, args: &[String]) -> Result<()> {
        if !jar.is_file() || File::open(jar).is_err() {
            return Err(HadutError::InvalidArgument(format!(
                "can't read jar file {}",
                jar.display()
            )));
        }

        let argv = build_target_args(&self.executable, JAR, jar.as_os_str(), properties, args);
        let code = self.status(Invocation::new(argv))?;
        self.check(JAR, code)
    }

    /// Run a pipes job and return its exit code.
    ///
    /// The program path is passed as the pipes-executable property on a copy
    /// of `properties`; `-input`/`-output` follow any caller arguments.
    pub fn run_pipes(
        &self,
        program: &str,
        input: &str,
        output: &str,
        properties: &Properties,
        args: &[String],
    ) -> Result<i32> {
        let properties = with_property(properties, &self.config.pipes_executable_key, program);

        let mut pipes_args = Vec::with_capacity(args.len() + 4);
        pipes_args.extend(args.iter().cloned());
        pipes_args.extend([
            "-input".to_string(),
            input.to_string(),
            "-output".to_string(),
            output.to_string(),
        ]);

        self.run_cmd(PIPES, &properties, &pipes_args)
    }

    /// Run a Java class with the hadoop jars on its classpath.
    ///
    /// A non-empty `classpath` is exported to the child through the
    /// configured classpath variable; the parent environment is untouched.
    pub fn run_class(
        &self,
        class_name: &str,
        classpath: Option<&Classpath>,
        properties: &Properties,
        args: &[String],
    ) -> Result<i32> {
        let argv = build_args(&self.executable, class_name, properties, args);
        let mut invocation = Invocation::new(argv);

        if let Some(classpath) = classpath.filter(|cp| !cp.is_empty()) {
            let base = EnvSnapshot::capture();
            let env = derive_child_env(
                base.vars(),
                [(self.config.classpath_var.as_str(), classpath.join()?)],
            );
            invocation = invocation.with_env(env);
        }

        self.status(invocation)
    }

    /// Like [`run_class`](Self::run_class), failing on a nonzero exit.
    pub fn run_class_checked(
        &self,
        class_name: &str,
        classpath: Option<&Classpath>,
        properties: &Properties,
        args: &[String],
    ) -> Result<()> {
        let code = self.run_class(class_name, classpath, properties, args)?;
        self.check(class_name, code)
    }

    /// Number of task trackers the cluster reports as active.
    ///
    /// Counts newline characters in `job -list-active-trackers` output.
    pub fn num_nodes(&self) -> Result<usize> {
        let argv = build_args(
            &self.executable,
            JOB,
            &Properties::new(),
            &[LIST_ACTIVE_TRACKERS.to_string()],
        );
        let outcome = self
            .runner
            .run(&Invocation::new(argv).with_output(OutputMode::Capture))?;

        if !outcome.success() {
            return Err(self.failure(&format!("{} {}", JOB, LIST_ACTIVE_TRACKERS), outcome.code));
        }
        Ok(count_lines(&outcome.stdout))
    }

    /// Look for a resource in `root` (or the cwd), `<root>/build`, then the
    /// configured shared directory.
    pub fn find_file(&self, name: &str, root: Option<&Path>) -> Option<PathBuf> {
        resources::find_file(name, root, &self.config.shared_resource_dir)
    }

    fn status(&self, invocation: Invocation) -> Result<i32> {
        Ok(self.runner.run(&invocation)?.code)
    }

    fn check(&self, what: &str, code: i32) -> Result<()> {
        if code == 0 {
            Ok(())
        } else {
            Err(self.failure(what, code))
        }
    }

    fn failure(&self, what: &str, code: i32) -> HadutError {
        HadutError::CommandFailed {
            command: format!("{} {}", self.config.tool_name, what),
            code,
        }
    }
}

/// Count newline-terminated lines the way tracker listings are counted.
///
/// A final line without a trailing newline is not counted.
pub fn count_lines(output: &str) -> usize {
    output.bytes().filter(|&b| b == b'\n').count()
}
