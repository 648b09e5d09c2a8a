//! CLI argument parsing for hadut.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; implementations are in the
//! `commands` module.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Hadut: run hadoop commands with consistent argument building and
/// exit-code handling.
///
/// The hadoop executable is taken from `$HADOOP_HOME/bin/hadoop` if present,
/// otherwise from the first match on `PATH`.
#[derive(Parser, Debug)]
#[command(name = "hadut")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// YAML file overriding the tool name, variable names, and shared directory.
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for hadut.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the path of the hadoop executable that would be used.
    Which(OutputArgs),

    /// Run an arbitrary hadoop subcommand.
    ///
    /// Exits with hadoop's exit code unless `--check` is given.
    Run(RunArgs),

    /// Run `hadoop dfs` with the given arguments.
    Dfs(PassthroughArgs),

    /// Run a jar with `hadoop jar`.
    Jar(JarArgs),

    /// Submit a pipes job. Exits with hadoop's exit code.
    Pipes(PipesArgs),

    /// Run a Java class with the hadoop jars on its classpath.
    Class(ClassArgs),

    /// Find a file in the root directory, its `build/` subdirectory, or the
    /// shared resource directory.
    Find(FindArgs),

    /// Print the number of active task trackers.
    Nodes(OutputArgs),

    /// Check whether a path exists on the cluster filesystem.
    ///
    /// Exits 0 if it exists, 1 otherwise.
    Exists(ExistsArgs),
}

/// Output format flags shared by informational commands.
#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Emit JSON instead of plain text.
    #[arg(long)]
    pub json: bool,
}

/// `-D key=value` overrides shared by job-style commands.
#[derive(Args, Debug, Default)]
pub struct PropertyArgs {
    /// Property override passed to hadoop (repeatable).
    #[arg(short = 'D', value_name = "KEY=VALUE", value_parser = parse_property)]
    pub properties: Vec<(String, String)>,
}

/// Arguments for the `run` command.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Hadoop subcommand (e.g. `job`, `fs`, `version`).
    pub subcommand: String,

    #[command(flatten)]
    pub properties: PropertyArgs,

    /// Fail with a hadut error instead of passing through a nonzero exit code.
    #[arg(long)]
    pub check: bool,

    /// Arguments appended after the properties. Put arguments starting
    /// with `-` after `--`.
    pub args: Vec<String>,
}

/// Arguments passed through verbatim.
#[derive(Args, Debug)]
pub struct PassthroughArgs {
    /// Arguments for the subcommand (e.g. `-- -ls /user`).
    pub args: Vec<String>,
}

/// Arguments for the `jar` command.
#[derive(Args, Debug)]
pub struct JarArgs {
    /// Path to the jar file.
    pub jar: PathBuf,

    #[command(flatten)]
    pub properties: PropertyArgs,

    /// Arguments for the jar's main class.
    pub args: Vec<String>,
}

/// Arguments for the `pipes` command.
#[derive(Args, Debug)]
pub struct PipesArgs {
    /// Program to run, as a path on the cluster filesystem.
    #[arg(long)]
    pub program: String,

    /// Job input path.
    #[arg(long)]
    pub input: String,

    /// Job output path.
    #[arg(long)]
    pub output: String,

    #[command(flatten)]
    pub properties: PropertyArgs,

    /// Extra arguments placed before `-input`/`-output`.
    pub args: Vec<String>,
}

/// Arguments for the `class` command.
#[derive(Args, Debug)]
pub struct ClassArgs {
    /// Fully-qualified class name.
    pub class_name: String,

    /// Extra classpath entry (repeatable, searched in order).
    #[arg(long = "classpath", value_name = "PATH")]
    pub classpath: Vec<PathBuf>,

    #[command(flatten)]
    pub properties: PropertyArgs,

    /// Fail with a hadut error instead of passing through a nonzero exit code.
    #[arg(long)]
    pub check: bool,

    /// Arguments for the class's main method.
    pub args: Vec<String>,
}

/// Arguments for the `find` command.
#[derive(Args, Debug)]
pub struct FindArgs {
    /// File name to look for.
    pub name: String,

    /// Directory searched first (default: current directory).
    #[arg(long)]
    pub root: Option<PathBuf>,
}

/// Arguments for the `exists` command.
#[derive(Args, Debug)]
pub struct ExistsArgs {
    /// Path on the cluster filesystem.
    pub path: String,
}

fn parse_property(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
        _ => Err(format!("expected KEY=VALUE, got '{}'", s)),
    }
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
