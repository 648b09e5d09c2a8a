//! Command implementations for hadut.
//!
//! This module routes CLI commands to the library. Every handler returns the
//! process exit code to use on success; errors carry their own exit code.

use crate::cli::{
    ClassArgs, Command, ExistsArgs, FindArgs, JarArgs, OutputArgs, PassthroughArgs, PipesArgs,
    PropertyArgs, RunArgs,
};
use hadut::args::Properties;
use hadut::config::ToolConfig;
use hadut::env::Classpath;
use hadut::error::Result;
use hadut::exit_codes;
use hadut::hadoop::Hadoop;
use hadut::runner::ProcessRunner;
use serde_json::json;

/// Dispatch a command to its implementation.
///
/// `find` needs no executable; every other command locates hadoop first and
/// fails with `ExecutableNotFound` if it cannot.
pub fn dispatch(command: Command, config: ToolConfig) -> Result<i32> {
    if let Command::Find(args) = &command {
        return Ok(cmd_find(args, &config));
    }

    let hadoop = Hadoop::init_with(config)?;
    run_with(&hadoop, command)
}

/// Run a command against an existing handle.
pub fn run_with<R: ProcessRunner>(hadoop: &Hadoop<R>, command: Command) -> Result<i32> {
    match command {
        Command::Which(args) => Ok(cmd_which(hadoop, &args)),
        Command::Run(args) => cmd_run(hadoop, args),
        Command::Dfs(args) => cmd_dfs(hadoop, args),
        Command::Jar(args) => cmd_jar(hadoop, args),
        Command::Pipes(args) => cmd_pipes(hadoop, args),
        Command::Class(args) => cmd_class(hadoop, args),
        Command::Find(args) => Ok(cmd_find(&args, hadoop.config())),
        Command::Nodes(args) => cmd_nodes(hadoop, &args),
        Command::Exists(args) => cmd_exists(hadoop, &args),
    }
}

fn properties_of(args: PropertyArgs) -> Properties {
    args.properties.into_iter().collect()
}

fn cmd_which<R: ProcessRunner>(hadoop: &Hadoop<R>, args: &OutputArgs) -> i32 {
    if args.json {
        println!(
            "{}",
            json!({
                "tool": hadoop.config().tool_name,
                "executable": hadoop.executable().display().to_string(),
            })
        );
    } else {
        println!("{}", hadoop.executable().display());
    }
    exit_codes::SUCCESS
}

fn cmd_run<R: ProcessRunner>(hadoop: &Hadoop<R>, args: RunArgs) -> Result<i32> {
    let properties = properties_of(args.properties);
    if args.check {
        hadoop.run_cmd_checked(&args.subcommand, &properties, &args.args)?;
        Ok(exit_codes::SUCCESS)
    } else {
        hadoop.run_cmd(&args.subcommand, &properties, &args.args)
    }
}

fn cmd_dfs<R: ProcessRunner>(hadoop: &Hadoop<R>, args: PassthroughArgs) -> Result<i32> {
    hadoop.dfs(&args.args)?;
    Ok(exit_codes::SUCCESS)
}

fn cmd_jar<R: ProcessRunner>(hadoop: &Hadoop<R>, args: JarArgs) -> Result<i32> {
    let properties = properties_of(args.properties);
    hadoop.run_jar(&args.jar, &properties, &args.args)?;
    Ok(exit_codes::SUCCESS)
}

fn cmd_pipes<R: ProcessRunner>(hadoop: &Hadoop<R>, args: PipesArgs) -> Result<i32> {
    let properties = properties_of(args.properties);
    hadoop.run_pipes(
        &args.program,
        &args.input,
        &args.output,
        &properties,
        &args.args,
    )
}

fn cmd_class<R: ProcessRunner>(hadoop: &Hadoop<R>, args: ClassArgs) -> Result<i32> {
    let properties = properties_of(args.properties);
    let classpath = Classpath::from(args.classpath);
    if args.check {
        hadoop.run_class_checked(&args.class_name, Some(&classpath), &properties, &args.args)?;
        Ok(exit_codes::SUCCESS)
    } else {
        hadoop.run_class(&args.class_name, Some(&classpath), &properties, &args.args)
    }
}

fn cmd_find(args: &FindArgs, config: &ToolConfig) -> i32 {
    match hadut::resources::find_file(
        &args.name,
        args.root.as_deref(),
        &config.shared_resource_dir,
    ) {
        Some(path) => {
            println!("{}", path.display());
            exit_codes::SUCCESS
        }
        None => {
            eprintln!("{} not found", args.name);
            exit_codes::USER_ERROR
        }
    }
}

fn cmd_nodes<R: ProcessRunner>(hadoop: &Hadoop<R>, args: &OutputArgs) -> Result<i32> {
    let count = hadoop.num_nodes()?;
    if args.json {
        println!("{}", json!({ "active_trackers": count }));
    } else {
        println!("{}", count);
    }
    Ok(exit_codes::SUCCESS)
}

fn cmd_exists<R: ProcessRunner>(hadoop: &Hadoop<R>, args: &ExistsArgs) -> Result<i32> {
    if hadoop.path_exists(&args.path)? {
        Ok(exit_codes::SUCCESS)
    } else {
        Ok(exit_codes::USER_ERROR)
    }
}
