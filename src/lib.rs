//! Hadut: a process-invocation facade over the `hadoop` command-line tool.
//!
//! Locate the executable once with [`hadoop::Hadoop::init`], then run
//! filesystem commands, jars, pipes jobs, and Java classes through the
//! returned handle. Checked operations turn a nonzero exit into
//! [`error::HadutError::CommandFailed`]; unchecked ones return the code.
//!
//! ```no_run
//! use hadut::args::{Properties, to_args};
//! use hadut::hadoop::Hadoop;
//!
//! let hadoop = Hadoop::init()?;
//! hadoop.dfs(&to_args(["-mkdir", "input"]))?;
//! let code = hadoop.run_pipes("bin/wordcount", "input", "output", &Properties::new(), &[])?;
//! println!("pipes exited with {}", code);
//! # Ok::<(), hadut::error::HadutError>(())
//! ```

pub mod args;
pub mod config;
pub mod env;
pub mod error;
pub mod exit_codes;
pub mod hadoop;
pub mod locator;
pub mod resources;
pub mod runner;

#[cfg(test)]
pub(crate) mod test_support;
