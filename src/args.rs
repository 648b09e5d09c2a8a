//! Argument-vector construction for hadoop invocations.
//!
//! Everything here is pure: inputs are borrowed and never modified.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Configuration overrides passed to hadoop as `-D key=value` pairs.
pub type Properties = BTreeMap<String, String>;

/// Flag introducing a property override.
pub const PROPERTY_FLAG: &str = "-D";

/// Render `properties` as contiguous `"-D", "key=value"` pairs.
pub fn property_args(properties: &Properties) -> Vec<String> {
    properties
        .iter()
        .flat_map(|(key, value)| [PROPERTY_FLAG.to_string(), format!("{}={}", key, value)])
        .collect()
}

/// Build the full argument vector for one hadoop invocation.
///
/// Layout: `[executable, subcommand, -D k=v ..., args ...]`, so the result
/// always holds `2 + 2 * properties.len() + args.len()` elements.
///
/// The executable path is kept as an `OsString`, so paths that are not
/// valid UTF-8 reach the OS unchanged.
pub fn build_args(
    executable: &Path,
    subcommand: &str,
    properties: &Properties,
    args: &[String],
) -> Vec<OsString> {
    assemble(executable, subcommand, None, properties, args)
}

/// Like [`build_args`], with one operand placed directly after the
/// subcommand and before any `-D` flags.
///
/// Layout: `[executable, subcommand, target, -D k=v ..., args ...]`. This is
/// the shape `hadoop jar <jar>` requires.
pub fn build_target_args(
    executable: &Path,
    subcommand: &str,
    target: &OsStr,
    properties: &Properties,
    args: &[String],
) -> Vec<OsString> {
    assemble(executable, subcommand, Some(target), properties, args)
}

fn assemble(
    executable: &Path,
    subcommand: &str,
    target: Option<&OsStr>,
    properties: &Properties,
    args: &[String],
) -> Vec<OsString> {
    let mut argv = Vec::with_capacity(3 + 2 * properties.len() + args.len());
    argv.push(executable.as_os_str().to_owned());
    argv.push(OsString::from(subcommand));
    argv.extend(target.map(OsStr::to_owned));
    argv.extend(property_args(properties).into_iter().map(OsString::from));
    argv.extend(args.iter().map(OsString::from));
    argv
}

/// Copy `properties` and set one extra key on the copy.
pub fn with_property(properties: &Properties, key: &str, value: &str) -> Properties {
    let mut copy = properties.clone();
    copy.insert(key.to_string(), value.to_string());
    copy
}

/// Convert any displayable values into positional arguments.
///
/// ```
/// use hadut::args::to_args;
///
/// assert_eq!(to_args(["-ls", "/user"]), vec!["-ls", "/user"]);
/// assert_eq!(to_args([1, 2]), vec!["1", "2"]);
/// ```
pub fn to_args<I, T>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: ToString,
{
    values.into_iter().map(|v| v.to_string()).collect()
}

/// Render an argument vector as a single shell-quoted line.
///
/// For display only; non-UTF-8 bytes are replaced.
pub fn display_command<S: AsRef<OsStr>>(argv: &[S]) -> String {
    shell_words::join(argv.iter().map(|arg| arg.as_ref().to_string_lossy()))
}
