//! Environment snapshots and child-environment derivation.
//!
//! The process environment is only ever read. Anything handed to a child
//! process is an owned copy built by [`derive_child_env`].

use crate::error::{HadutError, Result};
use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

/// Owned environment mapping.
pub type EnvMap = BTreeMap<OsString, OsString>;

/// Point-in-time copy of an environment.
///
/// The executable locator reads from a snapshot rather than from
/// `std::env` directly, so tests can describe any environment without
/// touching the real one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvSnapshot {
    vars: EnvMap,
}

impl EnvSnapshot {
    /// Capture the current process environment.
    pub fn capture() -> Self {
        Self {
            vars: std::env::vars_os().collect(),
        }
    }

    /// Build a snapshot from explicit key/value pairs.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<OsString>,
        V: Into<OsString>,
    {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Look up a variable. Empty values count as unset.
    pub fn get<K: AsRef<OsStr>>(&self, key: K) -> Option<&OsStr> {
        self.vars
            .get(key.as_ref())
            .map(OsString::as_os_str)
            .filter(|v| !v.is_empty())
    }

    /// All variables in the snapshot.
    pub fn vars(&self) -> &EnvMap {
        &self.vars
    }
}

/// Derive a child environment from `base` with `overrides` applied.
///
/// Returns a new map; `base` is left untouched.
pub fn derive_child_env<I, K, V>(base: &EnvMap, overrides: I) -> EnvMap
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<OsString>,
    V: Into<OsString>,
{
    let mut env = base.clone();
    env.extend(overrides.into_iter().map(|(k, v)| (k.into(), v.into())));
    env
}

/// Extra classpath entries for a class launch, in search order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Classpath {
    paths: Vec<PathBuf>,
}

impl Classpath {
    /// Build a classpath from an ordered list of entries.
    pub fn new<I, P>(paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    /// A classpath with a single entry.
    pub fn single<P: Into<PathBuf>>(path: P) -> Self {
        Self {
            paths: vec![path.into()],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Join the entries with the platform path separator (`:` on Unix).
    ///
    /// Fails if an entry itself contains the separator.
    pub fn join(&self) -> Result<OsString> {
        std::env::join_paths(&self.paths).map_err(|e| {
            HadutError::InvalidArgument(format!("invalid classpath entry: {}", e))
        })
    }
}

impl From<&str> for Classpath {
    fn from(path: &str) -> Self {
        Self::single(path)
    }
}

impl From<&Path> for Classpath {
    fn from(path: &Path) -> Self {
        Self::single(path)
    }
}

impl From<PathBuf> for Classpath {
    fn from(path: PathBuf) -> Self {
        Self::single(path)
    }
}

impl From<Vec<PathBuf>> for Classpath {
    fn from(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for Classpath {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self::new(iter)
    }
}
