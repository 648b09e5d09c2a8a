use crate::error::Result;
use crate::runner::{Invocation, ProcessOutcome, ProcessRunner};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Create `dir/name` as an executable script that exits 0.
pub(crate) fn write_executable(dir: &Path, name: &str) -> PathBuf {
    write_script(dir, name, "exit 0\n")
}

/// Create `dir/name` as an executable `/bin/sh` script with `body`.
pub(crate) fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    std::fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}", body)).unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    }

    path
}

/// Create `dir/name` as a plain, non-executable file.
pub(crate) fn write_plain_file(dir: &Path, name: &str) -> PathBuf {
    std::fs::create_dir_all(dir).unwrap();
    let path = dir.join(name);
    std::fs::write(&path, "data\n").unwrap();

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o644)).unwrap();
    }

    path
}

/// Runner that records invocations and replays scripted outcomes.
///
/// With no scripted outcomes left, every run exits 0 with empty stdout.
#[derive(Default)]
pub(crate) struct FakeRunner {
    calls: RefCell<Vec<Invocation>>,
    outcomes: RefCell<VecDeque<ProcessOutcome>>,
}

impl FakeRunner {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Queue an exit code for the next run.
    pub(crate) fn exits_with(self, code: i32) -> Self {
        self.outcomes.borrow_mut().push_back(ProcessOutcome {
            code,
            stdout: String::new(),
        });
        self
    }

    /// Queue an exit code and stdout for the next run.
    pub(crate) fn prints(self, code: i32, stdout: &str) -> Self {
        self.outcomes.borrow_mut().push_back(ProcessOutcome {
            code,
            stdout: stdout.to_string(),
        });
        self
    }

    pub(crate) fn spawn_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub(crate) fn calls(&self) -> Vec<Invocation> {
        self.calls.borrow().clone()
    }

    pub(crate) fn last_call(&self) -> Invocation {
        self.calls
            .borrow()
            .last()
            .cloned()
            .expect("no process was spawned")
    }
}

impl ProcessRunner for FakeRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutcome> {
        self.calls.borrow_mut().push(invocation.clone());
        Ok(self.outcomes.borrow_mut().pop_front().unwrap_or_default())
    }
}
