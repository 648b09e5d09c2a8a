//! Locating jars and other resource files on local disk.

use crate::config::DEFAULT_SHARED_RESOURCE_DIR;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Candidate locations for `name`, highest priority first.
///
/// `root` defaults to the current working directory; if that cannot be
/// determined only the shared directory is searched.
pub fn candidate_paths(name: &str, root: Option<&Path>, shared_dir: &Path) -> Vec<PathBuf> {
    let root = match root {
        Some(root) => Some(root.to_path_buf()),
        None => std::env::current_dir().ok(),
    };

    let mut candidates = Vec::with_capacity(3);
    if let Some(root) = root {
        candidates.push(root.join(name));
        candidates.push(root.join("build").join(name));
    }
    candidates.push(shared_dir.join(name));
    candidates
}

/// Find `name` in `root` (or the cwd), then `<root>/build`, then `shared_dir`.
///
/// Only existence is checked. Returns `None` when no candidate exists.
pub fn find_file(name: &str, root: Option<&Path>, shared_dir: &Path) -> Option<PathBuf> {
    let found = candidate_paths(name, root, shared_dir)
        .into_iter()
        .find(|candidate| candidate.exists());
    if let Some(path) = &found {
        debug!("found {} at {}", name, path.display());
    }
    found
}

/// [`find_file`] with the default shared directory (`/usr/share/java`).
pub fn find_jar(name: &str, root: Option<&Path>) -> Option<PathBuf> {
    find_file(name, root, Path::new(DEFAULT_SHARED_RESOURCE_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{DirGuard, write_plain_file};
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_root_dir_wins() {
        let root = TempDir::new().unwrap();
        let shared = TempDir::new().unwrap();
        let expected = write_plain_file(root.path(), "x.jar");
        write_plain_file(&root.path().join("build"), "x.jar");
        write_plain_file(shared.path(), "x.jar");

        let found = find_file("x.jar", Some(root.path()), shared.path());
        assert_eq!(found, Some(expected));
    }

    #[test]
    fn test_build_dir_is_second() {
        let root = TempDir::new().unwrap();
        let shared = TempDir::new().unwrap();
        let expected = write_plain_file(&root.path().join("build"), "x.jar");
        write_plain_file(shared.path(), "x.jar");

        let found = find_file("x.jar", Some(root.path()), shared.path());
        assert_eq!(found, Some(expected));
    }

    #[test]
    fn test_shared_dir_is_last() {
        let root = TempDir::new().unwrap();
        let shared = TempDir::new().unwrap();
        let expected = write_plain_file(shared.path(), "x.jar");

        let found = find_file("x.jar", Some(root.path()), shared.path());
        assert_eq!(found, Some(expected));
    }

    #[test]
    fn test_missing_returns_none() {
        let root = TempDir::new().unwrap();
        let shared = TempDir::new().unwrap();
        assert_eq!(find_file("x.jar", Some(root.path()), shared.path()), None);
    }

    #[test]
    fn test_directories_count_as_existing() {
        let root = TempDir::new().unwrap();
        let shared = TempDir::new().unwrap();
        std::fs::create_dir(root.path().join("conf")).unwrap();

        let found = find_file("conf", Some(root.path()), shared.path());
        assert_eq!(found, Some(root.path().join("conf")));
    }

    #[test]
    #[serial]
    fn test_defaults_to_current_dir() {
        let cwd = TempDir::new().unwrap();
        let shared = TempDir::new().unwrap();
        write_plain_file(&cwd.path().join("build"), "job.jar");
        let _guard = DirGuard::new(cwd.path());

        let found = find_file("job.jar", None, shared.path()).unwrap();
        let expected = std::env::current_dir().unwrap().join("build").join("job.jar");
        assert_eq!(found, expected);
    }

    #[test]
    fn test_candidate_order() {
        let candidates = candidate_paths("x.jar", Some(Path::new("/r")), Path::new("/usr/share/java"));
        assert_eq!(
            candidates,
            vec![
                PathBuf::from("/r/x.jar"),
                PathBuf::from("/r/build/x.jar"),
                PathBuf::from("/usr/share/java/x.jar"),
            ]
        );
    }

    #[test]
    fn test_find_jar_uses_default_shared_dir() {
        let root = TempDir::new().unwrap();
        let expected = write_plain_file(&root.path().join("build"), "hadut-test-only.jar");
        assert_eq!(find_jar("hadut-test-only.jar", Some(root.path())), Some(expected));
    }
}
