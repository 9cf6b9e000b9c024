//! Effective-path resolution
//!
//! Read and listing operations accept a path plus an optional base directory.
//! The effective path is the platform-normalized join of the two, made
//! absolute against the process working directory. Resolution is purely
//! lexical: symlinks are left to the platform.

use std::path::{Path, PathBuf};

use crate::error::{FsError, Result};

/// Resolve the effective path for an operation.
///
/// If `base_dir` is given and `path` is relative, the effective path is
/// `base_dir` joined with `path`. An absolute `path` always wins and
/// `base_dir` is ignored. The result is absolutized against the process
/// working directory without touching the filesystem.
///
/// # Errors
///
/// Returns [`FsError::EmptyPath`] if `path` is empty, or [`FsError::Io`] if
/// the working directory needed for absolutization cannot be determined.
pub fn effective_path(path: &Path, base_dir: Option<&Path>) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(FsError::EmptyPath);
    }

    let joined = match base_dir {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.to_path_buf(),
    };

    std::path::absolute(&joined).map_err(|e| FsError::from_io(&joined, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_joins_relative_path_with_base() {
        let resolved = effective_path(Path::new("y.txt"), Some(Path::new("/tmp/x"))).unwrap();
        assert_eq!(resolved, PathBuf::from("/tmp/x/y.txt"));
    }

    #[test]
    fn test_absolute_path_wins_over_base() {
        let resolved =
            effective_path(Path::new("/etc/config.json"), Some(Path::new("/tmp/x"))).unwrap();
        assert_eq!(resolved, PathBuf::from("/etc/config.json"));
    }

    #[test]
    fn test_no_base_keeps_absolute_path() {
        let resolved = effective_path(Path::new("/var/log/app.log"), None).unwrap();
        assert_eq!(resolved, PathBuf::from("/var/log/app.log"));
    }

    #[test]
    fn test_relative_path_without_base_is_absolutized() {
        let resolved = effective_path(Path::new("data.bin"), None).unwrap();
        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("data.bin"));
    }

    #[test]
    fn test_empty_path_is_rejected() {
        let result = effective_path(Path::new(""), Some(Path::new("/tmp")));
        assert!(matches!(result, Err(FsError::EmptyPath)));
    }

    #[test]
    fn test_nested_relative_join() {
        let resolved =
            effective_path(Path::new("conf/app.json"), Some(Path::new("/opt/app"))).unwrap();
        assert_eq!(resolved, PathBuf::from("/opt/app/conf/app.json"));
    }
}
