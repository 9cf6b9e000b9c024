//! Directory creation and listing
//!
//! io_uring has no directory opcodes (no GETDENTS64, see
//! <https://lwn.net/Articles/878873/>), so these operations dispatch the
//! blocking `std::fs` calls through the runtime instead of blocking the
//! caller. If the kernel grows directory support the dispatch can be swapped
//! without changing the calling code.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{FsError, Result};
use crate::path::effective_path;

/// Parameters for [`read_directory`].
#[derive(Debug, Clone)]
pub struct DirectoryRequest {
    path: PathBuf,
    base_dir: Option<PathBuf>,
}

impl DirectoryRequest {
    /// Create a request listing the given path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            base_dir: None,
        }
    }

    /// Resolve the path relative to `dir` (unless the path is absolute,
    /// in which case the path wins).
    #[must_use]
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }
}

/// A single child of a listed directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    /// Entry name as reported by the platform. Names that are not valid
    /// Unicode are converted lossily; `full_path` keeps the raw form.
    pub name: String,
    /// Absolute path of the entry: the resolved listing path joined with
    /// the entry name.
    pub full_path: PathBuf,
}

/// Create a single directory level at `path`.
///
/// Non-recursive: the parent must already exist. Use
/// [`create_directory_all`] to create missing parents as well.
///
/// # Errors
///
/// Returns `Err(FsError)` if:
/// - A parent segment is missing ([`FsError::NotFound`])
/// - The directory already exists ([`FsError::AlreadyExists`])
/// - Permission is denied
/// - Any other I/O error occurs
pub async fn create_directory(path: impl AsRef<Path>) -> Result<()> {
    let target = path.as_ref().to_path_buf();
    debug!(path = %target.display(), "creating directory");

    compio::runtime::spawn(async move {
        std::fs::create_dir(&target).map_err(|e| FsError::from_io(&target, e))
    })
    .await
    .map_err(|e| FsError::Runtime {
        detail: format!("{e:?}"),
    })?
}

/// Create a directory at `path`, including any missing parents.
///
/// Succeeds as a no-op when the directory already exists.
///
/// # Errors
///
/// Returns `Err(FsError)` if permission is denied or another I/O error
/// occurs.
pub async fn create_directory_all(path: impl AsRef<Path>) -> Result<()> {
    let target = path.as_ref().to_path_buf();
    debug!(path = %target.display(), "creating directory and parents");

    compio::runtime::spawn(async move {
        std::fs::create_dir_all(&target).map_err(|e| FsError::from_io(&target, e))
    })
    .await
    .map_err(|e| FsError::Runtime {
        detail: format!("{e:?}"),
    })?
}

/// List the immediate children of a directory.
///
/// The effective path is the request path joined with the base directory
/// (see [`crate::path::effective_path`]). One level only, no recursion.
/// Entries come back in the order the platform returned them; callers that
/// need a stable order must sort.
///
/// # Errors
///
/// Returns `Err(FsError)` if:
/// - The request path is empty
/// - The directory does not exist ([`FsError::NotFound`])
/// - Permission is denied
/// - Any other I/O error occurs (including while iterating entries)
pub async fn read_directory(request: DirectoryRequest) -> Result<Vec<DirectoryEntry>> {
    let resolved = effective_path(&request.path, request.base_dir.as_deref())?;
    debug!(path = %resolved.display(), "listing directory");

    let listing_path = resolved.clone();
    let entries: Vec<DirectoryEntry> = compio::runtime::spawn(async move {
        let mut entries = Vec::new();
        let dir =
            std::fs::read_dir(&listing_path).map_err(|e| FsError::from_io(&listing_path, e))?;

        for entry in dir {
            let entry = entry.map_err(|e| FsError::from_io(&listing_path, e))?;
            let file_name = entry.file_name();
            entries.push(DirectoryEntry {
                name: file_name.to_string_lossy().into_owned(),
                full_path: listing_path.join(&file_name),
            });
        }

        Ok(entries)
    })
    .await
    .map_err(|e| FsError::Runtime {
        detail: format!("{e:?}"),
    })??;

    debug!(path = %resolved.display(), count = entries.len(), "directory listed");
    Ok(entries)
}
