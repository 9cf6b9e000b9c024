//! Error types for filesystem operations
//!
//! Every operation in this crate reports failure through [`FsError`], which
//! preserves the platform's failure cause instead of collapsing it into a
//! boolean. Platform I/O errors are classified by [`std::io::ErrorKind`] so
//! callers can tell a missing path from a permission problem without string
//! matching.

use std::io;
use std::path::{Path, PathBuf};

/// Result type used by all operations in this crate.
pub type Result<T> = std::result::Result<T, FsError>;

/// Failure cause of a filesystem operation.
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    /// A request carried an empty path.
    #[error("path must not be empty")]
    EmptyPath,

    /// The target path does not exist (file read, directory listing, or a
    /// missing parent during directory creation).
    #[error("not found: {}", .path.display())]
    NotFound {
        /// Path the operation was attempted on
        path: PathBuf,
    },

    /// Insufficient rights to read, write, or create the target.
    #[error("permission denied: {}", .path.display())]
    PermissionDenied {
        /// Path the operation was attempted on
        path: PathBuf,
    },

    /// Directory creation target is already present.
    #[error("already exists: {}", .path.display())]
    AlreadyExists {
        /// Path the operation was attempted on
        path: PathBuf,
    },

    /// File content could not be decoded as UTF-8 text.
    #[error("invalid UTF-8 in {}", .path.display())]
    InvalidUtf8 {
        /// Path of the file whose content failed to decode
        path: PathBuf,
    },

    /// File content could not be decoded as JSON.
    #[error("invalid JSON in {}: {source}", .path.display())]
    Json {
        /// Path of the file whose content failed to decode
        path: PathBuf,
        /// Underlying decode error
        #[source]
        source: serde_json::Error,
    },

    /// Any other platform I/O failure (disk full, path too long, ...),
    /// with its cause preserved.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Path the operation was attempted on
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A blocking call dispatched to the runtime failed to complete.
    #[error("runtime task failed: {detail}")]
    Runtime {
        /// Debug description of the dispatch failure
        detail: String,
    },
}

impl FsError {
    /// Classify a platform I/O error for the given path.
    ///
    /// `NotFound`, `PermissionDenied`, and `AlreadyExists` kinds map to their
    /// dedicated variants; everything else is carried in [`FsError::Io`] with
    /// the source error intact.
    #[must_use]
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            io::ErrorKind::AlreadyExists => Self::AlreadyExists { path },
            _ => Self::Io { path, source },
        }
    }

    /// Returns `true` if this error is [`FsError::NotFound`].
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Returns `true` if this error is [`FsError::AlreadyExists`].
    #[must_use]
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::AlreadyExists { .. })
    }
}
