//! # aiofs
//!
//! A small asynchronous convenience layer over the platform's filesystem
//! primitives:
//! - File reads with an explicit text encoding and optional JSON decoding
//! - File writes (create or truncate, flushed to disk)
//! - Directory creation (single level or with parents)
//! - Directory listing with resolved absolute paths per entry
//!
//! Every operation is a self-contained, single-attempt async call built on
//! the compio runtime. Failures surface as a typed [`FsError`] preserving the
//! platform's cause: a missing file is [`FsError::NotFound`], never an empty
//! success.
//!
//! ## Example
//!
//! ```rust,no_run
//! use aiofs::{read_file, write_file, ReadRequest};
//!
//! # async fn example() -> aiofs::Result<()> {
//! write_file("config.json", r#"{"port": 8080}"#).await?;
//!
//! let data = read_file(ReadRequest::new("config.json").parse_json(true)).await?;
//! if let Some(json) = &data.json {
//!     println!("port: {}", json["port"]);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! Operations issued concurrently are not ordered with respect to each other;
//! callers serialize dependent operations themselves.

pub mod directory;
pub mod error;
pub mod path;
pub mod read;
pub mod write;

// Re-export main types
pub use directory::{
    create_directory, create_directory_all, read_directory, DirectoryEntry, DirectoryRequest,
};
pub use error::{FsError, Result};
pub use path::effective_path;
pub use read::{read_file, Encoding, FileContent, FileData, ReadRequest};
pub use write::write_file;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Check whether a path exists.
///
/// True iff metadata can be retrieved for `path`; an unreadable path
/// (e.g. permission denied on a parent) reports `false`.
pub async fn exists(path: impl AsRef<std::path::Path>) -> bool {
    compio::fs::metadata(path.as_ref()).await.is_ok()
}
