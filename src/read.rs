//! File reading with encoding selection and optional JSON decoding
//!
//! Reads are whole-file, single-attempt operations: open, size via metadata,
//! then a positional read loop until EOF. Decoding runs after the whole file
//! is in memory.

use std::path::{Path, PathBuf};

use compio::io::AsyncReadAt;
use tracing::{debug, warn};

use crate::error::{FsError, Result};
use crate::path::effective_path;

/// Text encoding applied to file content on read.
///
/// The default is UTF-8. The encoding is part of the request, not a fallback
/// inside the read path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Encoding {
    /// Decode content as UTF-8 text (the default). Fails on invalid UTF-8.
    #[default]
    Utf8,
    /// Decode content as Latin-1 (ISO-8859-1) text. Never fails; every byte
    /// maps to exactly one character.
    Latin1,
    /// Skip text decoding and return the raw bytes.
    Binary,
}

/// Parameters for [`read_file`].
///
/// # Examples
///
/// ```rust,no_run
/// use aiofs::{read_file, Encoding, ReadRequest};
///
/// # async fn example() -> aiofs::Result<()> {
/// let request = ReadRequest::new("settings.json")
///     .base_dir("/etc/myapp")
///     .parse_json(true);
/// let data = read_file(request).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ReadRequest {
    path: PathBuf,
    base_dir: Option<PathBuf>,
    encoding: Encoding,
    parse_json: bool,
}

impl ReadRequest {
    /// Create a request for the given path with default settings
    /// (no base directory, UTF-8 encoding, no JSON decoding).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            base_dir: None,
            encoding: Encoding::default(),
            parse_json: false,
        }
    }

    /// Resolve the path relative to `dir` (unless the path is absolute,
    /// in which case the path wins).
    #[must_use]
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Select the text encoding used to decode the content.
    #[must_use]
    pub fn encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Additionally decode the content as JSON after reading.
    #[must_use]
    pub fn parse_json(mut self, parse_json: bool) -> Self {
        self.parse_json = parse_json;
        self
    }
}

/// File content after decoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileContent {
    /// Decoded text ([`Encoding::Utf8`] or [`Encoding::Latin1`]).
    Text(String),
    /// Raw bytes ([`Encoding::Binary`]).
    Bytes(Vec<u8>),
}

impl FileContent {
    /// The decoded text, or `None` for binary content.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            Self::Bytes(_) => None,
        }
    }

    /// Content as bytes. For text content this is its UTF-8 representation,
    /// which for Latin-1 decoded files differs from the bytes on disk.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Bytes(bytes) => bytes,
        }
    }

    /// Whether the file was empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::Bytes(bytes) => bytes.is_empty(),
        }
    }
}

/// Result of a successful [`read_file`] call.
#[derive(Debug, Clone)]
pub struct FileData {
    /// Decoded file content.
    pub content: FileContent,
    /// Decoded JSON value. `Some` only when the request asked for JSON
    /// decoding and the content was non-empty.
    pub json: Option<serde_json::Value>,
}

/// Read a file, decoding its content per the request.
///
/// The effective path is the request path joined with the base directory
/// (see [`crate::path::effective_path`]). The whole file is read in one
/// operation; there is no streaming or partial-read mode.
///
/// # Errors
///
/// Returns `Err(FsError)` if:
/// - The request path is empty
/// - The file does not exist ([`FsError::NotFound`])
/// - Permission is denied ([`FsError::PermissionDenied`])
/// - Content is not valid UTF-8 under [`Encoding::Utf8`]
///   ([`FsError::InvalidUtf8`])
/// - JSON decoding was requested and the content is malformed
///   ([`FsError::Json`])
/// - Any other I/O error occurs
pub async fn read_file(request: ReadRequest) -> Result<FileData> {
    let resolved = effective_path(&request.path, request.base_dir.as_deref())?;
    debug!(
        path = %resolved.display(),
        encoding = ?request.encoding,
        parse_json = request.parse_json,
        "reading file"
    );

    let raw = read_file_bytes(&resolved).await?;

    let content = match request.encoding {
        Encoding::Utf8 => {
            let text = String::from_utf8(raw).map_err(|_| FsError::InvalidUtf8 {
                path: resolved.clone(),
            })?;
            FileContent::Text(text)
        }
        Encoding::Latin1 => FileContent::Text(raw.iter().map(|&b| b as char).collect()),
        Encoding::Binary => FileContent::Bytes(raw),
    };

    let json = if request.parse_json && !content.is_empty() {
        Some(decode_json(&resolved, &content)?)
    } else {
        None
    };

    Ok(FileData { content, json })
}

/// Read entire file content as raw bytes.
async fn read_file_bytes(path: &Path) -> Result<Vec<u8>> {
    let file = compio::fs::File::open(path)
        .await
        .map_err(|e| FsError::from_io(path, e))?;

    // Get file size for allocation
    let metadata = file
        .metadata()
        .await
        .map_err(|e| FsError::from_io(path, e))?;
    let file_size = metadata.len() as usize;

    let mut content = vec![0u8; file_size];
    let mut offset = 0u64;

    // Read entire file
    while offset < file_size as u64 {
        let remaining = file_size - offset as usize;
        let chunk_buffer = vec![0u8; remaining];

        let buf_result = file.read_at(chunk_buffer, offset).await;
        let bytes_read = buf_result.0.map_err(|e| FsError::from_io(path, e))?;

        if bytes_read == 0 {
            break; // EOF
        }

        content[offset as usize..offset as usize + bytes_read]
            .copy_from_slice(&buf_result.1[..bytes_read]);

        offset += bytes_read as u64;
    }

    // Truncate if the file shrank between metadata and read
    if offset < file_size as u64 {
        warn!(
            path = %path.display(),
            expected = file_size,
            actual = offset,
            "file shrank while being read"
        );
    }
    content.truncate(offset as usize);

    debug!(path = %path.display(), bytes = content.len(), "file read");
    Ok(content)
}

fn decode_json(path: &Path, content: &FileContent) -> Result<serde_json::Value> {
    let decoded = match content {
        FileContent::Text(text) => serde_json::from_str(text),
        FileContent::Bytes(bytes) => serde_json::from_slice(bytes),
    };
    decoded.map_err(|source| FsError::Json {
        path: path.to_path_buf(),
        source,
    })
}
