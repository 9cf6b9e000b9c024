//! File writing
//!
//! Writes are whole-buffer, single-attempt operations: create or truncate the
//! target, write through a positional loop, then flush to disk.

use std::io;
use std::path::Path;

use compio::io::AsyncWriteAt;
use tracing::debug;

use crate::error::{FsError, Result};

/// Write `data` to `path`, creating or truncating the target file.
///
/// `data` can be text or raw bytes; anything that dereferences to a byte
/// slice works. The content is flushed with `sync_all` before the operation
/// completes, so a successful return means the bytes reached the disk.
///
/// # Errors
///
/// Returns `Err(FsError)` if:
/// - The file cannot be created or opened (missing parent directory,
///   permission denied, ...)
/// - The write or the final sync fails
///
/// # Examples
///
/// ```rust,no_run
/// use aiofs::write_file;
///
/// # async fn example() -> aiofs::Result<()> {
/// write_file("greeting.txt", "Hello, World!").await?;
/// write_file("data.bin", vec![0u8, 1, 2, 3]).await?;
/// # Ok(())
/// # }
/// ```
pub async fn write_file(path: impl AsRef<Path>, data: impl AsRef<[u8]>) -> Result<()> {
    let path = path.as_ref();
    let data = data.as_ref();
    debug!(path = %path.display(), bytes = data.len(), "writing file");

    let mut file = compio::fs::File::create(path)
        .await
        .map_err(|e| FsError::from_io(path, e))?;

    let mut offset = 0u64;
    let mut remaining = data;

    while !remaining.is_empty() {
        let chunk_size = remaining.len().min(1024 * 1024); // 1MB chunks
        let chunk = remaining[..chunk_size].to_vec();

        let buf_result = file.write_at(chunk, offset).await;
        let bytes_written = buf_result.0.map_err(|e| FsError::from_io(path, e))?;

        if bytes_written == 0 {
            return Err(FsError::from_io(
                path,
                io::Error::new(io::ErrorKind::WriteZero, "no bytes written"),
            ));
        }

        offset += bytes_written as u64;
        remaining = &remaining[bytes_written..];
    }

    // Sync to disk
    file.sync_all()
        .await
        .map_err(|e| FsError::from_io(path, e))?;

    debug!(path = %path.display(), "file written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[compio::test]
    async fn test_write_small_file() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("test.txt");

        write_file(&file_path, "Hello, World!").await?;

        let content = fs::read(&file_path)?;
        assert_eq!(content, b"Hello, World!");

        Ok(())
    }

    #[compio::test]
    async fn test_write_empty_file() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("empty.txt");

        write_file(&file_path, "").await?;

        let content = fs::read(&file_path)?;
        assert_eq!(content.len(), 0);

        Ok(())
    }

    #[compio::test]
    async fn test_write_binary_file() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("data.bin");
        let data: Vec<u8> = (0..=255).collect();

        write_file(&file_path, &data).await?;

        let content = fs::read(&file_path)?;
        assert_eq!(content, data);

        Ok(())
    }

    #[compio::test]
    async fn test_write_large_file() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("large.dat");
        let data = vec![0x42u8; 3 * 1024 * 1024]; // 3MB (multiple chunks)

        write_file(&file_path, &data).await?;

        let content = fs::read(&file_path)?;
        assert_eq!(content.len(), 3 * 1024 * 1024);
        assert!(content.iter().all(|&b| b == 0x42));

        Ok(())
    }

    #[compio::test]
    async fn test_write_overwrites_existing() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("overwrite.txt");
        fs::write(&file_path, "Original content")?;

        write_file(&file_path, "New content").await?;

        let content = fs::read(&file_path)?;
        assert_eq!(content, b"New content");

        Ok(())
    }

    #[compio::test]
    async fn test_write_missing_parent_is_not_found() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let file_path = temp_dir.path().join("no_such_dir").join("test.txt");

        let result = write_file(&file_path, "content").await;

        assert!(matches!(result, Err(FsError::NotFound { .. })));

        Ok(())
    }
}
