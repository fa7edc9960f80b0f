//! Atomic file write operations.
//!
//! Provides safe atomic file writing using the `tempfile` crate.
//! Temp files are automatically cleaned up on failure.

use std::io::{self, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Write bytes to a file atomically using a temporary file.
///
/// The temp file is created next to the target so the final rename never
/// crosses a filesystem boundary. Readers observe either the previous
/// contents or the new contents, never a partial write.
///
/// This blocks; async callers run it on the blocking pool.
///
/// # Errors
///
/// Returns an `io::Error` if:
/// - The parent directory cannot be determined
/// - The temp file cannot be created or written
/// - The atomic rename fails
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let parent = path.parent().ok_or_else(|| {
        io::Error::new(io::ErrorKind::InvalidInput, "Path has no parent directory")
    })?;

    let mut temp_file = NamedTempFile::new_in(parent)?;
    temp_file.write_all(content)?;
    temp_file.flush()?;
    temp_file.as_file().sync_all()?;

    // Consumes the NamedTempFile, preventing auto-deletion
    temp_file.persist(path)?;
    Ok(())
}
