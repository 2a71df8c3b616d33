//! Plain-text export with atomic replace.
//!
//! Export content is always fully built in memory before any I/O happens;
//! the file is then written next to its destination and renamed over it.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::Result;

/// Atomically rename a file, with fallback for platforms where rename fails if target exists.
///
/// On some platforms (notably Windows), `fs::rename` fails if the destination already exists.
/// This function handles that case by removing the destination first and retrying.
///
/// If the rename ultimately fails, the temp file is cleaned up.
pub fn rename_with_fallback(temp_path: &Path, destination: &Path) -> io::Result<()> {
    if let Err(initial_err) = fs::rename(temp_path, destination) {
        let _ = fs::remove_file(destination);
        fs::rename(temp_path, destination).map_err(|retry_err| {
            let _ = fs::remove_file(temp_path);
            io::Error::new(
                retry_err.kind(),
                format!(
                    "Atomic rename failed (initial: {}, retry: {})",
                    initial_err, retry_err
                ),
            )
        })?;
    }
    Ok(())
}

/// Write `contents` to `dir/file_name`, overwriting any existing file.
///
/// Returns the path written. I/O failures come back as `TallyError::Io`;
/// callers report them and keep their in-memory state as is.
pub fn write_export(dir: &Path, file_name: &str, contents: &str) -> Result<PathBuf> {
    let destination = dir.join(file_name);
    let temp_path = dir.join(format!(".{}.tmp", file_name));

    let written = write_file(&temp_path, contents)
        .and_then(|()| rename_with_fallback(&temp_path, &destination));
    if let Err(err) = written {
        let _ = fs::remove_file(&temp_path);
        warn!(path = %destination.display(), error = %err, "export failed");
        return Err(err.into());
    }

    debug!(path = %destination.display(), bytes = contents.len(), "export written");
    Ok(destination)
}

fn write_file(path: &Path, contents: &str) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(contents.as_bytes())?;
    file.sync_all()
}
