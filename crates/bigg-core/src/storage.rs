//! Output directory and model file lifecycle.
//!
//! The model is written to `<dest>.part`, synced, then renamed onto `<dest>`,
//! so the destination only ever appears complete. A regular file at the
//! destination is the cache signal.

use crate::error::FetchError;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path (e.g. `iML1515.json` → `iML1515.json.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Create `dir` and its parents. No-op if it already exists.
pub fn ensure_dir(dir: &Path) -> Result<(), FetchError> {
    fs::create_dir_all(dir).map_err(|e| FetchError::io(dir, e))
}

/// True if a regular file already sits at `path`. Anything else there (a
/// directory, a socket) is an `Io` error.
pub fn is_cached(path: &Path) -> Result<bool, FetchError> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_file() => Ok(true),
        Ok(_) => Err(FetchError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::AlreadyExists, "exists but is not a regular file"),
        )),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(FetchError::io(path, e)),
    }
}

/// Write `data` to `final_path` through a synced temp file and a rename.
pub fn write_atomic(final_path: &Path, data: &[u8]) -> Result<(), FetchError> {
    let tp = temp_path(final_path);
    let result = write_and_sync(&tp, data)
        .and_then(|()| fs::rename(&tp, final_path).map_err(|e| FetchError::io(final_path, e)));
    if result.is_err() {
        if let Err(e) = fs::remove_file(&tp) {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::warn!(path = %tp.display(), "could not remove temp file: {}", e);
            }
        }
    }
    result
}

fn write_and_sync(path: &Path, data: &[u8]) -> Result<(), FetchError> {
    let mut f = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(path)
        .map_err(|e| FetchError::io(path, e))?;
    f.write_all(data).map_err(|e| FetchError::io(path, e))?;
    f.sync_all().map_err(|e| FetchError::io(path, e))?;
    Ok(())
}
