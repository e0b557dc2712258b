//! Reading and atomically rewriting the catalogue document.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{Error, Result};

/// Read the whole document. The file handle is released before returning.
pub fn read(path: &Path) -> Result<String> {
    fs_err::read_to_string(path).map_err(|e| Error::io(e, path.to_path_buf()))
}

/// Replace the document with `contents`.
///
/// The text is written to a temporary file beside the target and renamed
/// over it, so the original is either untouched or fully replaced. A
/// symlinked document is resolved first, so the link survives and its
/// target is updated; the target keeps its permissions.
pub fn write(path: &Path, contents: &str) -> Result<()> {
    let target = if path.exists() {
        fs_err::canonicalize(path).map_err(|e| Error::io(e, path.to_path_buf()))?
    } else {
        path.to_path_buf()
    };
    let dir = match target.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| Error::io(e, dir.to_path_buf()))?;
    tmp.write_all(contents.as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| Error::io(e, tmp.path().to_path_buf()))?;

    if target.exists() {
        let permissions = fs_err::metadata(&target)
            .map_err(|e| Error::io(e, target.clone()))?
            .permissions();
        tmp.as_file()
            .set_permissions(permissions)
            .map_err(|e| Error::io(e, tmp.path().to_path_buf()))?;
    }

    tmp.persist(&target)
        .map_err(|e| Error::io(e.error, target.clone()))?;

    tracing::debug!("Wrote {} bytes to {}", contents.len(), target.display());
    Ok(())
}
