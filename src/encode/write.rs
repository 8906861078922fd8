use std::ffi::OsString;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use crate::foundation::error::{SeqError, SeqResult};

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Create the parent directory of `path` (recursively) when it is missing.
pub fn ensure_parent_dir(path: &Path) -> SeqResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| SeqError::write(parent, e))?;
    }
    Ok(())
}

/// Write `bytes` to `path` through a temporary sibling file and a rename.
///
/// Readers see either the previous file or the complete new one. On failure the temporary
/// file is removed and `path` is left untouched.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> SeqResult<()> {
    ensure_parent_dir(path)?;
    let tmp = temp_sibling(path)?;

    let result = write_synced(&tmp, bytes).and_then(|()| std::fs::rename(&tmp, path));
    if let Err(e) = result {
        let _ = std::fs::remove_file(&tmp);
        return Err(SeqError::write(path, e));
    }
    Ok(())
}

fn write_synced(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut f = std::fs::File::create(path)?;
    f.write_all(bytes)?;
    f.sync_all()
}

fn temp_sibling(path: &Path) -> SeqResult<PathBuf> {
    let Some(name) = path.file_name() else {
        return Err(SeqError::invalid_input(format!(
            "output path '{}' has no file name",
            path.display()
        )));
    };
    let mut tmp_name = OsString::from(".");
    tmp_name.push(name);
    tmp_name.push(format!(
        ".tmp-{}-{}",
        std::process::id(),
        TEMP_COUNTER.fetch_add(1, Ordering::Relaxed)
    ));
    Ok(path.with_file_name(tmp_name))
}

#[cfg(test)]
#[path = "../../tests/unit/encode/write.rs"]
mod tests;
