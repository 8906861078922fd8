use std::path::{Path, PathBuf};

use crate::foundation::error::{SeqError, SeqResult};
use crate::sequence::natord::NameOrder;

/// File extensions accepted as sequence frames (compared case-insensitively).
pub const ACCEPTED_EXTENSIONS: [&str; 4] = ["webp", "png", "jpg", "jpeg"];

/// One accepted image file and its position in playback order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceImage {
    /// File name as found in the directory.
    pub name: String,
    /// Lowercased suffix after the final `.`.
    pub extension: String,
    /// 0-based index after sorting.
    pub ordinal: usize,
}

impl SourceImage {
    /// Full path of this image inside `dir`.
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.name)
    }
}

/// Return the lowercased extension of `name` when it is an accepted image type.
pub fn image_extension(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    let ext = ext.to_ascii_lowercase();
    ACCEPTED_EXTENSIONS
        .iter()
        .any(|accepted| *accepted == ext)
        .then_some(ext)
}

/// List the accepted images of `dir`, sorted by `order`, with ordinals assigned.
///
/// Only regular files (or symlinks to them) are considered. Names that are not valid UTF-8
/// are skipped.
#[tracing::instrument(level = "debug", skip(order))]
pub fn scan_dir(dir: &Path, order: &impl NameOrder) -> SeqResult<Vec<SourceImage>> {
    let not_found = |source| SeqError::DirectoryNotFound {
        path: dir.to_path_buf(),
        source,
    };

    let mut found = Vec::<(String, String)>::new();
    for entry in std::fs::read_dir(dir).map_err(not_found)? {
        let entry = entry.map_err(not_found)?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|s| s.to_str()) else {
            tracing::debug!(path = %path.display(), "skipping non UTF-8 file name");
            continue;
        };
        let Some(ext) = image_extension(name) else {
            tracing::debug!(name, "skipping file without image extension");
            continue;
        };
        found.push((name.to_string(), ext));
    }

    if found.is_empty() {
        return Err(SeqError::EmptySequence {
            path: dir.to_path_buf(),
        });
    }

    found.sort_by(|a, b| order.compare(&a.0, &b.0));

    Ok(found
        .into_iter()
        .enumerate()
        .map(|(ordinal, (name, extension))| SourceImage {
            name,
            extension,
            ordinal,
        })
        .collect())
}

#[cfg(test)]
#[path = "../../tests/unit/sequence/scan.rs"]
mod tests;
