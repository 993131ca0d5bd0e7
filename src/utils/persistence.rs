//! Staged file writes shared by the snapshot store and the config manager.

use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

const TMP_SUFFIX: &str = "tmp";

/// Path a write to `path` is staged at before being renamed into place.
pub fn staging_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

/// Writes `data` to the staging path, syncs it, then renames it over `path`.
///
/// On failure `path` keeps its previous contents and no staging file is left behind.
pub fn write_atomic(path: &Path, data: &str) -> io::Result<()> {
    let tmp = staging_path(path);
    if let Err(err) = write_synced(&tmp, data) {
        if tmp.is_file() {
            let _ = fs::remove_file(&tmp);
        }
        return Err(err);
    }
    if let Err(err) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }
    Ok(())
}

fn write_synced(path: &Path, data: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    file.sync_all()
}
