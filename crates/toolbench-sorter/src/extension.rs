/// Extension extraction and destination naming.
///
/// The extension is everything after the last dot of the file name, so
/// `archive.tar.gz` belongs to `gz`. A leading dot does not start an
/// extension (`.bashrc` has none), and a trailing dot yields an empty one.
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// Lowercased extension of `file_name`, or `None` when it has none.
///
/// Non-UTF-8 extensions are lowercased lossily; the folder name only has
/// to be stable, not reversible.
pub fn folder_for(file_name: &OsStr) -> Option<String> {
    let ext = Path::new(file_name).extension()?;
    if ext.is_empty() {
        return None;
    }
    Some(ext.to_string_lossy().to_lowercase())
}

/// First free destination for `file_name` inside `target_dir`.
///
/// Tries `target_dir/file_name`, then `stem_1.ext`, `stem_2.ext`, ... until
/// `exists` reports the name as free. The file's own spelling of the stem and
/// extension is kept; only the folder name is lowercased.
pub fn unique_destination(
    target_dir: &Path,
    file_name: &OsStr,
    exists: impl Fn(&Path) -> bool,
) -> PathBuf {
    let candidate = target_dir.join(file_name);
    if !exists(&candidate) {
        return candidate;
    }

    let as_path = Path::new(file_name);
    let stem = as_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = as_path
        .extension()
        .map(|e| format!(".{}", e.to_string_lossy()))
        .unwrap_or_default();

    let mut counter: u64 = 1;
    loop {
        let candidate = target_dir.join(format!("{stem}_{counter}{ext}"));
        if !exists(&candidate) {
            return candidate;
        }
        counter += 1;
    }
}
