/// Snapshot walk of the files a sorting run will consider.
///
/// The whole tree is read before anything is moved. Moving while walking
/// would let the walker see the extension folders it is busy filling, so
/// the walk is finished first and the moves run over a fixed list.
///
/// `jwalk` runs in serial mode with sorted directory listings, which keeps
/// the move order (and therefore collision suffixes) deterministic.
use crate::error::SortError;
use crate::extension::folder_for;
use std::path::{Path, PathBuf};
use tracing::debug;

/// A regular file that will be moved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Current location.
    pub path: PathBuf,
    /// Lowercased extension, also the destination folder name.
    pub folder: String,
}

/// Collect every movable file under `root`.
///
/// Skips directories, symlinks and other non-regular entries, names without
/// an extension, hidden entries when `ignore_hidden` is set (hidden
/// directories are not descended into), and files that already sit
/// directly inside `<root>/<their-extension>/`.
///
/// The first walker error aborts the snapshot.
pub fn collect_candidates(root: &Path, ignore_hidden: bool) -> Result<Vec<Candidate>, SortError> {
    let walker = jwalk::WalkDir::new(root)
        .skip_hidden(ignore_hidden)
        .follow_links(false)
        .sort(true)
        .parallelism(jwalk::Parallelism::Serial);

    let mut candidates = Vec::new();
    let mut seen: u64 = 0;

    for entry_result in walker {
        let entry = entry_result.map_err(|err| walk_error(root, err))?;
        seen += 1;

        if !entry.file_type().is_file() {
            continue;
        }

        let Some(folder) = folder_for(entry.file_name()) else {
            continue;
        };

        let path = entry.path();
        if path.parent() == Some(root.join(&folder).as_path()) {
            debug!("{} is already sorted", path.display());
            continue;
        }

        candidates.push(Candidate { path, folder });
    }

    debug!(
        "Walked {} entries under {}, {} files to move",
        seen,
        root.display(),
        candidates.len()
    );
    Ok(candidates)
}

/// Map a walker error, keeping denied access on the resource-error branch.
fn walk_error(root: &Path, err: jwalk::Error) -> SortError {
    let denied = err
        .io_error()
        .filter(|io| io.kind() == std::io::ErrorKind::PermissionDenied)
        .map(|io| std::io::Error::new(io.kind(), io.to_string()));
    match denied {
        Some(source) => SortError::PermissionDenied {
            path: err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            source,
        },
        None => SortError::Walk(err),
    }
}
