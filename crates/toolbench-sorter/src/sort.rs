/// The sorting run: snapshot the tree, then move each candidate file into
/// `<root>/<extension>/`.
use crate::error::SortError;
use crate::extension::unique_destination;
use crate::reporter::Reporter;
use crate::walk::collect_candidates;
use serde::Serialize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// What to sort and how.
#[derive(Debug, Clone)]
pub struct SortOptions {
    /// Directory whose whole tree is sorted. Extension folders are created
    /// directly beneath it.
    pub root: PathBuf,
    /// Skip files and directories whose name starts with a dot.
    pub ignore_hidden: bool,
}

impl SortOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ignore_hidden: true,
        }
    }
}

impl Default for SortOptions {
    fn default() -> Self {
        Self::new(".")
    }
}

/// Result of a completed run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SortSummary {
    pub root: PathBuf,
    /// Final destination of every moved file, in move order.
    pub moved: Vec<PathBuf>,
}

impl SortSummary {
    pub fn len(&self) -> usize {
        self.moved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moved.is_empty()
    }
}

/// Sort every file under `options.root` into per-extension folders.
///
/// Failures are reported on the `error` channel and returned. A failure
/// stops the remaining moves; files already moved stay moved.
pub fn sort_files_by_extension(
    options: &SortOptions,
    reporter: &dyn Reporter,
) -> Result<SortSummary, SortError> {
    run(options, reporter).inspect_err(|err| reporter.error(&failure_message(err)))
}

fn run(options: &SortOptions, reporter: &dyn Reporter) -> Result<SortSummary, SortError> {
    let root = &options.root;
    if !root.is_dir() {
        return Err(SortError::InvalidRoot(root.clone()));
    }

    let candidates = collect_candidates(root, options.ignore_hidden)?;
    let mut summary = SortSummary {
        root: root.clone(),
        moved: Vec::with_capacity(candidates.len()),
    };

    for candidate in candidates {
        let target_dir = root.join(&candidate.folder);
        fs::create_dir_all(&target_dir)
            .map_err(|e| SortError::from_io("create directory", target_dir.clone(), e))?;

        let Some(file_name) = candidate.path.file_name() else {
            continue;
        };
        let target = unique_destination(&target_dir, file_name, |p| p.exists());

        move_file(&candidate.path, &target)
            .map_err(|e| SortError::from_io("move", candidate.path.clone(), e))?;

        reporter.info(&format!(
            "Moved {} to {}",
            candidate.path.display(),
            target.display()
        ));
        summary.moved.push(target);
    }

    Ok(summary)
}

/// Rename `from` to `to`, copying across filesystems when rename cannot.
fn move_file(from: &Path, to: &Path) -> io::Result<()> {
    match fs::rename(from, to) {
        Ok(()) => Ok(()),
        Err(err) if err.kind() == io::ErrorKind::CrossesDevices => {
            fs::copy(from, to)?;
            fs::remove_file(from)
        }
        Err(err) => Err(err),
    }
}

fn failure_message(err: &SortError) -> String {
    match err {
        SortError::InvalidRoot(_) => err.to_string(),
        _ if err.is_permission_denied() => {
            "Permission denied when accessing files or directories".to_owned()
        }
        _ => format!("Unexpected error during file sorting: {err}"),
    }
}
