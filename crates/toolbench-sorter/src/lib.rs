/// Toolbench Sorter — moves files into per-extension folders.
///
/// Walks a directory tree once and relocates every regular file that has
/// an extension into `<root>/<lowercased-extension>/`, renaming on
/// collision. No UI or logger setup lives here; callers pass a
/// [`Reporter`] that receives the human-readable progress lines.
///
/// # Modules
///
/// - [`error`] — Failure taxonomy for a sorting run.
/// - [`reporter`] — The `info`/`error` channel handed to the sorter.
/// - [`extension`] — Extension extraction and collision-free naming.
/// - [`walk`] — Snapshot of the candidate files under the root.
/// - [`sort`] — The sorting run itself.
pub mod error;
pub mod extension;
pub mod reporter;
pub mod sort;
pub mod walk;

pub use error::SortError;
pub use reporter::{CollectingReporter, Reporter, TracingReporter};
pub use sort::{sort_files_by_extension, SortOptions, SortSummary};
