//! `extsort` — move every file under a directory into per-extension folders.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use toolbench_sorter::{sort_files_by_extension, SortOptions, TracingReporter};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(
    name = "extsort",
    version,
    about = "Sort files into subdirectories named after their extensions"
)]
struct Args {
    /// Directory to sort. Pass it explicitly; the default sorts wherever
    /// the command is run from.
    #[arg(env = "EXTSORT_ROOT", default_value = ".")]
    root: PathBuf,

    /// Also move hidden files and descend into hidden directories.
    #[arg(long)]
    include_hidden: bool,

    /// Print the moved paths as JSON on stdout.
    #[arg(long)]
    json: bool,

    /// Log at DEBUG level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    toolbench::logging::init(args.verbose);

    info!("Starting file sorting in: {}", args.root.display());

    let options = SortOptions {
        root: args.root,
        ignore_hidden: !args.include_hidden,
    };

    // Failures were already reported through the reporter.
    let summary = sort_files_by_extension(&options, &TracingReporter).unwrap_or_default();

    if summary.is_empty() {
        warn!("No files were sorted");
    } else {
        info!("Successfully sorted {} files", summary.len());
    }

    if args.json {
        let json = serde_json::to_string_pretty(&summary).context("failed to encode summary")?;
        println!("{json}");
    }

    Ok(())
}
