//! `segments` — area ratios and line intersections for segments in the
//! unit square.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use toolbench_geometry::{analyse, read_segments};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "segments",
    version,
    about = "Analyse line segments inscribed in the unit square"
)]
struct Args {
    /// Input file, one `x1 y1 x2 y2 id` record per line.
    #[arg(env = "SEGMENTS_FILE", default_value = "segments.txt")]
    file: PathBuf,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,

    /// Log at DEBUG level.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    toolbench::logging::init(args.verbose);

    let parsed = read_segments(&args.file)?;
    info!(
        "Loaded {} segments from {}",
        parsed.segments.len(),
        args.file.display()
    );

    let report = analyse(&parsed.segments);
    if args.json {
        let json = serde_json::to_string_pretty(&report).context("failed to encode report")?;
        println!("{json}");
    } else {
        print!("{report}");
    }

    Ok(())
}
