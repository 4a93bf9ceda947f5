/// Toolbench Geometry — analysis of segments inscribed in the unit square.
///
/// Reads segments whose endpoints lie on the square's boundary, computes
/// the area split each one induces, and finds where their supporting lines
/// cross inside the square.
///
/// # Modules
///
/// - [`model`] — `Point` and `Segment`.
/// - [`error`] — Per-line, per-segment and input-file errors.
/// - [`parse`] — Line-oriented reader for `x1 y1 x2 y2 id` records.
/// - [`ratio`] — Side classification and area ratios.
/// - [`intersect`] — Pairwise and triple-or-more line intersections.
/// - [`report`] — The full three-section analysis run.
pub mod error;
pub mod intersect;
pub mod model;
pub mod parse;
pub mod ratio;
pub mod report;

pub use error::{AnalyzerError, ParseError, SegmentError};
pub use intersect::{find_intersections, find_triple_intersections, line_intersection, Concurrency};
pub use model::{Point, Segment};
pub use parse::{parse_segments, read_segments, ParsedSegments};
pub use ratio::{area_ratio, AreaRatio, Connection};
pub use report::{analyse, AnalysisReport, RatioOutcome};
