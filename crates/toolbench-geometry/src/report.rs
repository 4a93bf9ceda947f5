/// The full analysis run and its text rendering.
///
/// One pass produces three sections in a fixed order: area ratios (or
/// per-segment errors), pairwise intersections, then points shared by three
/// or more pairs. Nothing carries over between runs.
use crate::error::SegmentError;
use crate::intersect::{find_intersections, find_triple_intersections, Concurrency};
use crate::model::{Point, Segment};
use crate::ratio::{area_ratio, AreaRatio};
use serde::Serialize;
use std::fmt;
use tracing::{debug, warn};

/// Ratio result for one segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RatioOutcome {
    Ok(AreaRatio),
    Error {
        id: i64,
        #[serde(serialize_with = "serialize_display")]
        error: SegmentError,
    },
}

impl fmt::Display for RatioOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok(ratio) => fmt::Display::fmt(ratio, f),
            Self::Error { id, error } => write!(f, "Segment {id} error: {error}"),
        }
    }
}

/// Everything one analysis run computes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub ratios: Vec<RatioOutcome>,
    pub intersections: Vec<Point>,
    pub triple_intersections: Vec<Concurrency>,
}

/// Run the whole analysis over `segments`.
///
/// A segment whose ratio fails is recorded as an error and still takes
/// part in the intersection sections.
pub fn analyse(segments: &[Segment]) -> AnalysisReport {
    let ratios = segments
        .iter()
        .map(|segment| match area_ratio(segment) {
            Ok(ratio) => {
                debug!(
                    "Segment {} is a {} connection",
                    segment.id,
                    ratio.connection.label()
                );
                RatioOutcome::Ok(ratio)
            }
            Err(error) => {
                warn!("Segment {} rejected: {error}", segment.id);
                RatioOutcome::Error {
                    id: segment.id,
                    error,
                }
            }
        })
        .collect();

    let intersections = find_intersections(segments);
    let triple_intersections = find_triple_intersections(&intersections);
    debug!(
        "Analysis complete: {} segments, {} intersections, {} triple points",
        segments.len(),
        intersections.len(),
        triple_intersections.len()
    );

    AnalysisReport {
        ratios,
        intersections,
        triple_intersections,
    }
}

impl fmt::Display for AnalysisReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Segment Area Ratios:")?;
        for outcome in &self.ratios {
            writeln!(f, "{outcome}")?;
        }

        writeln!(f, "\nIntersections:")?;
        if self.intersections.is_empty() {
            writeln!(f, "No intersection points were found.")?;
        }
        for point in &self.intersections {
            writeln!(f, "Intersection point: {point}")?;
        }

        writeln!(f, "\nTriple Intersections:")?;
        if self.triple_intersections.is_empty() {
            writeln!(
                f,
                "No points where at least three segments intersect were found."
            )?;
        }
        for group in &self.triple_intersections {
            writeln!(f, "Intersection point: {}", group.point)?;
        }
        Ok(())
    }
}

fn serialize_display<T: fmt::Display, S: serde::Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}
