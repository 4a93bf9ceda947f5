/// Intersections of supporting lines.
///
/// Every segment is extended to its infinite line. Two lines that cross
/// inside the closed unit square produce an intersection point, even when
/// the crossing lies outside one or both of the segments themselves.
use crate::model::{Point, Segment};
use serde::Serialize;
use std::collections::HashMap;
use tracing::debug;

/// Minimum number of pairs that must share a point for it to be reported.
pub const CONCURRENCY_THRESHOLD: usize = 3;

/// A point shared by several pairwise intersections.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Concurrency {
    pub point: Point,
    /// Number of segment pairs whose lines meet exactly here.
    pub pairs: usize,
}

/// Line through `a` and `b` as `(A, B, C)` with `A·x + B·y = C`.
fn line_coefficients(a: Point, b: Point) -> (f64, f64, f64) {
    let coef_a = a.y - b.y;
    let coef_b = b.x - a.x;
    let coef_c = a.x * b.y - b.x * a.y;
    (coef_a, coef_b, -coef_c)
}

/// Crossing point of the supporting lines of `first` and `second`.
///
/// Solved with Cramer's rule. Returns `None` when the determinant is
/// exactly zero (parallel or coincident lines) or when the crossing falls
/// outside `[0, 1] × [0, 1]`.
pub fn line_intersection(first: &Segment, second: &Segment) -> Option<Point> {
    let (a1, b1, c1) = line_coefficients(first.start, first.end);
    let (a2, b2, c2) = line_coefficients(second.start, second.end);

    let det = a1 * b2 - b1 * a2;
    if det == 0.0 {
        return None;
    }

    let det_x = c1 * b2 - b1 * c2;
    let det_y = a1 * c2 - c1 * a2;
    let point = Point::new(det_x / det, det_y / det);
    point.in_unit_square().then_some(point)
}

/// Intersections for every pair `i < j`, in pair order.
///
/// A point shared by several pairs appears once per pair.
pub fn find_intersections(segments: &[Segment]) -> Vec<Point> {
    let mut points = Vec::new();
    for (i, first) in segments.iter().enumerate() {
        for second in &segments[i + 1..] {
            if let Some(point) = line_intersection(first, second) {
                points.push(point);
            }
        }
    }
    debug!(
        "{} of {} segment pairs intersect inside the unit square",
        points.len(),
        segments.len() * segments.len().saturating_sub(1) / 2
    );
    points
}

/// Points that occur at least [`CONCURRENCY_THRESHOLD`] times in
/// `intersections`, in order of first occurrence.
///
/// Grouping is by exact coordinate equality; no tolerance is applied.
pub fn find_triple_intersections(intersections: &[Point]) -> Vec<Concurrency> {
    let mut slots: HashMap<(u64, u64), usize> = HashMap::new();
    let mut groups: Vec<Concurrency> = Vec::new();

    for &point in intersections {
        let slot = *slots.entry(exact_key(point)).or_insert_with(|| {
            groups.push(Concurrency { point, pairs: 0 });
            groups.len() - 1
        });
        groups[slot].pairs += 1;
    }

    groups.retain(|g| g.pairs >= CONCURRENCY_THRESHOLD);
    groups
}

/// Hashable form of a point. `-0.0` and `0.0` compare equal, so both map
/// to the bits of `0.0`.
fn exact_key(point: Point) -> (u64, u64) {
    ((point.x + 0.0).to_bits(), (point.y + 0.0).to_bits())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64, id: i64) -> Segment {
        Segment::new(Point::new(x1, y1), Point::new(x2, y2), id)
    }

    #[test]
    fn diagonals_cross_at_centre() {
        let p = line_intersection(&seg(0.0, 0.0, 1.0, 1.0, 1), &seg(0.0, 1.0, 1.0, 0.0, 2));
        assert_eq!(p, Some(Point::new(0.5, 0.5)));
    }

    #[test]
    fn parallel_lines_do_not_intersect() {
        let p = line_intersection(&seg(0.0, 0.2, 1.0, 0.2, 1), &seg(0.0, 0.8, 1.0, 0.8, 2));
        assert_eq!(p, None);
    }

    #[test]
    fn coincident_lines_do_not_intersect() {
        let p = line_intersection(&seg(0.0, 0.0, 1.0, 1.0, 1), &seg(0.0, 0.0, 1.0, 1.0, 2));
        assert_eq!(p, None);
    }

    /// The two segments do not touch, but their lines meet inside the square.
    #[test]
    fn supporting_lines_not_bounded_segments() {
        let p = line_intersection(&seg(0.0, 0.0, 0.25, 0.25, 1), &seg(0.0, 1.0, 0.25, 0.75, 2));
        assert_eq!(p, Some(Point::new(0.5, 0.5)));
    }

    #[test]
    fn crossing_outside_the_square_is_dropped() {
        // y = 0.1x + 0.5 and y = -0.1x + 0.9 meet at x = 2.
        let p = line_intersection(&seg(0.0, 0.5, 1.0, 0.6, 1), &seg(0.0, 0.9, 1.0, 0.8, 2));
        assert_eq!(p, None);
    }

    #[test]
    fn pairs_are_listed_in_input_order_with_duplicates() {
        let segments = [
            seg(0.0, 0.0, 1.0, 1.0, 1),
            seg(0.0, 1.0, 1.0, 0.0, 2),
            seg(0.5, 0.0, 0.5, 1.0, 3),
        ];
        let points = find_intersections(&segments);
        assert_eq!(points, vec![Point::new(0.5, 0.5); 3]);
    }

    #[test]
    fn three_concurrent_lines_form_a_triple() {
        let segments = [
            seg(0.0, 0.0, 1.0, 1.0, 1),
            seg(0.0, 1.0, 1.0, 0.0, 2),
            seg(0.5, 0.0, 0.5, 1.0, 3),
            seg(0.0, 0.2, 1.0, 0.2, 4),
        ];
        let triples = find_triple_intersections(&find_intersections(&segments));
        assert_eq!(
            triples,
            vec![Concurrency {
                point: Point::new(0.5, 0.5),
                pairs: 3
            }]
        );
    }

    #[test]
    fn two_occurrences_are_not_enough() {
        let points = [Point::new(0.5, 0.5), Point::new(0.5, 0.5), Point::new(0.1, 0.1)];
        assert!(find_triple_intersections(&points).is_empty());
    }

    #[test]
    fn signed_zero_groups_together() {
        let points = [Point::new(0.0, 0.5), Point::new(-0.0, 0.5), Point::new(0.0, 0.5)];
        let triples = find_triple_intersections(&points);
        assert_eq!(triples.len(), 1);
        assert_eq!(triples[0].pairs, 3);
    }

    #[test]
    fn empty_and_single_inputs() {
        assert!(find_intersections(&[]).is_empty());
        assert!(find_intersections(&[seg(0.0, 0.0, 1.0, 1.0, 1)]).is_empty());
        assert!(find_triple_intersections(&[]).is_empty());
    }
}
