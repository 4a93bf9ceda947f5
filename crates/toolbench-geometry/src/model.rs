/// Points and segments in the unit square.
use serde::Serialize;
use std::fmt;

/// A 2D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Both coordinates in `[0, 1]`, bounds included. NaN is never inside.
    pub fn in_unit_square(self) -> bool {
        (0.0..=1.0).contains(&self.x) && (0.0..=1.0).contains(&self.y)
    }
}

/// Renders as `(x, y)` with the shortest digits that round-trip.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", coordinate(self.x), coordinate(self.y))
    }
}

/// Shortest round-trip digits, with a signed exponent of at least two
/// digits (`1e-05`, `1.5e+16`).
fn coordinate(value: f64) -> String {
    let shortest = format!("{value:?}");
    let Some((mantissa, exponent)) = shortest.split_once('e') else {
        return shortest;
    };
    let (sign, digits) = match exponent.strip_prefix('-') {
        Some(digits) => ('-', digits),
        None => ('+', exponent),
    };
    format!("{mantissa}e{sign}{digits:0>2}")
}

/// A directed segment with a caller-assigned identifier.
///
/// Immutable once parsed. Endpoints are expected on the square's boundary
/// but that is only enforced when a ratio is computed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
    pub id: i64,
}

impl Segment {
    pub const fn new(start: Point, end: Point, id: i64) -> Self {
        Self { start, end, id }
    }
}
