/// Side classification and area ratios.
///
/// A segment joining two sides of the unit square cuts it into two pieces.
/// The classification compares endpoint coordinates against exactly `0.0`
/// and `1.0`; there is no tolerance, so `0.9999999` is not on a side.
///
/// Only these patterns are recognised, checked in this order:
///
/// 1. `x1 = 0, y2 = 1` or `y1 = 0, x2 = 1`: area `0.5·(x2−x1)·(y2−y1)`,
///    left/right are the smaller/larger piece.
/// 2. `x1 = 0, y2 = 0`, `y1 = 0, x2 = 0`, `y1 = 1, x2 = 1` or
///    `x1 = 1, y2 = 1`: same, with the absolute value of the area.
/// 3. `x1 = 0, x2 = 1`: area `0.5·(y1+y2)` on the left, the rest on the right.
/// 4. `y1 = 0, y2 = 1`: area `0.5·(x1+x2)` on the left, the rest on the right.
///
/// Reversed segments (e.g. right-to-left) that match none of these are
/// rejected rather than normalised.
use crate::error::SegmentError;
use crate::model::Segment;
use serde::Serialize;
use std::fmt;

/// Which recognised side pattern a segment matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Connection {
    /// Bottom-right or left-top corner cut.
    AdjacentCorner,
    /// Bottom-left or right-top corner cut.
    MirroredCorner,
    LeftRight,
    BottomTop,
}

impl Connection {
    pub fn label(self) -> &'static str {
        match self {
            Self::AdjacentCorner => "Bottom-Right or Left-Top",
            Self::MirroredCorner => "Bottom-Left or Right-Top",
            Self::LeftRight => "Left-Right",
            Self::BottomTop => "Bottom-Top",
        }
    }
}

/// The two fractions of the square's area on either side of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AreaRatio {
    pub id: i64,
    pub connection: Connection,
    pub left: f64,
    pub right: f64,
}

impl fmt::Display for AreaRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Segment {}: Left Area Ratio = {:.4}, Right Area Ratio = {:.4}",
            self.id, self.left, self.right
        )
    }
}

/// Classify `segment` and compute its area split.
pub fn area_ratio(segment: &Segment) -> Result<AreaRatio, SegmentError> {
    let (start, end) = (segment.start, segment.end);
    if !start.in_unit_square() || !end.in_unit_square() {
        return Err(SegmentError::OutsideUnitSquare);
    }

    let (x1, y1, x2, y2) = (start.x, start.y, end.x, end.y);
    let triangle = 0.5 * (x2 - x1) * (y2 - y1);

    let (connection, left, right) = if (x1 == 0.0 && y2 == 1.0) || (y1 == 0.0 && x2 == 1.0) {
        let area = triangle;
        (Connection::AdjacentCorner, area.min(1.0 - area), area.max(1.0 - area))
    } else if (x1 == 0.0 && y2 == 0.0)
        || (y1 == 0.0 && x2 == 0.0)
        || (y1 == 1.0 && x2 == 1.0)
        || (x1 == 1.0 && y2 == 1.0)
    {
        let area = triangle.abs();
        (Connection::MirroredCorner, area.min(1.0 - area), area.max(1.0 - area))
    } else if x1 == 0.0 && x2 == 1.0 {
        let area = 0.5 * (y1 + y2);
        (Connection::LeftRight, area, 1.0 - area)
    } else if y1 == 0.0 && y2 == 1.0 {
        let area = 0.5 * (x1 + x2);
        (Connection::BottomTop, area, 1.0 - area)
    } else {
        return Err(SegmentError::UnconnectedSides);
    };

    Ok(AreaRatio {
        id: segment.id,
        connection,
        left,
        right,
    })
}
