use super::{Point2, Vector2};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
///
/// The parallel test is exact (`det == 0`). Near-parallel lines yield a valid
/// but numerically unstable result far away from both anchors.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let det = d1.x * d2.y - d2.x * d1.y;
    if det == 0.0 {
        return None;
    }
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / det;
    let u = (dx * d1.y - dy * d1.x) / det;
    Some((t, u))
}

/// Linear interpolation: `origin + dir * t`.
#[must_use]
pub fn point_at(origin: &Point2, dir: &Vector2, t: f64) -> Point2 {
    origin + dir * t
}

/// An infinite line through `anchor` along `direction` (not normalized).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientedLine {
    pub anchor: Point2,
    pub direction: Vector2,
}

impl OrientedLine {
    /// Creates a new line through `anchor` along `direction`.
    #[must_use]
    pub fn new(anchor: Point2, direction: Vector2) -> Self {
        Self { anchor, direction }
    }

    /// Returns the point where this line meets `other`, or `None` when the
    /// two lines are parallel or identical.
    #[must_use]
    pub fn intersect(&self, other: &Self) -> Option<Point2> {
        line_line_intersect_2d(&self.anchor, &self.direction, &other.anchor, &other.direction)
            .map(|(t, _)| point_at(&self.anchor, &self.direction, t))
    }
}
