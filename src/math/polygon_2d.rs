use super::{Point2, Vector2, TOLERANCE};
use crate::error::{GeometryError, Result};

/// Computes the signed area of a polygon in the plane (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Unsigned planar area of a polygon, independent of winding.
#[must_use]
pub fn polygon_area(points: &[Point2]) -> f64 {
    signed_area_2d(points).abs()
}

/// Euclidean distance between two points.
#[must_use]
pub fn segment_length(a: &Point2, b: &Point2) -> f64 {
    ((b.x - a.x).powi(2) + (b.y - a.y).powi(2)).sqrt()
}

/// Computes the normalized direction of edge `index` running from `a` to `b`.
///
/// # Errors
///
/// Returns `GeometryError::DegenerateEdge` if the edge has zero length.
pub fn segment_direction(a: &Point2, b: &Point2, index: usize) -> Result<Vector2> {
    let d = b - a;
    let len = d.norm();
    if len < TOLERANCE {
        return Err(GeometryError::DegenerateEdge { index }.into());
    }
    Ok(d / len)
}

/// Returns the left-pointing normal of a direction vector.
///
/// For a counter-clockwise ring this points toward the interior.
#[must_use]
pub fn left_normal(dir: Vector2) -> Vector2 {
    Vector2::new(-dir.y, dir.x)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::TaludisError;
    use approx::assert_relative_eq;

    fn square() -> Vec<Point2> {
        vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
        ]
    }

    #[test]
    fn signed_area_ccw_square() {
        let area = signed_area_2d(&square());
        assert!((area - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_cw_square() {
        let mut pts = square();
        pts.reverse();
        let area = signed_area_2d(&pts);
        assert!((area + 1.0).abs() < TOLERANCE);
        assert!((polygon_area(&pts) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn signed_area_degenerate() {
        assert!((signed_area_2d(&[Point2::new(0.0, 0.0)])).abs() < TOLERANCE);
        assert!((signed_area_2d(&[])).abs() < TOLERANCE);
    }

    #[test]
    fn area_invariant_to_start_vertex() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(7.0, 1.0),
            Point2::new(9.0, 6.0),
            Point2::new(3.0, 8.0),
            Point2::new(-1.0, 4.0),
        ];
        let expected = polygon_area(&pts);
        for shift in 1..pts.len() {
            let mut rotated = pts.clone();
            rotated.rotate_left(shift);
            assert_relative_eq!(polygon_area(&rotated), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn area_invariant_to_translation() {
        let pts = vec![
            Point2::new(0.0, 0.0),
            Point2::new(4.0, 0.0),
            Point2::new(5.0, 3.0),
            Point2::new(1.0, 2.0),
        ];
        let expected = polygon_area(&pts);
        let shift = Vector2::new(150_000.0, 200_000.0);
        let moved: Vec<Point2> = pts.iter().map(|p| p + shift).collect();
        assert_relative_eq!(polygon_area(&moved), expected, max_relative = 1e-9);
    }

    #[test]
    fn segment_length_3_4_5() {
        let len = segment_length(&Point2::new(1.0, 1.0), &Point2::new(4.0, 5.0));
        assert!((len - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn segment_direction_basic() {
        let a = Point2::new(0.0, 0.0);
        let b = Point2::new(3.0, 4.0);
        let dir = segment_direction(&a, &b, 0).unwrap();
        assert!((dir.x - 0.6).abs() < TOLERANCE);
        assert!((dir.y - 0.8).abs() < TOLERANCE);
    }

    #[test]
    fn segment_direction_zero_length() {
        let a = Point2::new(1.0, 1.0);
        let err = segment_direction(&a, &a, 2).unwrap_err();
        assert!(matches!(
            err,
            TaludisError::Geometry(GeometryError::DegenerateEdge { index: 2 })
        ));
    }

    #[test]
    fn left_normal_basic() {
        let n = left_normal(Vector2::new(1.0, 0.0));
        assert!((n.x).abs() < TOLERANCE);
        assert!((n.y - 1.0).abs() < TOLERANCE);
    }
}
