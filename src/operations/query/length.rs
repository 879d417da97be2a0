use serde::Serialize;

use crate::geometry::Ring;
use crate::math::polygon_2d::segment_length;

/// Per-edge lengths of a ring and their sum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerimeterLengths {
    /// Length of edge `i` (from vertex `i` to vertex `i+1`), closing edge last.
    pub segments: Vec<f64>,
    pub total: f64,
}

/// Computes the perimeter of a planar ring.
pub struct Perimeter<'a> {
    ring: &'a Ring,
}

impl<'a> Perimeter<'a> {
    /// Creates a new `Perimeter` query.
    #[must_use]
    pub fn new(ring: &'a Ring) -> Self {
        Self { ring }
    }

    /// Executes the query. Lengths are in the ring's coordinate unit.
    #[must_use]
    pub fn execute(&self) -> PerimeterLengths {
        let segments: Vec<f64> = self
            .ring
            .edges()
            .map(|(a, b)| segment_length(a, b))
            .collect();
        let total: f64 = segments.iter().sum();
        PerimeterLengths { segments, total }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn triangle_3_4_5() {
        let ring = Ring::from_coords(&[[0.0, 0.0], [3.0, 0.0], [3.0, 4.0], [0.0, 0.0]]).unwrap();
        let lengths = Perimeter::new(&ring).execute();
        assert_eq!(lengths.segments.len(), 3);
        assert!((lengths.segments[0] - 3.0).abs() < 1e-10);
        assert!((lengths.segments[1] - 4.0).abs() < 1e-10);
        assert!((lengths.segments[2] - 5.0).abs() < 1e-10);
        assert!((lengths.total - 12.0).abs() < 1e-10);
    }

    #[test]
    fn square_perimeter() {
        let ring =
            Ring::from_coords(&[[0.0, 0.0], [10.0, 0.0], [10.0, 10.0], [0.0, 10.0]]).unwrap();
        let lengths = Perimeter::new(&ring).execute();
        assert!(lengths.segments.iter().all(|l| (l - 10.0).abs() < 1e-10));
        assert!((lengths.total - 40.0).abs() < 1e-10);
    }
}
