use geo::{ChamberlainDuquetteArea, Coord, LineString, Polygon};

use super::Point2;

/// Area in square meters enclosed by a lon/lat ring (degrees), on a sphere
/// of the WGS84 equatorial radius.
///
/// Uses the spherical-excess approximation of Chamberlain & Duquette
/// ("Some Algorithms for Polygons on a Sphere", JPL 2007). The ring is open
/// (no repeated closing vertex). The result is unsigned.
#[must_use]
pub fn spherical_ring_area(points: &[Point2]) -> f64 {
    if points.len() < 3 {
        return 0.0;
    }
    let coords: Vec<Coord<f64>> = points.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
    // `Polygon::new` closes the exterior ring.
    Polygon::new(LineString::from(coords), vec![]).chamberlain_duquette_unsigned_area()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const EQUATORIAL_RADIUS: f64 = 6_378_137.0;

    fn degree_box(lon: f64, lat: f64, side: f64) -> Vec<Point2> {
        vec![
            Point2::new(lon, lat),
            Point2::new(lon + side, lat),
            Point2::new(lon + side, lat + side),
            Point2::new(lon, lat + side),
        ]
    }

    #[test]
    fn small_box_at_equator() {
        let side: f64 = 0.001;
        let meters = EQUATORIAL_RADIUS * side.to_radians();
        let area = spherical_ring_area(&degree_box(0.0, 0.0, side));
        assert_relative_eq!(area, meters * meters, max_relative = 1e-4);
    }

    #[test]
    fn box_shrinks_with_latitude() {
        let side: f64 = 0.001;
        let at_equator = spherical_ring_area(&degree_box(3.0, 0.0, side));
        let at_51 = spherical_ring_area(&degree_box(3.0, 51.0, side));
        assert_relative_eq!(at_51 / at_equator, 51.0_f64.to_radians().cos(), max_relative = 1e-3);
    }

    #[test]
    fn winding_does_not_change_area() {
        let mut ring = degree_box(3.186, 51.183, 0.0002);
        let ccw = spherical_ring_area(&ring);
        ring.reverse();
        assert_relative_eq!(spherical_ring_area(&ring), ccw, max_relative = 1e-12);
    }

    #[test]
    fn closing_vertex_is_optional() {
        let open = degree_box(3.186, 51.183, 0.0002);
        let mut closed = open.clone();
        closed.push(open[0]);
        assert_relative_eq!(
            spherical_ring_area(&closed),
            spherical_ring_area(&open),
            max_relative = 1e-12
        );
    }

    #[test]
    fn degenerate_ring_has_no_area() {
        assert!(spherical_ring_area(&[Point2::new(0.0, 0.0), Point2::new(1.0, 1.0)]).abs() < 1e-12);
    }
}
