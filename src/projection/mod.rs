//! Conversion between geographic lon/lat and the regional planar projection.
//!
//! Exactly two reference systems are known to the kernel. Their PROJ
//! definitions are parsed once when a [`CoordinateTransform`] is built, so a
//! bad definition fails at startup rather than on every call.

use std::fmt;
use std::str::FromStr;

use proj4rs::proj::Proj;
use proj4rs::transform::transform;
use tracing::debug;

use crate::error::{ProjectionError, Result};
use crate::geometry::Ring;
use crate::math::Point2;

/// PROJ definition of EPSG:4326 (WGS 84 longitude/latitude).
pub const WGS84_DEFINITION: &str = "+proj=longlat +ellps=WGS84 +datum=WGS84 +no_defs";

/// PROJ definition of EPSG:31370 (Belgian Lambert 72).
pub const BELGIAN_LAMBERT_72_DEFINITION: &str = "+proj=lcc +lat_0=90 +lon_0=4.36748666666667 \
+lat_1=51.1666672333333 +lat_2=49.8333339 +x_0=150000.013 +y_0=5400088.438 +ellps=intl \
+towgs84=-106.8686,52.2978,-103.7239,0.3366,-0.457,1.8422,-1.2747 +units=m +no_defs";

/// A registered coordinate reference system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Crs {
    /// Geographic longitude/latitude in degrees (EPSG:4326).
    Wgs84,
    /// Planar Lambert conformal conic in meters (EPSG:31370).
    BelgianLambert72,
}

impl Crs {
    /// EPSG code of this system.
    #[must_use]
    pub fn epsg(self) -> u32 {
        match self {
            Self::Wgs84 => 4326,
            Self::BelgianLambert72 => 31370,
        }
    }

    /// Looks up a registered system by EPSG code.
    ///
    /// # Errors
    ///
    /// Returns `ProjectionError::UnregisteredCrs` for any other code.
    pub fn from_epsg(code: u32) -> Result<Self> {
        match code {
            4326 => Ok(Self::Wgs84),
            31370 => Ok(Self::BelgianLambert72),
            other => Err(ProjectionError::UnregisteredCrs(format!("EPSG:{other}")).into()),
        }
    }

    /// `EPSG:<code>` identifier.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Wgs84 => "EPSG:4326",
            Self::BelgianLambert72 => "EPSG:31370",
        }
    }

    /// Whether coordinates are angular (degrees at the API boundary).
    #[must_use]
    pub fn is_geographic(self) -> bool {
        matches!(self, Self::Wgs84)
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Crs {
    type Err = crate::error::TaludisError;

    fn from_str(s: &str) -> Result<Self> {
        let code = s
            .trim()
            .strip_prefix("EPSG:")
            .and_then(|c| c.parse::<u32>().ok())
            .ok_or_else(|| ProjectionError::UnregisteredCrs(s.to_owned()))?;
        Self::from_epsg(code)
    }
}

/// Point-wise conversion between the two registered systems.
pub struct CoordinateTransform {
    geographic: Proj,
    planar: Proj,
}

impl fmt::Debug for CoordinateTransform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoordinateTransform").finish_non_exhaustive()
    }
}

impl CoordinateTransform {
    fn new(geographic: &str, planar: &str) -> Result<Self> {
        let geographic = parse_definition(Crs::Wgs84, geographic)?;
        let planar = parse_definition(Crs::BelgianLambert72, planar)?;
        debug!("coordinate transform ready");
        Ok(Self { geographic, planar })
    }

    /// Builds the transform for EPSG:4326 and EPSG:31370.
    ///
    /// # Errors
    ///
    /// Returns `ProjectionError::InvalidDefinition` if a definition cannot be parsed.
    pub fn registered() -> Result<Self> {
        Self::new(WGS84_DEFINITION, BELGIAN_LAMBERT_72_DEFINITION)
    }

    fn proj(&self, crs: Crs) -> &Proj {
        match crs {
            Crs::Wgs84 => &self.geographic,
            Crs::BelgianLambert72 => &self.planar,
        }
    }

    /// Converts a single point from `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns `ProjectionError::Transform` if the projection fails or yields
    /// a non-finite coordinate.
    pub fn transform_point(&self, point: &Point2, from: Crs, to: Crs) -> Result<Point2> {
        if from == to {
            return Ok(*point);
        }
        let mut xyz = if from.is_geographic() {
            (point.x.to_radians(), point.y.to_radians(), 0.0)
        } else {
            (point.x, point.y, 0.0)
        };
        transform(self.proj(from), self.proj(to), &mut xyz).map_err(|e| {
            ProjectionError::Transform {
                crs: to.name(),
                reason: e.to_string(),
            }
        })?;
        let out = if to.is_geographic() {
            Point2::new(xyz.0.to_degrees(), xyz.1.to_degrees())
        } else {
            Point2::new(xyz.0, xyz.1)
        };
        if !(out.x.is_finite() && out.y.is_finite()) {
            return Err(ProjectionError::Transform {
                crs: to.name(),
                reason: format!("non-finite result for ({}, {})", point.x, point.y),
            }
            .into());
        }
        Ok(out)
    }

    /// Converts a sequence of points, preserving order.
    ///
    /// # Errors
    ///
    /// See [`CoordinateTransform::transform_point`].
    pub fn transform(&self, points: &[Point2], from: Crs, to: Crs) -> Result<Vec<Point2>> {
        points
            .iter()
            .map(|p| self.transform_point(p, from, to))
            .collect()
    }

    /// Converts every vertex of a ring.
    ///
    /// # Errors
    ///
    /// See [`CoordinateTransform::transform_point`].
    pub fn transform_ring(&self, ring: &Ring, from: Crs, to: Crs) -> Result<Ring> {
        ring.try_map(|p| self.transform_point(p, from, to))
    }
}

fn parse_definition(crs: Crs, definition: &str) -> Result<Proj> {
    Proj::from_proj_string(definition).map_err(|e| {
        ProjectionError::InvalidDefinition {
            crs: crs.name(),
            reason: e.to_string(),
        }
        .into()
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::TaludisError;
    use crate::math::polygon_2d::segment_length;
    use approx::assert_abs_diff_eq;

    fn belgian() -> CoordinateTransform {
        CoordinateTransform::registered().unwrap()
    }

    #[test]
    fn epsg_lookup() {
        assert_eq!(Crs::from_epsg(4326).unwrap(), Crs::Wgs84);
        assert_eq!("EPSG:31370".parse::<Crs>().unwrap(), Crs::BelgianLambert72);
        assert_eq!(Crs::BelgianLambert72.to_string(), "EPSG:31370");
    }

    #[test]
    fn unknown_epsg_is_unregistered() {
        let err = Crs::from_epsg(3857).unwrap_err();
        assert!(matches!(
            err,
            TaludisError::Projection(ProjectionError::UnregisteredCrs(_))
        ));
        assert!("lambert".parse::<Crs>().is_err());
    }

    #[test]
    fn bad_definition_fails_at_construction() {
        let err = CoordinateTransform::new(WGS84_DEFINITION, "+proj=nonsense").unwrap_err();
        assert!(matches!(
            err,
            TaludisError::Projection(ProjectionError::InvalidDefinition { .. })
        ));
    }

    #[test]
    fn projection_origin_region() {
        // Near the Lambert 72 false origin (150000.013, 165372.956 in BD72).
        let t = belgian();
        let p = t
            .transform_point(
                &Point2::new(4.367_486_666, 50.797_815),
                Crs::Wgs84,
                Crs::BelgianLambert72,
            )
            .unwrap();
        assert!((p.x - 150_000.0).abs() < 1_000.0, "x={}", p.x);
        assert!((p.y - 165_373.0).abs() < 1_000.0, "y={}", p.y);
    }

    #[test]
    fn planar_distances_are_metric() {
        // 0.001° of latitude is about 111.2 m.
        let t = belgian();
        let a = t
            .transform_point(&Point2::new(3.186, 51.183), Crs::Wgs84, Crs::BelgianLambert72)
            .unwrap();
        let b = t
            .transform_point(&Point2::new(3.186, 51.184), Crs::Wgs84, Crs::BelgianLambert72)
            .unwrap();
        let d = segment_length(&a, &b);
        assert!((d - 111.2).abs() < 0.6, "d={d}");
    }

    #[test]
    fn round_trip_preserves_ring() {
        let t = belgian();
        let ring = vec![
            Point2::new(3.186_437, 51.183_496),
            Point2::new(3.186_9, 51.183_4),
            Point2::new(3.187_1, 51.183_9),
            Point2::new(3.186_3, 51.184_0),
        ];
        let planar = t.transform(&ring, Crs::Wgs84, Crs::BelgianLambert72).unwrap();
        let back = t.transform(&planar, Crs::BelgianLambert72, Crs::Wgs84).unwrap();
        assert_eq!(back.len(), ring.len());
        for (orig, rt) in ring.iter().zip(&back) {
            assert_abs_diff_eq!(orig.x, rt.x, epsilon = 1e-7);
            assert_abs_diff_eq!(orig.y, rt.y, epsilon = 1e-7);
        }

        let again = t.transform(&back, Crs::Wgs84, Crs::BelgianLambert72).unwrap();
        for (a, b) in planar.iter().zip(&again) {
            assert_abs_diff_eq!(a.x, b.x, epsilon = 1e-2);
            assert_abs_diff_eq!(a.y, b.y, epsilon = 1e-2);
        }
    }

    #[test]
    fn same_system_is_identity() {
        let t = belgian();
        let p = Point2::new(120_000.0, 190_000.0);
        let q = t
            .transform_point(&p, Crs::BelgianLambert72, Crs::BelgianLambert72)
            .unwrap();
        assert_eq!(p, q);
    }
}
