use serde::{Deserialize, Serialize};

use crate::geometry::Ring;
use crate::math::polygon_2d::polygon_area;
use crate::math::spherical::spherical_ring_area;

/// How the area of a ring is measured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AreaMethod {
    /// Shoelace area of a planar ring, in squared coordinate units.
    Planar,
    /// Spherical-excess area of a lon/lat ring (degrees), in square meters.
    #[default]
    Spherical,
}

/// Computes the unsigned area enclosed by a ring.
///
/// The result does not depend on winding or on the starting vertex.
pub struct RingArea<'a> {
    ring: &'a Ring,
    method: AreaMethod,
}

impl<'a> RingArea<'a> {
    /// Creates a new `RingArea` query.
    #[must_use]
    pub fn new(ring: &'a Ring, method: AreaMethod) -> Self {
        Self { ring, method }
    }

    /// Executes the query, returning the area.
    #[must_use]
    pub fn execute(&self) -> f64 {
        match self.method {
            AreaMethod::Planar => polygon_area(self.ring.vertices()),
            AreaMethod::Spherical => spherical_ring_area(self.ring.vertices()),
        }
    }
}
