use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::Ring;
use crate::math::intersect_2d::OrientedLine;
use crate::math::polygon_2d::{left_normal, segment_direction};
use crate::math::{Point2, Vector2, TOLERANCE};

/// What to do when two consecutive offset lines are parallel and have no
/// unique corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParallelPolicy {
    /// Fail with `GeometryError::ParallelOffsetLines`.
    #[default]
    Reject,
    /// Use the end point of the incoming offset edge: the source vertex
    /// shifted along the incoming edge's normal. Exact for collinear edges;
    /// at a spike (reversed edge) it is the tip of the incoming side.
    OffsetVertex,
}

/// An edge shifted along its left normal.
#[derive(Debug, Clone, Copy)]
struct OffsetEdge {
    line: OrientedLine,
    normal: Vector2,
}

/// Offsets every edge of a closed ring by a fixed distance and rebuilds the
/// ring from the corners where consecutive offset lines meet.
///
/// # Algorithm
///
/// 1. For edge `i` from `v[i]` to `v[i+1]`, anchor a line at the edge
///    midpoint shifted by `distance` along the unit left normal `(-dy, dx)`,
///    keeping the original edge direction.
/// 2. Result vertex `i` is the intersection of offset lines `i-1` and `i`
///    (with `i-1` wrapping to `n-1`), so it matches source vertex `i`.
/// 3. Every result edge must keep the direction of its source edge. An edge
///    that shrank to nothing or flipped means the offset ran past the point
///    where neighbouring lines cross, and the ring is rejected.
///
/// # Sign Convention
///
/// For a counter-clockwise ring, positive distance moves inward and negative
/// distance moves outward. Clockwise input swaps the two.
#[derive(Debug)]
pub struct RingOffset2D<'a> {
    ring: &'a Ring,
    distance: f64,
    parallel_policy: ParallelPolicy,
}

impl<'a> RingOffset2D<'a> {
    /// Creates a new ring offset operation.
    #[must_use]
    pub fn new(ring: &'a Ring, distance: f64) -> Self {
        Self {
            ring,
            distance,
            parallel_policy: ParallelPolicy::default(),
        }
    }

    /// Sets the handling of parallel consecutive offset lines.
    #[must_use]
    pub fn with_parallel_policy(mut self, policy: ParallelPolicy) -> Self {
        self.parallel_policy = policy;
        self
    }

    /// Returns the offset line of every edge, in edge order.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if the distance is not finite
    /// - `GeometryError::DegenerateEdge` if an edge has zero length
    pub fn offset_lines(&self) -> Result<Vec<OrientedLine>> {
        Ok(self.offset_edges()?.into_iter().map(|e| e.line).collect())
    }

    fn offset_edges(&self) -> Result<Vec<OffsetEdge>> {
        if !self.distance.is_finite() {
            return Err(OperationError::InvalidInput(format!(
                "offset distance {} is not finite",
                self.distance
            ))
            .into());
        }
        self.ring
            .edges()
            .enumerate()
            .map(|(index, (a, b))| {
                let normal = left_normal(segment_direction(a, b, index)?);
                let midpoint = Point2::from((a.coords + b.coords) * 0.5);
                let anchor = midpoint + normal * self.distance;
                Ok(OffsetEdge {
                    line: OrientedLine::new(anchor, b - a),
                    normal,
                })
            })
            .collect()
    }

    /// Executes the offset.
    ///
    /// # Errors
    ///
    /// - `OperationError::InvalidInput` if the distance is not finite
    /// - `GeometryError::DegenerateEdge` if an edge has zero length
    /// - `GeometryError::ParallelOffsetLines` if two consecutive offset lines
    ///   are parallel and the policy is [`ParallelPolicy::Reject`]
    /// - `GeometryError::NonFinite` if a corner lands at infinity
    /// - `GeometryError::OffsetCollapsed` if an offset edge vanishes or turns
    ///   against its source edge
    pub fn execute(&self) -> Result<Ring> {
        let edges = self.offset_edges()?;

        if self.distance.abs() < TOLERANCE {
            return Ok(self.ring.clone());
        }

        let n = edges.len();
        let source = self.ring.vertices();
        let mut corners = Vec::with_capacity(n);

        for i in 0..n {
            let prev = if i == 0 { n - 1 } else { i - 1 };
            let corner = match edges[prev].line.intersect(&edges[i].line) {
                Some(pt) => pt,
                None => match self.parallel_policy {
                    ParallelPolicy::Reject => {
                        return Err(GeometryError::ParallelOffsetLines { vertex: i }.into());
                    }
                    ParallelPolicy::OffsetVertex => {
                        warn!(vertex = i, "parallel offset lines, using shifted source vertex");
                        source[i] + edges[prev].normal * self.distance
                    }
                },
            };
            if !(corner.x.is_finite() && corner.y.is_finite()) {
                return Err(GeometryError::NonFinite { vertex: i }.into());
            }
            corners.push(corner);
        }

        for (edge, (a, b)) in self.ring.edges().enumerate() {
            let shifted = corners[(edge + 1) % n] - corners[edge];
            if shifted.dot(&(b - a)) <= 0.0 {
                return Err(GeometryError::OffsetCollapsed { edge }.into());
            }
        }

        debug!(vertices = n, distance = self.distance, "ring offset built");
        Ok(Ring::from_vertices_unchecked(corners))
    }
}
