use serde::Serialize;

use crate::error::{GeometryError, Result};
use crate::math::polygon_2d::{segment_length, signed_area_2d};
use crate::math::{Point2, TOLERANCE};

/// Orientation of a closed ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Winding {
    /// Counter-clockwise, positive shoelace area (right-hand rule).
    CounterClockwise,
    /// Clockwise, negative shoelace area.
    Clockwise,
}

/// A simple closed polygon boundary.
///
/// Vertices are stored open: the closing edge runs from the last vertex back
/// to the first, and the first vertex is never repeated at the end. The
/// coordinate space (geographic degrees or planar meters) is tracked by the
/// caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Ring {
    vertices: Vec<Point2>,
}

impl Ring {
    /// Creates a ring from a vertex list in either open or closed convention.
    ///
    /// A trailing vertex equal to the first one is dropped.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::TooFewVertices` if fewer than 3 vertices remain.
    pub fn new(mut vertices: Vec<Point2>) -> Result<Self> {
        if vertices.len() > 1 {
            let first = vertices[0];
            let last = vertices[vertices.len() - 1];
            if segment_length(&first, &last) < TOLERANCE {
                vertices.pop();
            }
        }
        if vertices.len() < 3 {
            return Err(GeometryError::TooFewVertices(vertices.len()).into());
        }
        Ok(Self { vertices })
    }

    /// Builds a ring from `(x, y)` pairs.
    ///
    /// # Errors
    ///
    /// See [`Ring::new`].
    pub fn from_coords(coords: &[[f64; 2]]) -> Result<Self> {
        Self::new(coords.iter().map(|c| Point2::new(c[0], c[1])).collect())
    }

    /// Open vertex list.
    #[must_use]
    pub fn vertices(&self) -> &[Point2] {
        &self.vertices
    }

    /// Number of vertices (equal to the number of edges).
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`; a ring holds at least 3 vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterates over the edges `(v_i, v_{(i+1) mod n})`.
    pub fn edges(&self) -> impl Iterator<Item = (&Point2, &Point2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (&self.vertices[i], &self.vertices[(i + 1) % n]))
    }

    /// Vertex list in the closed convention (first vertex repeated at the end).
    #[must_use]
    pub fn to_closed(&self) -> Vec<Point2> {
        let mut closed = Vec::with_capacity(self.vertices.len() + 1);
        closed.extend_from_slice(&self.vertices);
        closed.push(self.vertices[0]);
        closed
    }

    /// Shoelace area, positive when counter-clockwise.
    #[must_use]
    pub fn signed_area(&self) -> f64 {
        signed_area_2d(&self.vertices)
    }

    /// Current orientation. Zero-area rings count as counter-clockwise.
    #[must_use]
    pub fn winding(&self) -> Winding {
        if self.signed_area() < 0.0 {
            Winding::Clockwise
        } else {
            Winding::CounterClockwise
        }
    }

    /// Returns the ring in the requested orientation, keeping the first vertex.
    #[must_use]
    pub fn rewound(&self, winding: Winding) -> Self {
        if self.winding() == winding {
            return self.clone();
        }
        let mut vertices = Vec::with_capacity(self.vertices.len());
        vertices.push(self.vertices[0]);
        vertices.extend(self.vertices[1..].iter().rev());
        Self { vertices }
    }

    /// Applies `f` to every vertex, keeping the order.
    ///
    /// # Errors
    ///
    /// Propagates the first error returned by `f`.
    pub fn try_map<F>(&self, f: F) -> Result<Self>
    where
        F: FnMut(&Point2) -> Result<Point2>,
    {
        let vertices = self.vertices.iter().map(f).collect::<Result<Vec<_>>>()?;
        Ok(Self { vertices })
    }

    pub(crate) fn from_vertices_unchecked(vertices: Vec<Point2>) -> Self {
        debug_assert!(vertices.len() >= 3);
        Self { vertices }
    }
}
