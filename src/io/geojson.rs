//! Reading and writing polygon rings as GeoJSON.
//!
//! Only the outer ring of a `Polygon` is used. Positions are `[lon, lat]`
//! (extra ordinates such as altitude are ignored).

use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::{OperationError, Result};
use crate::geometry::Ring;
use crate::math::Point2;

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Document {
    FeatureCollection { features: Vec<Feature> },
    Feature(Feature),
    Polygon(Polygon),
}

#[derive(Deserialize)]
struct Feature {
    geometry: Geometry,
}

impl Feature {
    fn into_polygon(self) -> Polygon {
        let Geometry::Polygon(polygon) = self.geometry;
        polygon
    }
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Geometry {
    Polygon(Polygon),
}

#[derive(Deserialize)]
struct Polygon {
    coordinates: Vec<Vec<Vec<f64>>>,
}

impl Polygon {
    fn outer_ring(self) -> Result<Ring> {
        let outer = self
            .coordinates
            .into_iter()
            .next()
            .ok_or_else(|| OperationError::InvalidInput("polygon has no rings".to_owned()))?;
        let points = outer
            .iter()
            .enumerate()
            .map(|(i, position)| match position.as_slice() {
                [x, y, ..] => Ok(Point2::new(*x, *y)),
                _ => Err(OperationError::InvalidInput(format!(
                    "position {i} has fewer than 2 ordinates"
                ))
                .into()),
            })
            .collect::<Result<Vec<_>>>()?;
        Ring::new(points)
    }
}

/// Parses the outer ring of a GeoJSON `Polygon`, `Feature` or
/// `FeatureCollection` (first feature).
///
/// # Errors
///
/// - `OperationError::InvalidInput` if the text is not one of the accepted shapes
/// - `GeometryError::TooFewVertices` if the ring has fewer than 3 vertices
pub fn ring_from_geojson(source: &str) -> Result<Ring> {
    let document: Document = serde_json::from_str(source)
        .map_err(|e| OperationError::InvalidInput(format!("geojson: {e}")))?;
    let polygon = match document {
        Document::Polygon(polygon) => polygon,
        Document::Feature(feature) => feature.into_polygon(),
        Document::FeatureCollection { features } => features
            .into_iter()
            .next()
            .ok_or_else(|| OperationError::InvalidInput("feature collection is empty".to_owned()))?
            .into_polygon(),
    };
    polygon.outer_ring()
}

/// Wraps a ring into a GeoJSON `Feature` with a closed `Polygon` geometry.
#[must_use]
pub fn ring_to_feature(ring: &Ring) -> Value {
    let coordinates: Vec<[f64; 2]> = ring.to_closed().iter().map(|p| [p.x, p.y]).collect();
    json!({
        "type": "Feature",
        "properties": {},
        "geometry": {
            "type": "Polygon",
            "coordinates": [coordinates],
        },
    })
}
