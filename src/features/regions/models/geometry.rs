use serde::{Deserialize, Serialize};

use crate::core::error::{AppError, Result};

/// `[longitude, latitude]`, optionally followed by elevation
pub type Position = Vec<f64>;

/// GeoJSON geometry object (RFC 7946 section 3.1)
///
/// Any `crs` or `bbox` member emitted by PostGIS is dropped on parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Geometry {
    Point { coordinates: Position },
    MultiPoint { coordinates: Vec<Position> },
    LineString { coordinates: Vec<Position> },
    MultiLineString { coordinates: Vec<Vec<Position>> },
    Polygon { coordinates: Vec<Vec<Position>> },
    MultiPolygon { coordinates: Vec<Vec<Vec<Position>>> },
    GeometryCollection { geometries: Vec<Geometry> },
}

impl Geometry {
    /// Parse the text produced by `ST_AsGeoJSON`.
    pub fn from_geojson(raw: &str) -> Result<Self> {
        let geometry: Geometry = serde_json::from_str(raw)
            .map_err(|e| AppError::Geometry(format!("malformed GeoJSON geometry: {}", e)))?;

        if geometry.positions().any(|p| p.len() < 2) {
            return Err(AppError::Geometry(
                "position with fewer than two coordinates".to_string(),
            ));
        }

        Ok(geometry)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Geometry::Point { .. } => "Point",
            Geometry::MultiPoint { .. } => "MultiPoint",
            Geometry::LineString { .. } => "LineString",
            Geometry::MultiLineString { .. } => "MultiLineString",
            Geometry::Polygon { .. } => "Polygon",
            Geometry::MultiPolygon { .. } => "MultiPolygon",
            Geometry::GeometryCollection { .. } => "GeometryCollection",
        }
    }

    /// True when the geometry holds no positions at all (e.g. `POLYGON EMPTY`).
    pub fn is_empty(&self) -> bool {
        self.positions().next().is_none()
    }

    /// Every position in the geometry, depth first.
    pub fn positions(&self) -> Box<dyn Iterator<Item = &Position> + '_> {
        match self {
            Geometry::Point { coordinates } => Box::new(std::iter::once(coordinates)),
            Geometry::MultiPoint { coordinates } | Geometry::LineString { coordinates } => {
                Box::new(coordinates.iter())
            }
            Geometry::MultiLineString { coordinates } | Geometry::Polygon { coordinates } => {
                Box::new(coordinates.iter().flatten())
            }
            Geometry::MultiPolygon { coordinates } => {
                Box::new(coordinates.iter().flatten().flatten())
            }
            Geometry::GeometryCollection { geometries } => {
                Box::new(geometries.iter().flat_map(|g| g.positions()))
            }
        }
    }
}
