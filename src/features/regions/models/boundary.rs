use serde::Serialize;

use super::{Geometry, RegionLevel};

/// Boundary of a single region, looked up by its exact code
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Boundary {
    pub level: RegionLevel,
    pub code: String,
    pub name: String,
    pub geometry: Geometry,
}
