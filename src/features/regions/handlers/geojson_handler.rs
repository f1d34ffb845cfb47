use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::core::error::Result;
use crate::features::regions::dtos::GeoJsonFeatureDto;
use crate::features::regions::models::RegionLevel;
use crate::features::regions::services::RegionService;
use crate::shared::types::ErrorResponse;

async fn boundary_feature(
    service: &RegionService,
    level: RegionLevel,
    code: &str,
) -> Result<Json<GeoJsonFeatureDto>> {
    let boundary = service
        .get_boundary(level, code)
        .await
        .map_err(|e| e.reported_as(level.geojson_failure_message()))?;

    Ok(Json(boundary.into()))
}

/// Province boundary as a GeoJSON Feature
#[utoipa::path(
    get,
    path = "/geojson/propinsi/{id}",
    params(
        ("id" = String, Path, description = "Province code")
    ),
    responses(
        (status = 200, description = "Province boundary", body = GeoJsonFeatureDto),
        (status = 500, description = "Unknown code or query failure", body = ErrorResponse)
    ),
    tag = "geojson"
)]
pub async fn get_propinsi_geojson(
    State(service): State<Arc<RegionService>>,
    Path(id): Path<String>,
) -> Result<Json<GeoJsonFeatureDto>> {
    boundary_feature(&service, RegionLevel::Propinsi, &id).await
}

/// Regency boundary as a GeoJSON Feature
#[utoipa::path(
    get,
    path = "/geojson/kabupaten/{id}",
    params(
        ("id" = String, Path, description = "Regency code")
    ),
    responses(
        (status = 200, description = "Regency boundary", body = GeoJsonFeatureDto),
        (status = 500, description = "Unknown code or query failure", body = ErrorResponse)
    ),
    tag = "geojson"
)]
pub async fn get_kabupaten_geojson(
    State(service): State<Arc<RegionService>>,
    Path(id): Path<String>,
) -> Result<Json<GeoJsonFeatureDto>> {
    boundary_feature(&service, RegionLevel::Kabupaten, &id).await
}

/// District boundary as a GeoJSON Feature
#[utoipa::path(
    get,
    path = "/geojson/kecamatan/{id}",
    params(
        ("id" = String, Path, description = "District code")
    ),
    responses(
        (status = 200, description = "District boundary", body = GeoJsonFeatureDto),
        (status = 500, description = "Unknown code or query failure", body = ErrorResponse)
    ),
    tag = "geojson"
)]
pub async fn get_kecamatan_geojson(
    State(service): State<Arc<RegionService>>,
    Path(id): Path<String>,
) -> Result<Json<GeoJsonFeatureDto>> {
    boundary_feature(&service, RegionLevel::Kecamatan, &id).await
}

/// Village boundary as a GeoJSON Feature
#[utoipa::path(
    get,
    path = "/geojson/kelurahan/{id}",
    params(
        ("id" = String, Path, description = "Village code")
    ),
    responses(
        (status = 200, description = "Village boundary", body = GeoJsonFeatureDto),
        (status = 500, description = "Unknown code or query failure", body = ErrorResponse)
    ),
    tag = "geojson"
)]
pub async fn get_kelurahan_geojson(
    State(service): State<Arc<RegionService>>,
    Path(id): Path<String>,
) -> Result<Json<GeoJsonFeatureDto>> {
    boundary_feature(&service, RegionLevel::Kelurahan, &id).await
}
