use utoipa::{Modify, OpenApi};

use crate::features::health::handlers as health_handlers;
use crate::features::regions::models::RegionLevel;
use crate::features::regions::{dtos as regions_dtos, handlers as regions_handlers};
use crate::shared::types::{ErrorResponse, HealthResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Search
        regions_handlers::search_propinsi,
        regions_handlers::search_kabupaten,
        regions_handlers::search_kecamatan,
        regions_handlers::search_kelurahan,
        // GeoJSON
        regions_handlers::get_propinsi_geojson,
        regions_handlers::get_kabupaten_geojson,
        regions_handlers::get_kecamatan_geojson,
        regions_handlers::get_kelurahan_geojson,
        // Health
        health_handlers::health_check,
    ),
    components(
        schemas(
            // Shared
            ErrorResponse,
            HealthResponse,
            // Regions
            RegionLevel,
            regions_dtos::ProvinceResponseDto,
            regions_dtos::RegencyResponseDto,
            regions_dtos::DistrictResponseDto,
            regions_dtos::VillageResponseDto,
            regions_dtos::GeoJsonFeatureDto,
            regions_dtos::GeoJsonPropertiesDto,
            regions_dtos::RegionId,
        )
    ),
    tags(
        (name = "search", description = "Search Indonesian administrative regions by hierarchy or name"),
        (name = "geojson", description = "Region boundaries as GeoJSON Features"),
        (name = "health", description = "Liveness check"),
    ),
    info(
        title = "Location Service API",
        version = "1.0",
        description = "API untuk pencarian dan mendapatkan data GeoJSON wilayah Indonesia",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
