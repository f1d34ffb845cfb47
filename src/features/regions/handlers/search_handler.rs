use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppQuery;
use crate::features::regions::dtos::{
    DistrictResponseDto, KabupatenSearchQuery, KecamatanSearchQuery, KelurahanSearchQuery,
    PropinsiSearchQuery, ProvinceResponseDto, RegencyResponseDto, VillageResponseDto,
};
use crate::features::regions::models::RegionLevel;
use crate::features::regions::services::RegionService;
use crate::shared::types::ErrorResponse;

/// Listing without a name needs every ancestor code of the level.
fn missing_ancestors(level: RegionLevel) -> AppError {
    AppError::BadRequest(
        level
            .missing_ancestors_message()
            .unwrap_or_else(|| format!("invalid {} search", level)),
    )
}

fn into_dtos<T, D: From<T>>(rows: Vec<T>) -> Json<Vec<D>> {
    Json(rows.into_iter().map(Into::into).collect())
}

/// Search provinces
///
/// Lists every province, or those whose name contains `name`.
#[utoipa::path(
    get,
    path = "/search/propinsi",
    params(PropinsiSearchQuery),
    responses(
        (status = 200, description = "Provinces ordered by name", body = Vec<ProvinceResponseDto>),
        (status = 500, description = "Query failed", body = ErrorResponse)
    ),
    tag = "search"
)]
pub async fn search_propinsi(
    State(service): State<Arc<RegionService>>,
    AppQuery(query): AppQuery<PropinsiSearchQuery>,
) -> Result<Json<Vec<ProvinceResponseDto>>> {
    let level = RegionLevel::Propinsi;

    let provinces = match query.name() {
        Some(name) => service.search_provinces(name).await,
        None => service.list_provinces().await,
    }
    .map_err(|e| e.reported_as(level.search_failure_message()))?;

    Ok(into_dtos(provinces))
}

/// Search regencies
///
/// Without `name`, lists the regencies of `propinsi_id`. With `name`,
/// `propinsi_id` is an optional filter.
#[utoipa::path(
    get,
    path = "/search/kabupaten",
    params(KabupatenSearchQuery),
    responses(
        (status = 200, description = "Regencies ordered by name", body = Vec<RegencyResponseDto>),
        (status = 400, description = "propinsi_id missing and no name given", body = ErrorResponse),
        (status = 500, description = "Query failed", body = ErrorResponse)
    ),
    tag = "search"
)]
pub async fn search_kabupaten(
    State(service): State<Arc<RegionService>>,
    AppQuery(query): AppQuery<KabupatenSearchQuery>,
) -> Result<Json<Vec<RegencyResponseDto>>> {
    let level = RegionLevel::Kabupaten;

    let regencies = match query.name() {
        Some(name) => service.search_regencies(name, query.propinsi_id()).await,
        None => {
            let propinsi_id = query
                .propinsi_id()
                .ok_or_else(|| missing_ancestors(level))?;
            service.list_regencies(propinsi_id).await
        }
    }
    .map_err(|e| e.reported_as(level.search_failure_message()))?;

    Ok(into_dtos(regencies))
}

/// Search districts
///
/// Without `name`, lists the districts under `propinsi_id` + `kabupaten_id`.
/// With `name`, both are optional filters.
#[utoipa::path(
    get,
    path = "/search/kecamatan",
    params(KecamatanSearchQuery),
    responses(
        (status = 200, description = "Districts ordered by name", body = Vec<DistrictResponseDto>),
        (status = 400, description = "Ancestor codes missing and no name given", body = ErrorResponse),
        (status = 500, description = "Query failed", body = ErrorResponse)
    ),
    tag = "search"
)]
pub async fn search_kecamatan(
    State(service): State<Arc<RegionService>>,
    AppQuery(query): AppQuery<KecamatanSearchQuery>,
) -> Result<Json<Vec<DistrictResponseDto>>> {
    let level = RegionLevel::Kecamatan;

    let districts = match query.name() {
        Some(name) => {
            service
                .search_districts(name, query.propinsi_id(), query.kabupaten_id())
                .await
        }
        None => match (query.propinsi_id(), query.kabupaten_id()) {
            (Some(propinsi_id), Some(kabupaten_id)) => {
                service.list_districts(propinsi_id, kabupaten_id).await
            }
            _ => return Err(missing_ancestors(level)),
        },
    }
    .map_err(|e| e.reported_as(level.search_failure_message()))?;

    Ok(into_dtos(districts))
}

/// Search villages
///
/// Without `name`, lists the villages under the full chain
/// `propinsi_id` + `kabupaten_id` + `kecamatan_id`. With `name`, any subset
/// of them filters the search.
#[utoipa::path(
    get,
    path = "/search/kelurahan",
    params(KelurahanSearchQuery),
    responses(
        (status = 200, description = "Villages ordered by name", body = Vec<VillageResponseDto>),
        (status = 400, description = "Ancestor codes missing and no name given", body = ErrorResponse),
        (status = 500, description = "Query failed", body = ErrorResponse)
    ),
    tag = "search"
)]
pub async fn search_kelurahan(
    State(service): State<Arc<RegionService>>,
    AppQuery(query): AppQuery<KelurahanSearchQuery>,
) -> Result<Json<Vec<VillageResponseDto>>> {
    let level = RegionLevel::Kelurahan;

    let villages = match query.name() {
        Some(name) => {
            service
                .search_villages(
                    name,
                    query.propinsi_id(),
                    query.kabupaten_id(),
                    query.kecamatan_id(),
                )
                .await
        }
        None => match (
            query.propinsi_id(),
            query.kabupaten_id(),
            query.kecamatan_id(),
        ) {
            (Some(propinsi_id), Some(kabupaten_id), Some(kecamatan_id)) => {
                service
                    .list_villages(propinsi_id, kabupaten_id, kecamatan_id)
                    .await
            }
            _ => return Err(missing_ancestors(level)),
        },
    }
    .map_err(|e| e.reported_as(level.search_failure_message()))?;

    Ok(into_dtos(villages))
}
