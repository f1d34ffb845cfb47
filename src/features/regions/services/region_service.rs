use std::sync::Arc;

use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::regions::models::{
    Boundary, District, Geometry, Province, Regency, RegionLevel, Village,
};
use crate::features::regions::services::{PgRegionStore, RegionFilter, RegionStore};

/// Queries over the Indonesian administrative hierarchy
pub struct RegionService {
    store: Arc<dyn RegionStore>,
}

impl RegionService {
    pub fn new(store: Arc<dyn RegionStore>) -> Self {
        Self { store }
    }

    pub fn with_pool(pool: PgPool) -> Self {
        Self::new(Arc::new(PgRegionStore::new(pool)))
    }

    // ==================== Province Methods ====================

    /// List all provinces
    pub async fn list_provinces(&self) -> Result<Vec<Province>> {
        self.store
            .provinces(&RegionFilter::new(RegionLevel::Propinsi))
            .await
    }

    /// Search provinces by name
    pub async fn search_provinces(&self, name: &str) -> Result<Vec<Province>> {
        let filter = RegionFilter::new(RegionLevel::Propinsi).with_name(name);
        self.store.provinces(&filter).await
    }

    // ==================== Regency Methods ====================

    /// List the regencies of a province
    pub async fn list_regencies(&self, province_code: &str) -> Result<Vec<Regency>> {
        let filter = RegionFilter::new(RegionLevel::Kabupaten)
            .with_ancestor(RegionLevel::Propinsi, province_code);
        debug_assert!(filter.is_full_chain());
        self.store.regencies(&filter).await
    }

    /// Search regencies by name, optionally within a province
    pub async fn search_regencies(
        &self,
        name: &str,
        province_code: Option<&str>,
    ) -> Result<Vec<Regency>> {
        let filter = RegionFilter::new(RegionLevel::Kabupaten)
            .with_name(name)
            .with_optional_ancestor(RegionLevel::Propinsi, province_code);
        self.store.regencies(&filter).await
    }

    // ==================== District Methods ====================

    /// List the districts of a regency; the province must match too
    pub async fn list_districts(
        &self,
        province_code: &str,
        regency_code: &str,
    ) -> Result<Vec<District>> {
        let filter = RegionFilter::new(RegionLevel::Kecamatan)
            .with_ancestor(RegionLevel::Propinsi, province_code)
            .with_ancestor(RegionLevel::Kabupaten, regency_code);
        debug_assert!(filter.is_full_chain());
        self.store.districts(&filter).await
    }

    /// Search districts by name with any subset of ancestor filters
    pub async fn search_districts(
        &self,
        name: &str,
        province_code: Option<&str>,
        regency_code: Option<&str>,
    ) -> Result<Vec<District>> {
        let filter = RegionFilter::new(RegionLevel::Kecamatan)
            .with_name(name)
            .with_optional_ancestor(RegionLevel::Propinsi, province_code)
            .with_optional_ancestor(RegionLevel::Kabupaten, regency_code);
        self.store.districts(&filter).await
    }

    // ==================== Village Methods ====================

    /// List the villages of a district given its full ancestor chain
    pub async fn list_villages(
        &self,
        province_code: &str,
        regency_code: &str,
        district_code: &str,
    ) -> Result<Vec<Village>> {
        let filter = RegionFilter::new(RegionLevel::Kelurahan)
            .with_ancestor(RegionLevel::Propinsi, province_code)
            .with_ancestor(RegionLevel::Kabupaten, regency_code)
            .with_ancestor(RegionLevel::Kecamatan, district_code);
        debug_assert!(filter.is_full_chain());
        self.store.villages(&filter).await
    }

    /// Search villages by name with any subset of ancestor filters
    pub async fn search_villages(
        &self,
        name: &str,
        province_code: Option<&str>,
        regency_code: Option<&str>,
        district_code: Option<&str>,
    ) -> Result<Vec<Village>> {
        let filter = RegionFilter::new(RegionLevel::Kelurahan)
            .with_name(name)
            .with_optional_ancestor(RegionLevel::Propinsi, province_code)
            .with_optional_ancestor(RegionLevel::Kabupaten, regency_code)
            .with_optional_ancestor(RegionLevel::Kecamatan, district_code);
        self.store.villages(&filter).await
    }

    // ==================== Boundary Methods ====================

    /// Boundary of the region with exactly this code.
    ///
    /// Fails when no row or more than one row matches, or when the stored
    /// geometry is missing or not valid GeoJSON.
    pub async fn get_boundary(&self, level: RegionLevel, code: &str) -> Result<Boundary> {
        let mut rows = self.store.boundaries(level, code).await?;

        let row = match rows.len() {
            0 => {
                return Err(AppError::NotFound(format!(
                    "{} with code '{}' not found",
                    level.label(),
                    code
                )))
            }
            1 => rows.remove(0),
            n => {
                return Err(AppError::Internal(format!(
                    "{} code '{}' matched {} rows",
                    level.label(),
                    code,
                    n
                )))
            }
        };

        let raw = row.geometry.ok_or_else(|| {
            AppError::Geometry(format!("{} '{}' has no geometry", level.label(), code))
        })?;
        let geometry = Geometry::from_geojson(&raw)?;
        if geometry.is_empty() {
            tracing::warn!(
                "{} '{}' has an empty {} geometry",
                level.label(),
                code,
                geometry.type_name()
            );
        }

        Ok(Boundary {
            level,
            code: row.code,
            name: row.name,
            geometry,
        })
    }
}
