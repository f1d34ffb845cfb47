use async_trait::async_trait;
use sqlx::{postgres::PgRow, FromRow, PgPool};

use crate::core::error::Result;
use crate::features::regions::models::{District, Province, Regency, RegionLevel, Village};
use crate::features::regions::services::region_query::{boundary_statement, RegionFilter};

/// Raw boundary row; `geometry` is the text produced by `ST_AsGeoJSON`
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct BoundaryRow {
    pub code: String,
    pub name: String,
    pub geometry: Option<String>,
}

/// Read access to the four region tables.
///
/// Each call issues exactly one query.
#[async_trait]
pub trait RegionStore: Send + Sync {
    async fn provinces(&self, filter: &RegionFilter) -> Result<Vec<Province>>;

    async fn regencies(&self, filter: &RegionFilter) -> Result<Vec<Regency>>;

    async fn districts(&self, filter: &RegionFilter) -> Result<Vec<District>>;

    async fn villages(&self, filter: &RegionFilter) -> Result<Vec<Village>>;

    /// Rows whose code equals `code` at `level`; at most two are returned.
    async fn boundaries(&self, level: RegionLevel, code: &str) -> Result<Vec<BoundaryRow>>;
}

/// PostgreSQL + PostGIS backed store
pub struct PgRegionStore {
    pool: PgPool,
}

impl PgRegionStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch<T>(&self, filter: &RegionFilter) -> Result<Vec<T>>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let mut builder = filter.select_statement();
        let rows = builder
            .build_query_as::<T>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}

#[async_trait]
impl RegionStore for PgRegionStore {
    async fn provinces(&self, filter: &RegionFilter) -> Result<Vec<Province>> {
        self.fetch(filter).await
    }

    async fn regencies(&self, filter: &RegionFilter) -> Result<Vec<Regency>> {
        self.fetch(filter).await
    }

    async fn districts(&self, filter: &RegionFilter) -> Result<Vec<District>> {
        self.fetch(filter).await
    }

    async fn villages(&self, filter: &RegionFilter) -> Result<Vec<Village>> {
        self.fetch(filter).await
    }

    async fn boundaries(&self, level: RegionLevel, code: &str) -> Result<Vec<BoundaryRow>> {
        let mut builder = boundary_statement(level, code);
        let rows = builder
            .build_query_as::<BoundaryRow>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }
}
