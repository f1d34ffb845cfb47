mod region_query;
mod region_service;
mod region_store;

pub use region_query::RegionFilter;
pub use region_service::RegionService;
#[cfg(test)]
pub use region_store::BoundaryRow;
pub use region_store::{PgRegionStore, RegionStore};
