//! Indonesian administrative regions (wilayah) feature.
//!
//! Read-only search and boundary lookup over the PostGIS region tables.
//!
//! ## Data Hierarchy
//!
//! - Level 1: Provinces (Propinsi)
//! - Level 2: Regencies/Cities (Kabupaten/Kota)
//! - Level 3: Districts (Kecamatan)
//! - Level 4: Villages (Kelurahan/Desa)
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | GET | `/search/propinsi` | List provinces, or search by `name` |
//! | GET | `/search/kabupaten` | List regencies of `propinsi_id`, or search by `name` |
//! | GET | `/search/kecamatan` | List districts of `propinsi_id` + `kabupaten_id`, or search by `name` |
//! | GET | `/search/kelurahan` | List villages of the full chain, or search by `name` |
//! | GET | `/geojson/propinsi/{id}` | Province boundary as a GeoJSON Feature |
//! | GET | `/geojson/kabupaten/{id}` | Regency boundary as a GeoJSON Feature |
//! | GET | `/geojson/kecamatan/{id}` | District boundary as a GeoJSON Feature |
//! | GET | `/geojson/kelurahan/{id}` | Village boundary as a GeoJSON Feature |
//!
//! Listing without `name` requires every ancestor code of the level; with
//! `name`, ancestor codes are optional filters.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::RegionService;
