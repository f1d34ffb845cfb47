use serde::Serialize;
use sqlx::FromRow;

/// District (kecamatan) joined with its regency and province
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct District {
    pub province_code: String,
    pub province_name: String,
    pub regency_code: String,
    pub regency_name: String,
    pub district_code: String,
    pub district_name: String,
}
