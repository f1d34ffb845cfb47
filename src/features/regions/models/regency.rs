use serde::Serialize;
use sqlx::FromRow;

/// Regency or city (kabupaten/kota) joined with its province
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Regency {
    pub province_code: String,
    pub province_name: String,
    pub regency_code: String,
    pub regency_name: String,
}
