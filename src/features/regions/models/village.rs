use serde::Serialize;
use sqlx::FromRow;

/// Village (kelurahan/desa) with its full ancestor chain
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Village {
    pub province_code: String,
    pub province_name: String,
    pub regency_code: String,
    pub regency_name: String,
    pub district_code: String,
    pub district_name: String,
    pub village_code: String,
    pub village_name: String,
}
