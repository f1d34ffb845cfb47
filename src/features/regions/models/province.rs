use serde::Serialize;
use sqlx::FromRow;

/// Province (propinsi), the top of the hierarchy
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Province {
    pub province_code: String,
    pub province_name: String,
}
