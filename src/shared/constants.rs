/// Name reported by the health endpoint
pub const SERVICE_NAME: &str = "Location Service";

// =============================================================================
// QUERY PARAMETERS
// =============================================================================

pub const PARAM_PROPINSI_ID: &str = "propinsi_id";
pub const PARAM_KABUPATEN_ID: &str = "kabupaten_id";
pub const PARAM_KECAMATAN_ID: &str = "kecamatan_id";
