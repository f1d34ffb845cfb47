use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::regions::models::{
    Boundary, District, Geometry, Province, Regency, RegionLevel, Village,
};

/// Empty query values count as absent
fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

// ==================== Query Parameters ====================

/// Query parameters for `/search/propinsi`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PropinsiSearchQuery {
    /// Search by province name (case-insensitive, partial match)
    #[param(example = "jawa")]
    pub name: Option<String>,
}

impl PropinsiSearchQuery {
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }
}

/// Query parameters for `/search/kabupaten`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct KabupatenSearchQuery {
    /// Search by regency name (case-insensitive, partial match)
    #[param(example = "bandung")]
    pub name: Option<String>,
    /// Province code; required when `name` is absent
    #[param(example = "32")]
    pub propinsi_id: Option<String>,
}

impl KabupatenSearchQuery {
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    pub fn propinsi_id(&self) -> Option<&str> {
        non_empty(&self.propinsi_id)
    }
}

/// Query parameters for `/search/kecamatan`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct KecamatanSearchQuery {
    /// Search by district name (case-insensitive, partial match)
    #[param(example = "coblong")]
    pub name: Option<String>,
    /// Province code; required when `name` is absent
    #[param(example = "32")]
    pub propinsi_id: Option<String>,
    /// Regency code; required when `name` is absent
    #[param(example = "3273")]
    pub kabupaten_id: Option<String>,
}

impl KecamatanSearchQuery {
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    pub fn propinsi_id(&self) -> Option<&str> {
        non_empty(&self.propinsi_id)
    }

    pub fn kabupaten_id(&self) -> Option<&str> {
        non_empty(&self.kabupaten_id)
    }
}

/// Query parameters for `/search/kelurahan`
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct KelurahanSearchQuery {
    /// Search by village name (case-insensitive, partial match)
    #[param(example = "dago")]
    pub name: Option<String>,
    /// Province code; required when `name` is absent
    #[param(example = "32")]
    pub propinsi_id: Option<String>,
    /// Regency code; required when `name` is absent
    #[param(example = "3273")]
    pub kabupaten_id: Option<String>,
    /// District code; required when `name` is absent
    #[param(example = "327302")]
    pub kecamatan_id: Option<String>,
}

impl KelurahanSearchQuery {
    pub fn name(&self) -> Option<&str> {
        non_empty(&self.name)
    }

    pub fn propinsi_id(&self) -> Option<&str> {
        non_empty(&self.propinsi_id)
    }

    pub fn kabupaten_id(&self) -> Option<&str> {
        non_empty(&self.kabupaten_id)
    }

    pub fn kecamatan_id(&self) -> Option<&str> {
        non_empty(&self.kecamatan_id)
    }
}

// ==================== Search Responses ====================

/// Province row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProvinceResponseDto {
    #[schema(example = "32")]
    pub kd_propinsi: String,
    #[schema(example = "JAWA BARAT")]
    pub nm_propinsi: String,
}

impl From<Province> for ProvinceResponseDto {
    fn from(province: Province) -> Self {
        Self {
            kd_propinsi: province.province_code,
            nm_propinsi: province.province_name,
        }
    }
}

/// Regency row with its province
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RegencyResponseDto {
    pub kd_propinsi: String,
    pub nm_propinsi: String,
    #[schema(example = "3273")]
    pub kd_kabupaten: String,
    #[schema(example = "KOTA BANDUNG")]
    pub nm_kabupaten: String,
}

impl From<Regency> for RegencyResponseDto {
    fn from(regency: Regency) -> Self {
        Self {
            kd_propinsi: regency.province_code,
            nm_propinsi: regency.province_name,
            kd_kabupaten: regency.regency_code,
            nm_kabupaten: regency.regency_name,
        }
    }
}

/// District row with its regency and province
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DistrictResponseDto {
    pub kd_propinsi: String,
    pub nm_propinsi: String,
    pub kd_kabupaten: String,
    pub nm_kabupaten: String,
    #[schema(example = "327302")]
    pub kd_kecamatan: String,
    #[schema(example = "COBLONG")]
    pub nm_kecamatan: String,
}

impl From<District> for DistrictResponseDto {
    fn from(district: District) -> Self {
        Self {
            kd_propinsi: district.province_code,
            nm_propinsi: district.province_name,
            kd_kabupaten: district.regency_code,
            nm_kabupaten: district.regency_name,
            kd_kecamatan: district.district_code,
            nm_kecamatan: district.district_name,
        }
    }
}

/// Village row with its full hierarchy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct VillageResponseDto {
    pub kd_propinsi: String,
    pub nm_propinsi: String,
    pub kd_kabupaten: String,
    pub nm_kabupaten: String,
    pub kd_kecamatan: String,
    pub nm_kecamatan: String,
    #[schema(example = "3273021001")]
    pub kd_kelurahan: String,
    #[schema(example = "DAGO")]
    pub nm_kelurahan: String,
}

impl From<Village> for VillageResponseDto {
    fn from(village: Village) -> Self {
        Self {
            kd_propinsi: village.province_code,
            nm_propinsi: village.province_name,
            kd_kabupaten: village.regency_code,
            nm_kabupaten: village.regency_name,
            kd_kecamatan: village.district_code,
            nm_kecamatan: village.district_name,
            kd_kelurahan: village.village_code,
            nm_kelurahan: village.village_name,
        }
    }
}

// ==================== GeoJSON Responses ====================

/// GeoJSON Feature wrapping a region boundary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeoJsonFeatureDto {
    #[serde(rename = "type")]
    #[schema(example = "Feature")]
    pub feature_type: String,
    pub properties: GeoJsonPropertiesDto,
    /// GeoJSON geometry object (`type` + `coordinates`)
    #[schema(value_type = Object)]
    pub geometry: Geometry,
}

/// Region code as emitted in `properties.id`: a number when the code is
/// all digits, the raw code otherwise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum RegionId {
    Number(u64),
    Code(String),
}

impl From<String> for RegionId {
    fn from(code: String) -> Self {
        match code.parse::<u64>() {
            Ok(number) if code.bytes().all(|b| b.is_ascii_digit()) => RegionId::Number(number),
            _ => RegionId::Code(code),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GeoJsonPropertiesDto {
    /// Region code
    #[schema(example = 32)]
    pub id: RegionId,
    #[schema(example = "JAWA BARAT")]
    pub name: String,
    /// Administrative level of the region
    #[serde(rename = "type")]
    pub level: RegionLevel,
}

impl From<Boundary> for GeoJsonFeatureDto {
    fn from(boundary: Boundary) -> Self {
        Self {
            feature_type: "Feature".to_string(),
            properties: GeoJsonPropertiesDto {
                id: boundary.code.into(),
                name: boundary.name,
                level: boundary.level,
            },
            geometry: boundary.geometry,
        }
    }
}
