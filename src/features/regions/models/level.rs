use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::{PARAM_KABUPATEN_ID, PARAM_KECAMATAN_ID, PARAM_PROPINSI_ID};

/// Administrative level, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum RegionLevel {
    Propinsi,
    Kabupaten,
    Kecamatan,
    Kelurahan,
}

impl RegionLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RegionLevel::Propinsi => "propinsi",
            RegionLevel::Kabupaten => "kabupaten",
            RegionLevel::Kecamatan => "kecamatan",
            RegionLevel::Kelurahan => "kelurahan",
        }
    }

    /// Table holding this level; also the alias-free name used in geometry lookups.
    pub fn table(&self) -> &'static str {
        self.as_str()
    }

    /// Alias of the table inside the hierarchical join
    pub fn alias(&self) -> &'static str {
        match self {
            RegionLevel::Propinsi => "p",
            RegionLevel::Kabupaten => "k",
            RegionLevel::Kecamatan => "kec",
            RegionLevel::Kelurahan => "kel",
        }
    }

    pub fn code_column(&self) -> &'static str {
        match self {
            RegionLevel::Propinsi => "kd_propinsi",
            RegionLevel::Kabupaten => "kd_kabupaten",
            RegionLevel::Kecamatan => "kd_kecamatan",
            RegionLevel::Kelurahan => "kd_kelurahan",
        }
    }

    pub fn name_column(&self) -> &'static str {
        match self {
            RegionLevel::Propinsi => "nm_propinsi",
            RegionLevel::Kabupaten => "nm_kabupaten",
            RegionLevel::Kecamatan => "nm_kecamatan",
            RegionLevel::Kelurahan => "nm_kelurahan",
        }
    }

    /// Query parameter carrying a code of this level when it acts as an ancestor filter
    pub fn id_param(&self) -> Option<&'static str> {
        match self {
            RegionLevel::Propinsi => Some(PARAM_PROPINSI_ID),
            RegionLevel::Kabupaten => Some(PARAM_KABUPATEN_ID),
            RegionLevel::Kecamatan => Some(PARAM_KECAMATAN_ID),
            RegionLevel::Kelurahan => None,
        }
    }

    pub fn parent(&self) -> Option<RegionLevel> {
        match self {
            RegionLevel::Propinsi => None,
            RegionLevel::Kabupaten => Some(RegionLevel::Propinsi),
            RegionLevel::Kecamatan => Some(RegionLevel::Kabupaten),
            RegionLevel::Kelurahan => Some(RegionLevel::Kecamatan),
        }
    }

    /// Ancestor levels from province downwards, excluding `self`
    pub fn ancestors(&self) -> &'static [RegionLevel] {
        use RegionLevel::*;
        match self {
            Propinsi => &[],
            Kabupaten => &[Propinsi],
            Kecamatan => &[Propinsi, Kabupaten],
            Kelurahan => &[Propinsi, Kabupaten, Kecamatan],
        }
    }

    /// Client message for a listing request missing part of its ancestor chain
    pub fn missing_ancestors_message(&self) -> Option<String> {
        let params: Vec<&str> = self
            .ancestors()
            .iter()
            .filter_map(|l| l.id_param())
            .collect();

        let subject = match params.as_slice() {
            [] => return None,
            [one] => format!("{} is", one),
            [first, second] => format!("{} and {} are", first, second),
            [init @ .., last] => format!("{}, and {} are", init.join(", "), last),
        };

        Some(format!("{} required when not searching by name", subject))
    }

    pub fn search_failure_message(&self) -> &'static str {
        match self {
            RegionLevel::Propinsi => "Failed to get provinces",
            RegionLevel::Kabupaten => "Failed to get regencies",
            RegionLevel::Kecamatan => "Failed to get districts",
            RegionLevel::Kelurahan => "Failed to get villages",
        }
    }

    pub fn geojson_failure_message(&self) -> &'static str {
        match self {
            RegionLevel::Propinsi => "Failed to get province GeoJSON",
            RegionLevel::Kabupaten => "Failed to get regency GeoJSON",
            RegionLevel::Kecamatan => "Failed to get district GeoJSON",
            RegionLevel::Kelurahan => "Failed to get village GeoJSON",
        }
    }

    /// English label used in log lines
    pub fn label(&self) -> &'static str {
        match self {
            RegionLevel::Propinsi => "Province",
            RegionLevel::Kabupaten => "Regency",
            RegionLevel::Kecamatan => "District",
            RegionLevel::Kelurahan => "Village",
        }
    }
}

impl fmt::Display for RegionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
