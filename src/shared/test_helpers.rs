#[cfg(test)]
pub use in_memory::InMemoryRegionStore;

#[cfg(test)]
mod in_memory {
    use async_trait::async_trait;

    use crate::core::error::{AppError, Result};
    use crate::features::regions::models::{District, Province, Regency, RegionLevel, Village};
    use crate::features::regions::services::{BoundaryRow, RegionFilter, RegionStore};

    const SQUARE: &str = r#"{"type":"MultiPolygon","coordinates":[[[[106.0,-6.0],[108.0,-6.0],[108.0,-7.0],[106.0,-7.0],[106.0,-6.0]]]]}"#;
    const POLYGON: &str = r#"{"type":"Polygon","coordinates":[[[107.5,-6.8],[107.7,-6.8],[107.7,-7.0],[107.5,-6.8]]]}"#;

    #[derive(Debug, Clone)]
    pub struct StoredRegion {
        pub level: RegionLevel,
        pub code: String,
        pub name: String,
        pub parent_code: Option<String>,
        pub geometry: Option<String>,
    }

    /// Region tables held in memory, evaluated the way the SQL statements are
    #[derive(Debug, Clone, Default)]
    pub struct InMemoryRegionStore {
        pub regions: Vec<StoredRegion>,
        /// Rows returned by boundary lookups in addition to `regions`
        pub extra_boundaries: Vec<(RegionLevel, BoundaryRow)>,
        pub fail: bool,
    }

    type Chain<'a> = Vec<&'a StoredRegion>;

    impl InMemoryRegionStore {
        /// Small slice of the Indonesian hierarchy around Bandung
        pub fn seeded() -> Self {
            let mut store = Self::default();
            use RegionLevel::*;

            store.add(Propinsi, "31", "DKI JAKARTA", None, Some(SQUARE));
            store.add(Propinsi, "32", "JAWA BARAT", None, Some(SQUARE));
            store.add(Propinsi, "33", "JAWA TENGAH", None, Some(SQUARE));
            store.add(Propinsi, "35", "JAWA TIMUR", None, Some(SQUARE));
            store.add(Propinsi, "36", "BANTEN", None, Some(SQUARE));

            store.add(Kabupaten, "3171", "KOTA ADM. JAKARTA SELATAN", Some("31"), None);
            store.add(Kabupaten, "3204", "BANDUNG", Some("32"), Some(SQUARE));
            store.add(Kabupaten, "3217", "BANDUNG BARAT", Some("32"), Some(SQUARE));
            store.add(Kabupaten, "3273", "KOTA BANDUNG", Some("32"), Some(POLYGON));
            store.add(Kabupaten, "3374", "KOTA SEMARANG", Some("33"), Some(SQUARE));

            store.add(Kecamatan, "320401", "CIWIDEY", Some("3204"), Some(POLYGON));
            store.add(Kecamatan, "327301", "SUKASARI", Some("3273"), Some(POLYGON));
            store.add(Kecamatan, "327302", "COBLONG", Some("3273"), Some(POLYGON));
            store.add(Kecamatan, "337401", "SEMARANG TENGAH", Some("3374"), Some("{\"type\":"));

            store.add(Kelurahan, "3204011001", "SUKASARI", Some("320401"), Some(POLYGON));
            store.add(Kelurahan, "3204011002", "LEBAKMUNCANG", Some("320401"), Some(POLYGON));
            store.add(Kelurahan, "3273011001", "ISOLA", Some("327301"), Some(POLYGON));
            store.add(Kelurahan, "3273011002", "GEGERKALONG", Some("327301"), Some(POLYGON));
            store.add(Kelurahan, "3273011003", "SUKASARI", Some("327301"), Some(POLYGON));
            store.add(Kelurahan, "3273021001", "DAGO", Some("327302"), Some(POLYGON));
            store.add(Kelurahan, "3273021002", "LEBAKGEDE", Some("327302"), Some(POLYGON));

            store
        }

        /// Store whose every call fails like an unreachable database
        pub fn failing() -> Self {
            Self {
                fail: true,
                ..Self::default()
            }
        }

        pub fn add(
            &mut self,
            level: RegionLevel,
            code: &str,
            name: &str,
            parent_code: Option<&str>,
            geometry: Option<&str>,
        ) {
            self.regions.push(StoredRegion {
                level,
                code: code.to_string(),
                name: name.to_string(),
                parent_code: parent_code.map(str::to_string),
                geometry: geometry.map(str::to_string),
            });
        }

        fn check_available(&self) -> Result<()> {
            if self.fail {
                return Err(AppError::Database(sqlx::Error::PoolTimedOut));
            }
            Ok(())
        }

        fn find(&self, level: RegionLevel, code: &str) -> Option<&StoredRegion> {
            self.regions
                .iter()
                .find(|r| r.level == level && r.code == code)
        }

        /// Province-first ancestor chain ending at `region`; `None` if a parent is missing
        fn chain<'a>(&'a self, region: &'a StoredRegion) -> Option<Chain<'a>> {
            let mut chain = vec![region];
            let mut current = region;
            while let Some(parent_level) = current.level.parent() {
                let parent = self.find(parent_level, current.parent_code.as_deref()?)?;
                chain.push(parent);
                current = parent;
            }
            chain.reverse();
            Some(chain)
        }

        fn select<T>(&self, filter: &RegionFilter, build: impl Fn(&Chain<'_>) -> T) -> Result<Vec<T>> {
            self.check_available()?;

            let needle = filter.name().map(str::to_lowercase);
            let mut chains: Vec<Chain<'_>> = self
                .regions
                .iter()
                .filter(|r| r.level == filter.level())
                .filter_map(|r| self.chain(r))
                .filter(|chain| {
                    let region = chain[chain.len() - 1];
                    needle
                        .as_deref()
                        .map_or(true, |n| region.name.to_lowercase().contains(n))
                })
                .filter(|chain| {
                    filter
                        .ancestors()
                        .iter()
                        .all(|a| chain.iter().any(|r| r.level == a.level && r.code == a.code))
                })
                .collect();

            chains.sort_by(|a, b| {
                let (a, b) = (a[a.len() - 1], b[b.len() - 1]);
                (&a.name, &a.code).cmp(&(&b.name, &b.code))
            });

            Ok(chains.iter().map(build).collect())
        }
    }

    fn field(chain: &Chain<'_>, depth: usize) -> (String, String) {
        (chain[depth].code.clone(), chain[depth].name.clone())
    }

    #[async_trait]
    impl RegionStore for InMemoryRegionStore {
        async fn provinces(&self, filter: &RegionFilter) -> Result<Vec<Province>> {
            self.select(filter, |c| {
                let (province_code, province_name) = field(c, 0);
                Province {
                    province_code,
                    province_name,
                }
            })
        }

        async fn regencies(&self, filter: &RegionFilter) -> Result<Vec<Regency>> {
            self.select(filter, |c| {
                let (province_code, province_name) = field(c, 0);
                let (regency_code, regency_name) = field(c, 1);
                Regency {
                    province_code,
                    province_name,
                    regency_code,
                    regency_name,
                }
            })
        }

        async fn districts(&self, filter: &RegionFilter) -> Result<Vec<District>> {
            self.select(filter, |c| {
                let (province_code, province_name) = field(c, 0);
                let (regency_code, regency_name) = field(c, 1);
                let (district_code, district_name) = field(c, 2);
                District {
                    province_code,
                    province_name,
                    regency_code,
                    regency_name,
                    district_code,
                    district_name,
                }
            })
        }

        async fn villages(&self, filter: &RegionFilter) -> Result<Vec<Village>> {
            self.select(filter, |c| {
                let (province_code, province_name) = field(c, 0);
                let (regency_code, regency_name) = field(c, 1);
                let (district_code, district_name) = field(c, 2);
                let (village_code, village_name) = field(c, 3);
                Village {
                    province_code,
                    province_name,
                    regency_code,
                    regency_name,
                    district_code,
                    district_name,
                    village_code,
                    village_name,
                }
            })
        }

        async fn boundaries(&self, level: RegionLevel, code: &str) -> Result<Vec<BoundaryRow>> {
            self.check_available()?;

            let stored = self
                .regions
                .iter()
                .filter(|r| r.level == level && r.code == code)
                .map(|r| BoundaryRow {
                    code: r.code.clone(),
                    name: r.name.clone(),
                    geometry: r.geometry.clone(),
                });
            let extra = self
                .extra_boundaries
                .iter()
                .filter(|(l, row)| *l == level && row.code == code)
                .map(|(_, row)| row.clone());

            Ok(stored.chain(extra).take(2).collect())
        }
    }
}
