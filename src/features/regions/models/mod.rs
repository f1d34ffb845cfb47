mod boundary;
mod district;
mod geometry;
mod level;
mod province;
mod regency;
mod village;

pub use boundary::Boundary;
pub use district::District;
pub use geometry::Geometry;
pub use level::RegionLevel;
pub use province::Province;
pub use regency::Regency;
pub use village::Village;
