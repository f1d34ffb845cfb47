mod geojson_handler;
mod search_handler;

pub use geojson_handler::*;
pub use search_handler::*;
