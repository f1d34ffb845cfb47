use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::regions::handlers;
use crate::features::regions::services::RegionService;

/// Create routes for the regions feature
///
/// Note: This feature is public (no authentication required)
pub fn routes(service: Arc<RegionService>) -> Router {
    Router::new()
        // Search routes
        .route("/search/propinsi", get(handlers::search_propinsi))
        .route("/search/kabupaten", get(handlers::search_kabupaten))
        .route("/search/kecamatan", get(handlers::search_kecamatan))
        .route("/search/kelurahan", get(handlers::search_kelurahan))
        // GeoJSON routes
        .route(
            "/geojson/propinsi/{id}",
            get(handlers::get_propinsi_geojson),
        )
        .route(
            "/geojson/kabupaten/{id}",
            get(handlers::get_kabupaten_geojson),
        )
        .route(
            "/geojson/kecamatan/{id}",
            get(handlers::get_kecamatan_geojson),
        )
        .route(
            "/geojson/kelurahan/{id}",
            get(handlers::get_kelurahan_geojson),
        )
        .with_state(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::shared::test_helpers::InMemoryRegionStore;

    fn server_with(store: InMemoryRegionStore) -> TestServer {
        let service = Arc::new(RegionService::new(Arc::new(store)));
        TestServer::new(routes(service)).unwrap()
    }

    fn server() -> TestServer {
        server_with(InMemoryRegionStore::seeded())
    }

    fn names(body: &Value, field: &str) -> Vec<String> {
        body.as_array()
            .unwrap()
            .iter()
            .map(|row| row[field].as_str().unwrap().to_string())
            .collect()
    }

    // ==================== Search ====================

    #[tokio::test]
    async fn test_search_propinsi_by_name() {
        let response = server()
            .get("/search/propinsi")
            .add_query_param("name", "jawa")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(
            names(&body, "nm_propinsi"),
            vec!["JAWA BARAT", "JAWA TENGAH", "JAWA TIMUR"]
        );
    }

    #[tokio::test]
    async fn test_repeated_name_uses_first_value() {
        let response = server()
            .get("/search/propinsi?name=jawa&name=barat")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(
            names(&body, "nm_propinsi"),
            vec!["JAWA BARAT", "JAWA TENGAH", "JAWA TIMUR"]
        );
    }

    #[tokio::test]
    async fn test_search_propinsi_lists_all_without_name() {
        let response = server().get("/search/propinsi").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body.as_array().unwrap().len(), 5);
        assert_eq!(body[0], json!({"kd_propinsi": "36", "nm_propinsi": "BANTEN"}));
    }

    #[tokio::test]
    async fn test_search_returns_empty_array() {
        let response = server()
            .get("/search/propinsi")
            .add_query_param("name", "papua")
            .await;

        response.assert_status_ok();
        response.assert_json(&json!([]));
    }

    #[tokio::test]
    async fn test_search_kabupaten_requires_propinsi_without_name() {
        let response = server().get("/search/kabupaten").await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({
            "error": "propinsi_id is required when not searching by name"
        }));
    }

    #[tokio::test]
    async fn test_empty_params_count_as_absent() {
        let response = server()
            .get("/search/kabupaten")
            .add_query_param("name", "")
            .add_query_param("propinsi_id", "")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_search_kabupaten_lists_province_children() {
        let response = server()
            .get("/search/kabupaten")
            .add_query_param("propinsi_id", "32")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(
            names(&body, "nm_kabupaten"),
            vec!["BANDUNG", "BANDUNG BARAT", "KOTA BANDUNG"]
        );
        assert!(body
            .as_array()
            .unwrap()
            .iter()
            .all(|row| row["kd_propinsi"] == "32" && row["nm_propinsi"] == "JAWA BARAT"));
    }

    #[tokio::test]
    async fn test_search_kabupaten_by_name_across_provinces() {
        let response = server()
            .get("/search/kabupaten")
            .add_query_param("name", "kota")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(
            names(&body, "kd_kabupaten"),
            vec!["3171", "3273", "3374"]
        );
    }

    #[tokio::test]
    async fn test_search_kecamatan_requires_both_ancestors() {
        let response = server()
            .get("/search/kecamatan")
            .add_query_param("propinsi_id", "32")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({
            "error": "propinsi_id and kabupaten_id are required when not searching by name"
        }));
    }

    #[tokio::test]
    async fn test_search_kecamatan_listing() {
        let response = server()
            .get("/search/kecamatan")
            .add_query_param("propinsi_id", "32")
            .add_query_param("kabupaten_id", "3273")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(names(&body, "nm_kecamatan"), vec!["COBLONG", "SUKASARI"]);
        assert_eq!(body[0]["nm_kabupaten"], "KOTA BANDUNG");
    }

    #[tokio::test]
    async fn test_search_kecamatan_by_name_with_partial_chain() {
        let response = server()
            .get("/search/kecamatan")
            .add_query_param("name", "SUKA")
            .add_query_param("kabupaten_id", "3273")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(names(&body, "kd_kecamatan"), vec!["327301"]);
    }

    #[tokio::test]
    async fn test_search_kelurahan_requires_full_chain() {
        let response = server()
            .get("/search/kelurahan")
            .add_query_param("propinsi_id", "32")
            .add_query_param("kabupaten_id", "3273")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({
            "error": "propinsi_id, kabupaten_id, and kecamatan_id are required when not searching by name"
        }));
    }

    #[tokio::test]
    async fn test_search_kelurahan_listing() {
        let response = server()
            .get("/search/kelurahan")
            .add_query_param("propinsi_id", "32")
            .add_query_param("kabupaten_id", "3273")
            .add_query_param("kecamatan_id", "327302")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(names(&body, "nm_kelurahan"), vec!["DAGO", "LEBAKGEDE"]);
        assert_eq!(
            body[0],
            json!({
                "kd_propinsi": "32",
                "nm_propinsi": "JAWA BARAT",
                "kd_kabupaten": "3273",
                "nm_kabupaten": "KOTA BANDUNG",
                "kd_kecamatan": "327302",
                "nm_kecamatan": "COBLONG",
                "kd_kelurahan": "3273021001",
                "nm_kelurahan": "DAGO"
            })
        );
    }

    #[tokio::test]
    async fn test_search_kelurahan_by_name_without_ancestors() {
        let response = server()
            .get("/search/kelurahan")
            .add_query_param("name", "sukasari")
            .await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(
            names(&body, "kd_kelurahan"),
            vec!["3204011001", "3273011003"]
        );
    }

    #[tokio::test]
    async fn test_search_failure_is_500_with_level_message() {
        let response = server_with(InMemoryRegionStore::failing())
            .get("/search/kecamatan")
            .add_query_param("name", "coblong")
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({"error": "Failed to get districts"}));
    }

    #[tokio::test]
    async fn test_validation_runs_before_any_query() {
        // The failing store would turn any query into a 500
        let response = server_with(InMemoryRegionStore::failing())
            .get("/search/kelurahan")
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    // ==================== GeoJSON ====================

    #[tokio::test]
    async fn test_geojson_propinsi() {
        let response = server().get("/geojson/propinsi/32").await;

        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["type"], "Feature");
        assert_eq!(
            body["properties"],
            json!({"id": 32, "name": "JAWA BARAT", "type": "propinsi"})
        );
        assert_eq!(body["geometry"]["type"], "MultiPolygon");
        assert!(!body["geometry"]["coordinates"]
            .as_array()
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn test_geojson_levels_report_their_type() {
        let server = server();
        for (path, level) in [
            ("/geojson/kabupaten/3273", "kabupaten"),
            ("/geojson/kecamatan/327302", "kecamatan"),
            ("/geojson/kelurahan/3273021001", "kelurahan"),
        ] {
            let response = server.get(path).await;
            response.assert_status_ok();

            let body: Value = response.json();
            assert_eq!(body["properties"]["type"], level);
            assert_eq!(body["geometry"]["type"], "Polygon");
        }
    }

    #[tokio::test]
    async fn test_geojson_unknown_code_is_500() {
        let response = server().get("/geojson/kelurahan/9999999999").await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({"error": "Failed to get village GeoJSON"}));
    }

    #[tokio::test]
    async fn test_geojson_bad_geometry_is_500() {
        let server = server();

        let missing = server.get("/geojson/kabupaten/3171").await;
        missing.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        missing.assert_json(&json!({"error": "Failed to get regency GeoJSON"}));

        let malformed = server.get("/geojson/kecamatan/337401").await;
        malformed.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        malformed.assert_json(&json!({"error": "Failed to get district GeoJSON"}));
    }

    #[tokio::test]
    async fn test_geojson_store_failure_is_500() {
        let response = server_with(InMemoryRegionStore::failing())
            .get("/geojson/propinsi/32")
            .await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({"error": "Failed to get province GeoJSON"}));
    }
}
