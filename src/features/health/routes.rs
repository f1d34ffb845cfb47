use axum::{routing::get, Router};

use crate::features::health::handlers;

/// Health route; does not touch the database
pub fn routes() -> Router {
    Router::new().route("/health", get(handlers::health_check))
}
