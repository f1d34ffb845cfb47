//! Liveness endpoint.

pub mod handlers;
pub mod routes;

pub use routes::routes;
