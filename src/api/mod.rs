//! HTTP API application wiring (Axum router + shared state).
//!
//! This folder is structured like:
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, http::HeaderValue};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::settings::AppConfig;
use crate::errors::{Error, Result};

/// Request/response DTOs
pub mod dto;
/// Mapping of crate errors to JSON responses
pub mod errors;
/// Route table and handlers
pub mod routes;

/// Shared data available to all handlers.
/// Holds the pooled database connection; nothing else is shared between requests.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection for all database operations
    pub database: Arc<DatabaseConnection>,
}

impl AppState {
    /// Creates a new `AppState` around an initialized database connection.
    #[must_use]
    pub fn new(database: DatabaseConnection) -> Self {
        Self {
            database: Arc::new(database),
        }
    }
}

/// Builds the full HTTP router (public entrypoint used by `main.rs`).
///
/// # Errors
/// Returns [`Error::Config`] if an allowed origin is not a valid header value.
pub fn build_app(state: AppState, config: &AppConfig) -> Result<Router> {
    let cors = cors_layer(&config.allowed_origins)?;

    Ok(routes::router().layer(Extension(state)).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(cors),
    ))
}

/// Cross-origin policy: any origin when the list is empty, otherwise only the listed ones.
fn cors_layer(allowed_origins: &[String]) -> Result<CorsLayer> {
    let origin = if allowed_origins.is_empty() {
        AllowOrigin::any()
    } else {
        let origins = allowed_origins
            .iter()
            .map(|origin| {
                HeaderValue::from_str(origin).map_err(|e| Error::Config {
                    message: format!("Invalid allowed origin {origin:?}: {e}"),
                })
            })
            .collect::<Result<Vec<_>>>()?;
        AllowOrigin::list(origins)
    };

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any))
}
