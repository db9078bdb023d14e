//! HTTP application wiring (Axum router + service wiring).
//!
//! - `services.rs`: loads the catalog, translations and site content once at startup
//! - `routes/`: HTTP handlers (one file per area)
//! - `dto.rs`: request/response DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use crate::config::SiteConfig;
use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

pub use services::StartupError;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the black-box tests).
pub fn build_app(config: &SiteConfig) -> Result<Router, StartupError> {
    let services = Arc::new(services::build_services(config)?);

    let app = Router::new()
        .route("/health", get(routes::system::health))
        .nest("/api", routes::api_router())
        .fallback(routes::pages::page)
        .layer(
            ServiceBuilder::new()
                .layer(axum::middleware::from_fn_with_state(
                    Arc::clone(&services),
                    middleware::locale_middleware,
                ))
                .layer(Extension(services)),
        );

    Ok(app)
}
