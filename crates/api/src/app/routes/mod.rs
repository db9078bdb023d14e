use axum::{
    Router,
    routing::{get, post},
};

pub mod calculator;
pub mod catalog;
pub mod content;
pub mod leads;
pub mod pages;
pub mod system;

/// JSON endpoints, nested under `/api`.
pub fn api_router() -> Router {
    Router::new()
        .route("/calculator", post(calculator::recommend))
        .route("/catalog", get(catalog::list_catalog))
        .route("/downloads", get(content::list_downloads))
        .route("/images/:folder", get(content::image_manifest))
        .route("/leads", post(leads::submit_lead))
}
