use std::sync::Arc;

use axum::{Json, extract::Extension, response::IntoResponse};

use crate::app::dto;
use crate::app::services::AppServices;

pub async fn list_catalog(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    Json(dto::catalog_to_json(services.engine.catalog())).into_response()
}
