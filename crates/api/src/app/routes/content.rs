use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, Path},
    response::IntoResponse,
};

use biosite_web::ImageManifest;

use crate::app::errors;
use crate::app::services::AppServices;

pub async fn list_downloads(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    Json(&services.downloads).into_response()
}

pub async fn image_manifest(
    Extension(services): Extension<Arc<AppServices>>,
    Path(folder): Path<String>,
) -> axum::response::Response {
    match ImageManifest::load(&services.images_dir, &folder) {
        Ok(manifest) => Json(serde_json::json!({
            "folder": manifest.folder,
            "images": manifest.urls(),
        }))
        .into_response(),
        Err(e) => errors::content_error_to_response(e),
    }
}
