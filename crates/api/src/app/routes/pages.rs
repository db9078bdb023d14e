use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{StatusCode, Uri, header},
    response::{Html, IntoResponse},
};

use biosite_web::{AppContext, Page, PageDocument};

use crate::app::services::AppServices;

/// Fallback handler: every path not claimed by the API goes through the page router.
pub async fn page(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AppContext>,
    uri: Uri,
) -> axum::response::Response {
    let path = uri.path();
    let page = services.pages.resolve(path);
    let status = if page == Page::NotFound {
        tracing::debug!(path, "no page for path");
        StatusCode::NOT_FOUND
    } else {
        StatusCode::OK
    };

    let doc = PageDocument::build(page, &ctx, &services.site_url, path, &services.downloads);

    (
        status,
        [(header::CONTENT_LANGUAGE, ctx.locale().tag())],
        Html(doc.render_html()),
    )
        .into_response()
}
