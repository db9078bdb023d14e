use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};

use biosite_web::{AppContext, Locale};

use crate::app::services::AppServices;

/// Resolve the visitor's locale and attach an [`AppContext`] to the request.
///
/// Precedence: `?lang=` query, `lang` cookie, `Accept-Language`, configured default.
pub async fn locale_middleware(
    State(services): State<Arc<AppServices>>,
    mut req: Request,
    next: Next,
) -> Response {
    let locale = req
        .uri()
        .query()
        .and_then(query_locale)
        .or_else(|| cookie_locale(req.headers()))
        .or_else(|| {
            req.headers()
                .get(header::ACCEPT_LANGUAGE)
                .and_then(|v| v.to_str().ok())
                .and_then(Locale::from_accept_language)
        })
        .unwrap_or(services.default_locale);

    req.extensions_mut()
        .insert(AppContext::new(locale, services.translations.clone()));

    next.run(req).await
}

fn query_locale(query: &str) -> Option<Locale> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == "lang")
        .and_then(|(_, v)| Locale::from_tag(v))
}

fn cookie_locale(headers: &HeaderMap) -> Option<Locale> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .flat_map(|v| v.split(';'))
        .filter_map(|c| c.trim().split_once('='))
        .find(|(k, _)| *k == "lang")
        .and_then(|(_, v)| Locale::from_tag(v))
}
