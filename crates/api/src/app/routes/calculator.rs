use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};

use biosite_web::{AppContext, LocalizedRecommendation};

use crate::app::{dto, errors};
use crate::app::services::AppServices;

pub async fn recommend(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<AppContext>,
    body: Result<Json<dto::CalculatorRequest>, JsonRejection>,
) -> axum::response::Response {
    let Json(body) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_error(StatusCode::BAD_REQUEST, "invalid_request", e.body_text()),
    };

    let input = body.into_input();
    if let Err(e) = input.validate() {
        return errors::domain_error_to_response(e);
    }

    match services.engine.recommend(&input) {
        Ok(rec) => {
            tracing::info!(
                pe = rec.population_equivalent,
                rule = rec.rule,
                model = %rec.recommended.model,
                "recommendation computed"
            );
            Json(LocalizedRecommendation::new(&rec, &ctx)).into_response()
        }
        Err(e) => {
            tracing::warn!("recommendation failed: {e}");
            errors::recommend_error_to_response(e)
        }
    }
}
