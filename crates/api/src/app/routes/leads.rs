use std::sync::Arc;

use axum::{
    Json,
    extract::{Extension, rejection::JsonRejection},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;
use serde_json::json;

use biosite_core::LeadId;
use biosite_web::{LeadForm, LeadOutcome};

use crate::app::errors;
use crate::app::services::AppServices;

pub async fn submit_lead(
    Extension(services): Extension<Arc<AppServices>>,
    body: Result<Json<LeadForm>, JsonRejection>,
) -> axum::response::Response {
    let Json(form) = match body {
        Ok(b) => b,
        Err(e) => return errors::lead_failure(StatusCode::BAD_REQUEST, "invalid_request", e.body_text()),
    };

    let lead = match form.validate(LeadId::new(), Utc::now()) {
        Ok(LeadOutcome::Accepted(lead)) => lead,
        Ok(LeadOutcome::Discarded) => {
            tracing::info!("lead discarded by honeypot");
            return Json(json!({ "ok": true })).into_response();
        }
        Err(e) => return errors::lead_error_to_response(e),
    };

    match services.forwarder.forward(&lead).await {
        Ok(_) => Json(json!({ "ok": true, "id": lead.id.to_string() })).into_response(),
        Err(e) => errors::forward_error_to_response(e),
    }
}
