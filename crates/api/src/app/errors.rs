use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

use biosite_calculator::RecommendError;
use biosite_core::DomainError;
use biosite_web::{ContentError, LeadError};

use crate::forwarder::ForwardError;

pub fn domain_error_to_response(err: DomainError) -> axum::response::Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        DomainError::InvalidId(msg) => json_error(StatusCode::BAD_REQUEST, "invalid_id", msg),
        DomainError::InvariantViolation(msg) => {
            json_error(StatusCode::UNPROCESSABLE_ENTITY, "invariant_violation", msg)
        }
    }
}

pub fn recommend_error_to_response(err: RecommendError) -> axum::response::Response {
    match err {
        RecommendError::MissingProductLine(_) => json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "missing_product_line",
            err.to_string(),
        ),
        RecommendError::NoRuleMatched => json_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            "no_rule_matched",
            err.to_string(),
        ),
    }
}

pub fn content_error_to_response(err: ContentError) -> axum::response::Response {
    match err {
        ContentError::InvalidName(_) => json_error(StatusCode::BAD_REQUEST, "invalid_name", err.to_string()),
        ContentError::Io { .. } | ContentError::Parse { .. } => {
            tracing::error!("content error: {err}");
            json_error(StatusCode::INTERNAL_SERVER_ERROR, "content_error", "content unavailable")
        }
    }
}

pub fn lead_error_to_response(err: LeadError) -> axum::response::Response {
    let code = match &err {
        LeadError::MissingField(_) => "missing_field",
        LeadError::InvalidEmail => "invalid_email",
        LeadError::ConsentRequired => "consent_required",
        LeadError::InvalidChoice { .. } => "invalid_choice",
        LeadError::TooLong(_) => "too_long",
    };
    lead_failure(StatusCode::BAD_REQUEST, code, err.to_string())
}

pub fn forward_error_to_response(err: ForwardError) -> axum::response::Response {
    tracing::error!("lead forwarding failed: {err}");
    lead_failure(StatusCode::BAD_GATEWAY, "forward_failed", "lead could not be delivered")
}

pub fn json_error(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}

/// Lead endpoint errors carry `ok: false` so the form script can branch on one field.
pub fn lead_failure(
    status: StatusCode,
    code: &'static str,
    message: impl Into<String>,
) -> axum::response::Response {
    (
        status,
        axum::Json(json!({
            "ok": false,
            "error": code,
            "message": message.into(),
        })),
    )
        .into_response()
}
