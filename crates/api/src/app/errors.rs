use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use storefront_core::DomainError;
use storefront_products::ProductId;

/// Map a service failure to its response: validation → 400, not found → 404.
pub fn domain_error_to_response(err: DomainError) -> Response {
    match err {
        DomainError::Validation(msg) => json_error(StatusCode::BAD_REQUEST, msg),
        DomainError::NotFound => json_error(StatusCode::NOT_FOUND, "not found"),
    }
}

pub fn product_not_found(id: &ProductId) -> Response {
    json_error(
        StatusCode::NOT_FOUND,
        format!("Product not found with id: {id}"),
    )
}

/// Undecodable request body (bad JSON, wrong field types, missing content type).
pub fn json_rejection(err: JsonRejection) -> Response {
    tracing::debug!(error = %err, "rejected request body");
    json_error(
        StatusCode::BAD_REQUEST,
        format!("Invalid JSON body: {}", err.body_text()),
    )
}

/// `{"error": message}`, the body shape of product endpoint failures.
pub fn json_error(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(json!({ "error": message.into() }))).into_response()
}

/// `{"status": code, "message": message}`, the body shape of router-level failures.
pub fn status_error(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(json!({
            "status": status.as_u16(),
            "message": message.into(),
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_maps_to_bad_request() {
        let res = domain_error_to_response(DomainError::validation("name is required"));
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(
            domain_error_to_response(DomainError::not_found()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            product_not_found(&ProductId::new("9")).status(),
            StatusCode::NOT_FOUND
        );
    }
}
