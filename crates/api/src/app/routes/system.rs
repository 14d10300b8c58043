use axum::{http::StatusCode, response::Response, Json};

use crate::app::{dto::HealthResponse, errors};

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::up())
}

pub async fn route_not_found() -> Response {
    errors::status_error(StatusCode::NOT_FOUND, "Route not found")
}
