//! Layers applied to every response of both applications.

use std::any::Any;

use axum::{http::StatusCode, response::Response, Router};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowHeaders, AllowMethods, Any as AnyOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::app::errors;

/// Wrap `router` with CORS, request tracing and panic-to-500 conversion.
///
/// CORS is outermost so that even error responses carry the CORS headers. Each
/// layer is applied with its own `Router::layer` call so the body is re-boxed
/// between them; `Cors` needs a response body that implements `Default`.
pub fn with_http_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

/// Any origin; preflights get the requested method and headers mirrored back.
pub fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
}

/// Log the panic and answer with a generic 500; the payload never reaches the client.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    tracing::error!(panic = %detail, "request handler panicked");

    errors::status_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
}
