//! HTTP application wiring (Axum routers).
//!
//! - `routes/`: HTTP routes + handlers (one file per area)
//! - `dto.rs`: request/response DTOs
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{Extension, Router};

use storefront_products::ProductService;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the product REST API router (used by `main.rs` and the black-box tests).
pub fn build_app(products: Arc<ProductService>) -> Router {
    let api = routes::router().layer(Extension(products));

    let router = Router::new()
        .nest("/api", api)
        .fallback(routes::system::route_not_found);

    middleware::with_http_layers(router)
}

/// Build the hello-world demo router.
pub fn build_hello_app() -> Router {
    let router = routes::hello::router().fallback(routes::hello::route_not_found);

    middleware::with_http_layers(router)
}
