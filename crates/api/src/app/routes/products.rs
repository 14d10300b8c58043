use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Extension, Path, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};

use storefront_core::Entity;
use storefront_products::{ProductId, ProductInput, ProductService};

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_products).post(create_product))
        .route(
            "/:id",
            get(get_product).put(update_product).delete(delete_product),
        )
}

/// `GET /api/products[?category=...]`
pub async fn list_products(
    Extension(products): Extension<Arc<ProductService>>,
    Query(query): Query<dto::ListProductsQuery>,
) -> Response {
    let items = match query.category() {
        Some(category) => products.list_by_category(category),
        None => products.list_all(),
    };
    (StatusCode::OK, Json(items)).into_response()
}

pub async fn get_product(
    Extension(products): Extension<Arc<ProductService>>,
    Path(id): Path<String>,
) -> Response {
    let id = ProductId::new(id);
    match products.get_by_id(&id) {
        Some(product) => (StatusCode::OK, Json(product)).into_response(),
        None => errors::product_not_found(&id),
    }
}

pub async fn create_product(
    Extension(products): Extension<Arc<ProductService>>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> Response {
    let Json(input) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_rejection(e),
    };

    match products.create(input) {
        Ok(created) => {
            let location = format!("/api/products/{}", created.id());
            (
                StatusCode::CREATED,
                [(header::LOCATION, location)],
                Json(created),
            )
                .into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_product(
    Extension(products): Extension<Arc<ProductService>>,
    Path(id): Path<String>,
    body: Result<Json<ProductInput>, JsonRejection>,
) -> Response {
    let id = ProductId::new(id);
    let Json(input) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_rejection(e),
    };

    match products.update(&id, input) {
        Ok(Some(updated)) => (StatusCode::OK, Json(updated)).into_response(),
        Ok(None) => errors::product_not_found(&id),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_product(
    Extension(products): Extension<Arc<ProductService>>,
    Path(id): Path<String>,
) -> Response {
    let id = ProductId::new(id);
    if products.delete(&id) {
        StatusCode::NO_CONTENT.into_response()
    } else {
        errors::product_not_found(&id)
    }
}
