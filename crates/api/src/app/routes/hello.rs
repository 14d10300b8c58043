//! Hello-world demo routes: one handler per response type / extractor.

use axum::{
    extract::{Path, Query},
    http::{header, HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::Utc;
use serde_json::json;

use crate::app::dto::SearchQuery;

const ROUTES: &[&str] = &[
    "GET  /                    - Plain text greeting",
    "GET  /html                - HTML response",
    "GET  /json                - JSON response",
    "GET  /hello/:name         - Greeting with name parameter",
    "GET  /greet/:name/:age    - Greeting with multiple parameters",
    "GET  /search?q=&filter=   - Query parameters example",
    "POST /echo                - Echo back request body",
    "PUT  /update/:id          - Update example",
    "DELETE /delete/:id        - Delete example",
    "GET  /status/:code        - Custom status code",
    "GET  /info                - This info page",
];

pub fn router() -> Router {
    Router::new()
        .route("/", get(root))
        .route("/html", get(html))
        .route("/json", get(json_greeting))
        .route("/hello/:name", get(hello))
        .route("/greet/:name/:age", get(greet))
        .route("/search", get(search))
        .route("/echo", post(echo))
        .route("/update/:id", put(update))
        .route("/delete/:id", delete(remove))
        .route("/status/:code", get(custom_status))
        .route("/info", get(info))
}

pub async fn root() -> &'static str {
    "Hello, World!"
}

pub async fn html() -> Html<&'static str> {
    Html(
        "<h1>Hello from axum!</h1>\
         <p>This is an HTML response</p>\
         <a href='/'>Back to home</a>",
    )
}

pub async fn json_greeting() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Hello, JSON!",
        "status": "success",
        "timestamp": Utc::now().timestamp_millis(),
    }))
}

pub async fn hello(Path(name): Path<String>) -> String {
    format!("Hello, {name}! 👋")
}

pub async fn greet(Path((name, age)): Path<(String, String)>) -> Json<serde_json::Value> {
    Json(json!({
        "greeting": format!("Hello, {name}"),
        "age": age,
        "message": "Welcome!",
    }))
}

pub async fn search(Query(query): Query<SearchQuery>) -> Json<serde_json::Value> {
    Json(json!({
        "query": query.q.as_deref().unwrap_or("none"),
        "filter": query.filter.as_deref().unwrap_or("none"),
        "info": "Query params example: /search?q=axum&filter=rust",
    }))
}

pub async fn echo(headers: HeaderMap, body: String) -> Json<serde_json::Value> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok());
    Json(json!({
        "received": body,
        "contentType": content_type,
        "method": "POST",
    }))
}

pub async fn update(Path(id): Path<String>, body: String) -> Json<serde_json::Value> {
    Json(json!({
        "id": id,
        "action": "updated",
        "data": body,
    }))
}

pub async fn remove(Path(id): Path<String>) -> Json<serde_json::Value> {
    Json(json!({
        "id": id,
        "action": "deleted",
        "success": true,
    }))
}

/// Respond with whatever status the path names.
pub async fn custom_status(Path(code): Path<String>) -> Response {
    let status = code
        .parse::<u16>()
        .ok()
        .and_then(|c| StatusCode::from_u16(c).ok());

    match status {
        Some(status) => (
            status,
            Json(json!({
                "statusCode": status.as_u16(),
                "message": "Custom status code example",
            })),
        )
            .into_response(),
        None => {
            tracing::warn!(code = %code, "invalid status code requested");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "status": 500,
                    "message": format!("invalid status code: {code}"),
                    "error": "InvalidStatusCode",
                })),
            )
                .into_response()
        }
    }
}

pub async fn info() -> Json<serde_json::Value> {
    Json(json!({
        "name": "Hello World API",
        "version": "1.0",
        "routes": ROUTES,
    }))
}

pub async fn route_not_found(uri: Uri) -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "status": 404,
            "message": format!("Route not found: {}", uri.path()),
            "hint": "Try GET /info to see all available routes",
        })),
    )
        .into_response()
}
