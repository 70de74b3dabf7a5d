//! API handlers and routing for the library REST endpoints

pub mod books;
pub mod health;
pub mod openapi;

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any as CorsAny, CorsLayer},
    trace::TraceLayer,
};

use crate::{error::AppError, AppState};

/// Endpoints announced at startup
pub const ENDPOINTS: [(&str, &str, &str); 6] = [
    ("GET", "/books", "Get all books"),
    ("POST", "/books", "Create a new book"),
    ("GET", "/books/<id>", "Get a specific book"),
    ("PUT", "/books/<id>", "Update a book"),
    ("DELETE", "/books/<id>", "Delete a book"),
    ("GET", "/health", "Health check"),
];

/// Create the application router with all routes
pub fn router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(CorsAny)
        .allow_methods(CorsAny)
        .allow_headers(CorsAny);

    Router::new()
        .route(
            "/books",
            get(books::list_books)
                .post(books::create_book)
                .fallback(method_not_allowed),
        )
        .route(
            "/books/:id",
            get(books::get_book)
                .put(books::update_book)
                .delete(books::delete_book)
                .fallback(method_not_allowed),
        )
        .route(
            "/health",
            get(health::health_check).fallback(method_not_allowed),
        )
        .route(
            "/api-docs/openapi.json",
            get(openapi::openapi_json).fallback(method_not_allowed),
        )
        .fallback(endpoint_not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn endpoint_not_found() -> AppError {
    AppError::EndpointNotFound
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}

/// Render a caught handler panic as the generic 500 body
pub fn panic_response(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "handler panicked".to_string()
    };

    AppError::Internal(format!("panic: {}", detail)).into_response()
}
