//! Book (catalog) endpoints

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    Json,
};
use serde::Serialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::{
    error::{AppError, AppResult, ErrorResponse},
    models::book::{Book, BookInput, JSON_REQUIRED},
    AppState,
};

/// Full catalog listing
#[derive(Serialize, ToSchema)]
pub struct BookListResponse {
    /// Books in insertion order
    pub books: Vec<Book>,
    /// Number of books in the catalog
    pub total: usize,
    pub message: String,
}

/// Single book wrapper
#[derive(Serialize, ToSchema)]
pub struct BookResponse {
    pub book: Book,
    pub message: String,
}

/// Echo of a removed book
#[derive(Serialize, ToSchema)]
pub struct DeleteBookResponse {
    pub message: String,
    pub deleted_book: Book,
}

/// Identifier segments must be plain digits; anything else does not match any route
fn book_id(path: Result<Path<String>, PathRejection>) -> AppResult<u64> {
    let Path(segment) = path.map_err(|_| AppError::EndpointNotFound)?;
    if segment.is_empty() || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(AppError::EndpointNotFound);
    }
    segment.parse().map_err(|_| AppError::EndpointNotFound)
}

fn json_body(body: Result<Json<Value>, JsonRejection>) -> AppResult<Value> {
    body.map(|Json(value)| value).map_err(|rejection| {
        tracing::debug!("Rejected request body: {}", rejection.body_text());
        AppError::MalformedRequest(JSON_REQUIRED.to_string())
    })
}

/// List all books
#[utoipa::path(
    get,
    path = "/books",
    tag = "books",
    responses(
        (status = 200, description = "All books", body = BookListResponse)
    )
)]
pub async fn list_books(State(state): State<AppState>) -> AppResult<Json<BookListResponse>> {
    let books = state.services.catalog.list_books()?;

    Ok(Json(BookListResponse {
        total: books.len(),
        books,
        message: "Books retrieved successfully".to_string(),
    }))
}

/// Get book by ID
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = u64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book details", body = BookResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn get_book(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<BookResponse>> {
    let id = book_id(path)?;
    let book = state.services.catalog.get_book(id)?;

    Ok(Json(BookResponse {
        book,
        message: "Book retrieved successfully".to_string(),
    }))
}

/// Create a new book
#[utoipa::path(
    post,
    path = "/books",
    tag = "books",
    request_body = BookInput,
    responses(
        (status = 201, description = "Book created", body = BookResponse),
        (status = 400, description = "Body is not JSON, a field is missing or year is not an integer", body = ErrorResponse)
    )
)]
pub async fn create_book(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<BookResponse>)> {
    let input = BookInput::from_json(&json_body(body)?)?;
    let book = state.services.catalog.create_book(input)?;

    Ok((
        StatusCode::CREATED,
        Json(BookResponse {
            book,
            message: "Book created successfully".to_string(),
        }),
    ))
}

/// Update an existing book
#[utoipa::path(
    put,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = u64, Path, description = "Book ID")
    ),
    request_body = BookInput,
    responses(
        (status = 200, description = "Book updated", body = BookResponse),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn update_book(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<BookResponse>> {
    let id = book_id(path)?;
    // unknown id wins over a bad body
    state.services.catalog.get_book(id)?;

    let input = BookInput::from_json(&json_body(body)?)?;
    let book = state.services.catalog.update_book(id, input)?;

    Ok(Json(BookResponse {
        book,
        message: "Book updated successfully".to_string(),
    }))
}

/// Delete a book
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = u64, Path, description = "Book ID")
    ),
    responses(
        (status = 200, description = "Book deleted", body = DeleteBookResponse),
        (status = 404, description = "Book not found", body = ErrorResponse)
    )
)]
pub async fn delete_book(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<DeleteBookResponse>> {
    let id = book_id(path)?;
    let deleted_book = state.services.catalog.delete_book(id)?;

    Ok(Json(DeleteBookResponse {
        message: format!("Book with ID {} deleted successfully", id),
        deleted_book,
    }))
}
