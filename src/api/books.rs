//! Book record endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::{Book, BookDraft, BookPatch, DeleteAck, InsertAck, UpdateAck},
};

/// List all books
#[utoipa::path(
    get,
    path = "/books/",
    tag = "books",
    responses(
        (status = 200, description = "All books as stored", body = Vec<Book>)
    )
)]
pub async fn list_books(State(state): State<crate::AppState>) -> AppResult<Json<Vec<Book>>> {
    let books = state.services.records.list().await?;
    Ok(Json(books))
}

/// Get a single book by id
#[utoipa::path(
    get,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book identifier")
    ),
    responses(
        (status = 200, description = "Book record", body = Book),
        (status = 404, description = "Book not found")
    )
)]
pub async fn get_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Book>> {
    let book = state.services.records.get(&id).await?;
    Ok(Json(book))
}

/// Create a new book. The response carries the acknowledgement with the
/// assigned id, not the created record.
#[utoipa::path(
    post,
    path = "/books/",
    tag = "books",
    request_body = BookDraft,
    responses(
        (status = 201, description = "Book created", body = InsertAck)
    )
)]
pub async fn create_book(
    State(state): State<crate::AppState>,
    Json(draft): Json<BookDraft>,
) -> AppResult<(StatusCode, Json<InsertAck>)> {
    let ack = state.services.records.create(&draft).await?;
    Ok((StatusCode::CREATED, Json(ack)))
}

/// Partially update a book. Unspecified fields stay untouched; an unknown
/// id still answers 200 with matched_count = 0.
#[utoipa::path(
    patch,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book identifier")
    ),
    request_body = BookPatch,
    responses(
        (status = 200, description = "Update acknowledgement", body = UpdateAck)
    )
)]
pub async fn update_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
    Json(patch): Json<BookPatch>,
) -> AppResult<Json<UpdateAck>> {
    let ack = state.services.records.update(&id, &patch).await?;
    Ok(Json(ack))
}

/// Delete a book. Deleting twice reports success both times, the second
/// acknowledgement with deleted_count = 0.
#[utoipa::path(
    delete,
    path = "/books/{id}",
    tag = "books",
    params(
        ("id" = String, Path, description = "Book identifier")
    ),
    responses(
        (status = 200, description = "Delete acknowledgement", body = DeleteAck)
    )
)]
pub async fn delete_book(
    State(state): State<crate::AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DeleteAck>> {
    let ack = state.services.records.delete(&id).await?;
    Ok(Json(ack))
}
