//! Record service: the five operations over the book collection.
//!
//! Thin by design. Every operation reaches the store directly; there is
//! no caching layer, no transaction wrapping, no batching.

use crate::{
    error::AppResult,
    models::{Book, BookDraft, BookPatch, DeleteAck, InsertAck, UpdateAck},
    repository::Repository,
};

#[derive(Clone)]
pub struct RecordsService {
    repository: Repository,
}

impl RecordsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// All books as stored
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list().await
    }

    /// One book by id, or not-found
    pub async fn get(&self, id: &str) -> AppResult<Book> {
        self.repository.books.get(id).await
    }

    /// Persist a new book and return the assigned identifier
    pub async fn create(&self, draft: &BookDraft) -> AppResult<InsertAck> {
        let ack = self.repository.books.insert(draft).await?;
        tracing::info!(id = %ack.inserted_id, title = %draft.title, "book created");
        Ok(ack)
    }

    /// Field-level merge into an existing book
    pub async fn update(&self, id: &str, patch: &BookPatch) -> AppResult<UpdateAck> {
        let ack = self.repository.books.update(id, patch).await?;
        if ack.matched_count == 0 {
            tracing::debug!(id, "update matched no record");
        }
        Ok(ack)
    }

    /// Remove a book; repeat deletes succeed with a zero count
    pub async fn delete(&self, id: &str) -> AppResult<DeleteAck> {
        let ack = self.repository.books.delete(id).await?;
        tracing::info!(id, deleted = ack.deleted_count, "book delete processed");
        Ok(ack)
    }
}
