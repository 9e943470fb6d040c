//! Client data layer: REST calls toward a running Folio server.
//!
//! Bridges view intents to the record service. No retries, no request
//! deduplication, no cancellation; a slow request simply delays the
//! corresponding view-state transition. Failures collapse into short
//! human-readable messages before they reach the view layer.

use reqwest::{Response, StatusCode};
use thiserror::Error;

use crate::models::{Book, BookDraft, BookPatch, DeleteAck, InsertAck, UpdateAck};

/// Failure taxonomy for client-side requests
#[derive(Error, Debug)]
pub enum ClientError {
    /// Network or transport failure before any status was received
    #[error("network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Non-success HTTP status other than an explicit 404
    #[error("HTTP error! status: {0}")]
    Status(u16),

    /// Explicit not-found answer from the server
    #[error("record not found")]
    NotFound,

    /// Response body that failed to parse
    #[error("could not decode server response")]
    Decode(#[source] reqwest::Error),
}

pub type ClientResult<T> = Result<T, ClientError>;

/// Thin reqwest-backed client bound to a server base URL
#[derive(Clone)]
pub struct BooksApi {
    http: reqwest::Client,
    base_url: String,
}

impl BooksApi {
    /// Create a client for the given base URL, e.g. `http://localhost:3000`
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch all books
    pub async fn list(&self) -> ClientResult<Vec<Book>> {
        let response = self
            .http
            .get(self.url("/books/"))
            .send()
            .await
            .map_err(ClientError::Transport)?;
        decode(check(response)?).await
    }

    /// Fetch one book by id
    pub async fn get(&self, id: &str) -> ClientResult<Book> {
        let response = self
            .http
            .get(self.url(&format!("/books/{}", id)))
            .send()
            .await
            .map_err(ClientError::Transport)?;
        decode(check(response)?).await
    }

    /// Create a new book from a draft
    pub async fn create(&self, draft: &BookDraft) -> ClientResult<InsertAck> {
        let response = self
            .http
            .post(self.url("/books/"))
            .json(draft)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        decode(check(response)?).await
    }

    /// Merge the given fields into an existing book
    pub async fn update(&self, id: &str, patch: &BookPatch) -> ClientResult<UpdateAck> {
        let response = self
            .http
            .patch(self.url(&format!("/books/{}", id)))
            .json(patch)
            .send()
            .await
            .map_err(ClientError::Transport)?;
        decode(check(response)?).await
    }

    /// Delete a book by id
    pub async fn delete(&self, id: &str) -> ClientResult<DeleteAck> {
        let response = self
            .http
            .delete(self.url(&format!("/books/{}", id)))
            .send()
            .await
            .map_err(ClientError::Transport)?;
        decode(check(response)?).await
    }
}

/// Map a non-success status onto the error taxonomy
fn check(response: Response) -> ClientResult<Response> {
    match response.status() {
        StatusCode::NOT_FOUND => Err(ClientError::NotFound),
        status if !status.is_success() => Err(ClientError::Status(status.as_u16())),
        _ => Ok(response),
    }
}

async fn decode<T: serde::de::DeserializeOwned>(response: Response) -> ClientResult<T> {
    response.json().await.map_err(ClientError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_trailing_slashes_are_trimmed() {
        let api = BooksApi::new("http://localhost:3000///");
        assert_eq!(api.url("/books/"), "http://localhost:3000/books/");
    }

    #[test]
    fn error_messages_are_short_and_human_readable() {
        assert_eq!(
            ClientError::Status(500).to_string(),
            "HTTP error! status: 500"
        );
        assert_eq!(ClientError::NotFound.to_string(), "record not found");
    }
}
