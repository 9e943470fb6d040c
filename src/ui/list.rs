//! List view state: all books, per-row delete, reviews inspector data.

use crate::client::BooksApi;
use crate::models::Book;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListPhase {
    Loading,
    Ready,
    Failed,
}

/// State container for the book list view. Owns its own book vector;
/// deletes reconcile locally without a full re-fetch.
pub struct ListView {
    pub phase: ListPhase,
    pub books: Vec<Book>,
    /// Non-fatal error annotation (e.g. a failed delete); the list stays usable
    pub error: Option<String>,
}

impl ListView {
    pub fn new() -> Self {
        Self {
            phase: ListPhase::Loading,
            books: Vec::new(),
            error: None,
        }
    }

    /// Fetch all books. A failure is surfaced as a message, not retried.
    pub async fn refresh(&mut self, api: &BooksApi) {
        self.phase = ListPhase::Loading;
        self.error = None;
        let result = api.list().await.map_err(|e| e.to_string());
        self.apply_refresh(result);
    }

    fn apply_refresh(&mut self, result: Result<Vec<Book>, String>) {
        match result {
            Ok(books) => {
                self.books = books;
                self.phase = ListPhase::Ready;
            }
            Err(message) => {
                self.error = Some(message);
                self.phase = ListPhase::Failed;
            }
        }
    }

    /// Delete one book. On success the row disappears locally; on failure
    /// it stays visible and the error is surfaced.
    pub async fn delete(&mut self, api: &BooksApi, id: &str) {
        let result = api.delete(id).await.map(|_| ()).map_err(|e| e.to_string());
        self.apply_delete(id, result);
    }

    fn apply_delete(&mut self, id: &str, result: Result<(), String>) {
        match result {
            Ok(()) => {
                self.books.retain(|book| book.id != id);
                self.error = None;
            }
            Err(message) => {
                self.error = Some(message);
            }
        }
    }
}

impl Default for ListView {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Book;

    fn book(id: &str, title: &str) -> Book {
        Book {
            id: id.to_string(),
            title: title.to_string(),
            author: "Herbert".to_string(),
            rating: 9.0,
            pages: 412,
            genres: vec!["Science Fiction".to_string()],
            reviews: vec![],
        }
    }

    #[test]
    fn starts_loading_then_becomes_ready() {
        let mut view = ListView::new();
        assert_eq!(view.phase, ListPhase::Loading);

        view.apply_refresh(Ok(vec![book("a", "Dune")]));
        assert_eq!(view.phase, ListPhase::Ready);
        assert_eq!(view.books.len(), 1);
    }

    #[test]
    fn failed_refresh_surfaces_a_message() {
        let mut view = ListView::new();
        view.apply_refresh(Err("HTTP error! status: 500".to_string()));
        assert_eq!(view.phase, ListPhase::Failed);
        assert_eq!(view.error.as_deref(), Some("HTTP error! status: 500"));
    }

    #[test]
    fn successful_delete_removes_the_row_locally() {
        let mut view = ListView::new();
        view.apply_refresh(Ok(vec![book("a", "Dune"), book("b", "Dune Messiah")]));

        view.apply_delete("a", Ok(()));
        assert_eq!(view.books.len(), 1);
        assert_eq!(view.books[0].id, "b");
        assert!(view.error.is_none());
    }

    #[test]
    fn failed_delete_keeps_the_row_visible() {
        let mut view = ListView::new();
        view.apply_refresh(Ok(vec![book("a", "Dune")]));

        view.apply_delete("a", Err("network error".to_string()));
        assert_eq!(view.books.len(), 1);
        assert_eq!(view.error.as_deref(), Some("network error"));
        assert_eq!(view.phase, ListPhase::Ready);
    }
}
