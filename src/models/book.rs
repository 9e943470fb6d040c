//! Book record model and related types.
//!
//! A book is stored as a single document-shaped row: scalar columns plus
//! JSONB columns for the genre and review sequences. Reviews carry no
//! identity of their own and only change as part of a book update.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A reader review attached to a book. Owned by its parent book,
/// no independent lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Review {
    /// Reviewer name
    pub name: String,
    /// Review text
    pub body: String,
}

/// A catalogued book record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Book {
    /// Opaque identifier, assigned by the store on creation
    pub id: String,
    pub title: String,
    pub author: String,
    /// Nominally 0-10; not enforced at the data layer
    pub rating: f32,
    /// Page count, stored numerically
    pub pages: i32,
    /// Genre tags, insertion order preserved
    pub genres: Vec<String>,
    pub reviews: Vec<Review>,
}

/// Book fields minus the identifier. Create payload and form draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BookDraft {
    pub title: String,
    pub author: String,
    pub rating: f32,
    pub pages: i32,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

impl Default for BookDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            author: String::new(),
            rating: 0.0,
            pages: 0,
            genres: Vec::new(),
            reviews: Vec::new(),
        }
    }
}

impl From<Book> for BookDraft {
    fn from(book: Book) -> Self {
        Self {
            title: book.title,
            author: book.author,
            rating: book.rating,
            pages: book.pages,
            genres: book.genres,
            reviews: book.reviews,
        }
    }
}

/// Partial update payload: absent fields are left untouched
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct BookPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviews: Option<Vec<Review>>,
}

impl BookPatch {
    /// True when no field is set; such a patch matches without modifying
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.rating.is_none()
            && self.pages.is_none()
            && self.genres.is_none()
            && self.reviews.is_none()
    }
}

impl From<BookDraft> for BookPatch {
    fn from(draft: BookDraft) -> Self {
        Self {
            title: Some(draft.title),
            author: Some(draft.author),
            rating: Some(draft.rating),
            pages: Some(draft.pages),
            genres: Some(draft.genres),
            reviews: Some(draft.reviews),
        }
    }
}

/// Store acknowledgement for a create operation. Carries the assigned
/// identifier rather than the created document; callers re-fetch or
/// merge optimistically.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InsertAck {
    pub acknowledged: bool,
    pub inserted_id: String,
}

/// Store acknowledgement for a partial update
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateAck {
    pub acknowledged: bool,
    /// Number of records matched by the identifier (0 when the id is unknown)
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Store acknowledgement for a delete
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeleteAck {
    pub acknowledged: bool,
    /// 0 when the identifier matched nothing (repeat deletes still succeed)
    pub deleted_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_patch_is_detected() {
        assert!(BookPatch::default().is_empty());

        let patch = BookPatch {
            rating: Some(7.5),
            ..Default::default()
        };
        assert!(!patch.is_empty());
    }

    #[test]
    fn patch_serialization_skips_absent_fields() {
        let patch = BookPatch {
            title: Some("Dune Messiah".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_value(&patch).unwrap();
        assert_eq!(json, serde_json::json!({ "title": "Dune Messiah" }));
    }

    #[test]
    fn draft_deserializes_without_sequences() {
        let draft: BookDraft = serde_json::from_value(serde_json::json!({
            "title": "Dune",
            "author": "Herbert",
            "rating": 9.0,
            "pages": 412
        }))
        .unwrap();
        assert!(draft.genres.is_empty());
        assert!(draft.reviews.is_empty());
    }
}
