//! Books repository for database operations.
//!
//! Each book is one row: scalar columns plus JSONB columns for the genre
//! and review sequences. Identifiers are UUIDv4 strings assigned here at
//! insert time; callers treat them as opaque.

use sqlx::{types::Json, FromRow, Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::{AppError, AppResult},
    models::{Book, BookDraft, BookPatch, DeleteAck, InsertAck, Review, UpdateAck},
};

/// Row shape for the books table; JSONB columns decode through `Json`
#[derive(FromRow)]
struct BookRow {
    id: String,
    title: String,
    author: String,
    rating: f32,
    pages: i32,
    genres: Json<Vec<String>>,
    reviews: Json<Vec<Review>>,
}

impl From<BookRow> for Book {
    fn from(row: BookRow) -> Self {
        Self {
            id: row.id,
            title: row.title,
            author: row.author,
            rating: row.rating,
            pages: row.pages,
            genres: row.genres.0,
            reviews: row.reviews.0,
        }
    }
}

/// Build the SET clauses for a partial update, numbering placeholders
/// from $2 ($1 is the row identifier). Clause order matches the bind
/// order in `update`.
fn patch_set_clauses(patch: &BookPatch) -> Vec<String> {
    let mut clauses = Vec::new();
    let mut idx = 2;
    let mut push = |column: &str, present: bool| {
        if present {
            clauses.push(format!("{} = ${}", column, idx));
            idx += 1;
        }
    };

    push("title", patch.title.is_some());
    push("author", patch.author.is_some());
    push("rating", patch.rating.is_some());
    push("pages", patch.pages.is_some());
    push("genres", patch.genres.is_some());
    push("reviews", patch.reviews.is_some());
    clauses
}

#[derive(Clone)]
pub struct BooksRepository {
    pool: Pool<Postgres>,
}

impl BooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// List all books as stored; no filtering, sorting, or pagination
    pub async fn list(&self) -> AppResult<Vec<Book>> {
        let rows = sqlx::query_as::<_, BookRow>(
            "SELECT id, title, author, rating, pages, genres, reviews FROM books",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Book::from).collect())
    }

    /// Get a single book by identifier. An unknown or malformed id is a
    /// not-found signal, never a server error.
    pub async fn get(&self, id: &str) -> AppResult<Book> {
        let row = sqlx::query_as::<_, BookRow>(
            "SELECT id, title, author, rating, pages, genres, reviews FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book with id {} not found", id)))?;

        Ok(row.into())
    }

    /// Insert a new book with a freshly assigned identifier. The draft is
    /// persisted verbatim; no field validation happens here.
    pub async fn insert(&self, draft: &BookDraft) -> AppResult<InsertAck> {
        let id = Uuid::new_v4().to_string();

        sqlx::query(
            r#"
            INSERT INTO books (id, title, author, rating, pages, genres, reviews)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(&id)
        .bind(&draft.title)
        .bind(&draft.author)
        .bind(draft.rating)
        .bind(draft.pages)
        .bind(Json(&draft.genres))
        .bind(Json(&draft.reviews))
        .execute(&self.pool)
        .await?;

        Ok(InsertAck {
            acknowledged: true,
            inserted_id: id,
        })
    }

    /// Merge the provided fields into an existing row. Unspecified fields
    /// stay untouched. An unknown id is still a success, reported through
    /// `matched_count = 0`.
    pub async fn update(&self, id: &str, patch: &BookPatch) -> AppResult<UpdateAck> {
        if patch.is_empty() {
            // Nothing to write; still report whether the id matched
            let matched: i64 = sqlx::query_scalar("SELECT count(*) FROM books WHERE id = $1")
                .bind(id)
                .fetch_one(&self.pool)
                .await?;
            return Ok(UpdateAck {
                acknowledged: true,
                matched_count: matched as u64,
                modified_count: 0,
            });
        }

        let query = format!(
            "UPDATE books SET {} WHERE id = $1",
            patch_set_clauses(patch).join(", ")
        );

        let mut builder = sqlx::query(&query).bind(id);
        if let Some(ref title) = patch.title {
            builder = builder.bind(title);
        }
        if let Some(ref author) = patch.author {
            builder = builder.bind(author);
        }
        if let Some(rating) = patch.rating {
            builder = builder.bind(rating);
        }
        if let Some(pages) = patch.pages {
            builder = builder.bind(pages);
        }
        if let Some(ref genres) = patch.genres {
            builder = builder.bind(Json(genres));
        }
        if let Some(ref reviews) = patch.reviews {
            builder = builder.bind(Json(reviews));
        }

        let result = builder.execute(&self.pool).await?;
        let matched = result.rows_affected();

        Ok(UpdateAck {
            acknowledged: true,
            matched_count: matched,
            modified_count: matched,
        })
    }

    /// Delete a book by identifier. Idempotent in effect: deleting an
    /// unknown id succeeds with `deleted_count = 0`.
    pub async fn delete(&self, id: &str) -> AppResult<DeleteAck> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(DeleteAck {
            acknowledged: true,
            deleted_count: result.rows_affected(),
        })
    }
}
