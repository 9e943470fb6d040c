//! View layer: explicit state containers for the list and form views.
//!
//! Each view owns its state and mutates it when a client-layer call
//! completes. There is no shared global list; the list view reconciles
//! locally after a delete instead of re-fetching.

pub mod form;
pub mod list;

pub use form::{FormMode, FormPhase, FormView, LoadOutcome, SubmitOutcome};
pub use list::{ListPhase, ListView};

/// Fixed genre vocabulary offered by the form's multi-select
pub const GENRE_OPTIONS: [&str; 8] = [
    "Fiction",
    "Non-Fiction",
    "Science Fiction",
    "Fantasy",
    "Mystery",
    "Biography",
    "History",
    "Science",
];
