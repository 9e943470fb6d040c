//! Form view state: shared create/edit form for a book.
//!
//! The draft holds the scalar fields, the genre sequence, and an
//! in-progress review. Genre toggles and review add/remove are purely
//! local; nothing reaches the store before submit.

use crate::client::BooksApi;
use crate::models::{Book, BookDraft, BookPatch, Review};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(String),
}

/// Per-instance form lifecycle:
/// `Loading -> Ready` (edit, after fetch) or immediately `Ready` (create),
/// then `Ready -> Submitting -> Done`, or back to `Ready` with an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Loading,
    Ready,
    Submitting,
    Done,
}

/// Where the view should navigate after an edit-mode load
#[derive(Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Ready,
    /// Load failed; the record is presumed unrecoverable for this session
    BackToList(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Saved; navigate to the list view
    Saved,
    /// Still on the form, entered data retained
    Stayed,
}

pub struct FormView {
    pub mode: FormMode,
    pub phase: FormPhase,
    pub draft: BookDraft,
    /// In-progress review, appended on an explicit add action
    pub review_name: String,
    pub review_body: String,
    pub error: Option<String>,
}

impl FormView {
    /// Create-mode form: no fetch, immediately ready
    pub fn new_create() -> Self {
        Self {
            mode: FormMode::Create,
            phase: FormPhase::Ready,
            draft: BookDraft::default(),
            review_name: String::new(),
            review_body: String::new(),
            error: None,
        }
    }

    /// Edit-mode form: starts loading until the record arrives
    pub fn new_edit(id: impl Into<String>) -> Self {
        Self {
            mode: FormMode::Edit(id.into()),
            phase: FormPhase::Loading,
            draft: BookDraft::default(),
            review_name: String::new(),
            review_body: String::new(),
            error: None,
        }
    }

    pub fn is_edit(&self) -> bool {
        matches!(self.mode, FormMode::Edit(_))
    }

    /// Fetch the record in edit mode. Create mode is ready as-is.
    pub async fn load(&mut self, api: &BooksApi) -> LoadOutcome {
        let id = match &self.mode {
            FormMode::Create => return LoadOutcome::Ready,
            FormMode::Edit(id) => id.clone(),
        };
        let result = api.get(&id).await.map_err(|e| e.to_string());
        self.apply_load(result)
    }

    fn apply_load(&mut self, result: Result<Book, String>) -> LoadOutcome {
        match result {
            Ok(book) => {
                self.draft = book.into();
                self.phase = FormPhase::Ready;
                LoadOutcome::Ready
            }
            Err(message) => LoadOutcome::BackToList(message),
        }
    }

    /// Submit the draft: create or update depending on mode. On failure the
    /// form stays ready with the entered data retained.
    pub async fn submit(&mut self, api: &BooksApi) -> SubmitOutcome {
        if !self.begin_submit() {
            return SubmitOutcome::Stayed;
        }

        let result = match self.mode.clone() {
            FormMode::Create => api.create(&self.draft).await.map(|_| ()),
            FormMode::Edit(id) => {
                let patch = BookPatch::from(self.draft.clone());
                api.update(&id, &patch).await.map(|_| ())
            }
        };

        self.apply_submit(result.map_err(|e| e.to_string()))
    }

    /// Required-field check at the form edge; the only validation anywhere
    fn begin_submit(&mut self) -> bool {
        if self.draft.title.trim().is_empty() || self.draft.author.trim().is_empty() {
            self.error = Some("Title and author are required".to_string());
            return false;
        }
        self.error = None;
        self.phase = FormPhase::Submitting;
        true
    }

    fn apply_submit(&mut self, result: Result<(), String>) -> SubmitOutcome {
        match result {
            Ok(()) => {
                self.phase = FormPhase::Done;
                SubmitOutcome::Saved
            }
            Err(message) => {
                self.error = Some(message);
                self.phase = FormPhase::Ready;
                SubmitOutcome::Stayed
            }
        }
    }

    /// Toggle membership of a genre in the draft sequence: selected genres
    /// are removed, unselected ones appended.
    pub fn toggle_genre(&mut self, genre: &str) {
        if let Some(pos) = self.draft.genres.iter().position(|g| g == genre) {
            self.draft.genres.remove(pos);
        } else {
            self.draft.genres.push(genre.to_string());
        }
    }

    /// Remove one selected genre (the chip's remove action)
    pub fn remove_genre(&mut self, genre: &str) {
        self.draft.genres.retain(|g| g != genre);
    }

    /// Append the in-progress review to the draft and clear the inputs.
    /// Blank reviews are ignored.
    pub fn add_review(&mut self) {
        if self.review_name.trim().is_empty() && self.review_body.trim().is_empty() {
            return;
        }
        self.draft.reviews.push(Review {
            name: std::mem::take(&mut self.review_name),
            body: std::mem::take(&mut self.review_body),
        });
    }

    /// Remove the review at the given position. Positional on purpose:
    /// removing by name+body equality would drop every identical review.
    pub fn remove_review(&mut self, index: usize) {
        if index < self.draft.reviews.len() {
            self.draft.reviews.remove(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ready_form() -> FormView {
        let mut form = FormView::new_create();
        form.draft.title = "Dune".to_string();
        form.draft.author = "Herbert".to_string();
        form
    }

    #[test]
    fn create_mode_is_immediately_ready() {
        let form = FormView::new_create();
        assert_eq!(form.phase, FormPhase::Ready);
        assert!(!form.is_edit());
    }

    #[test]
    fn edit_mode_loads_then_becomes_ready() {
        let mut form = FormView::new_edit("abc");
        assert_eq!(form.phase, FormPhase::Loading);

        let outcome = form.apply_load(Ok(Book {
            id: "abc".to_string(),
            title: "Dune".to_string(),
            author: "Herbert".to_string(),
            rating: 9.0,
            pages: 412,
            genres: vec!["Science Fiction".to_string()],
            reviews: vec![],
        }));
        assert_eq!(outcome, LoadOutcome::Ready);
        assert_eq!(form.phase, FormPhase::Ready);
        assert_eq!(form.draft.title, "Dune");
    }

    #[test]
    fn failed_edit_load_navigates_back_to_list() {
        let mut form = FormView::new_edit("abc");
        let outcome = form.apply_load(Err("record not found".to_string()));
        assert_eq!(outcome, LoadOutcome::BackToList("record not found".to_string()));
    }

    #[test]
    fn submit_walks_ready_submitting_done() {
        let mut form = ready_form();
        assert!(form.begin_submit());
        assert_eq!(form.phase, FormPhase::Submitting);

        let outcome = form.apply_submit(Ok(()));
        assert_eq!(outcome, SubmitOutcome::Saved);
        assert_eq!(form.phase, FormPhase::Done);
    }

    #[test]
    fn failed_submit_keeps_draft_and_surfaces_error() {
        let mut form = ready_form();
        form.toggle_genre("Fantasy");
        assert!(form.begin_submit());

        let outcome = form.apply_submit(Err("HTTP error! status: 500".to_string()));
        assert_eq!(outcome, SubmitOutcome::Stayed);
        assert_eq!(form.phase, FormPhase::Ready);
        assert_eq!(form.error.as_deref(), Some("HTTP error! status: 500"));
        // Entered data retained
        assert_eq!(form.draft.title, "Dune");
        assert_eq!(form.draft.genres, vec!["Fantasy".to_string()]);
    }

    #[test]
    fn submit_requires_title_and_author() {
        let mut form = FormView::new_create();
        assert!(!form.begin_submit());
        assert_eq!(form.phase, FormPhase::Ready);
        assert!(form.error.is_some());
    }

    #[test]
    fn toggling_adds_then_removes_without_duplicates() {
        let mut form = FormView::new_create();
        form.toggle_genre("Fantasy");
        form.toggle_genre("Mystery");
        form.toggle_genre("Fantasy");
        assert_eq!(form.draft.genres, vec!["Mystery".to_string()]);

        form.toggle_genre("Fantasy");
        assert_eq!(
            form.draft.genres,
            vec!["Mystery".to_string(), "Fantasy".to_string()]
        );
        // No toggle sequence produces duplicates
        form.toggle_genre("Fantasy");
        form.toggle_genre("Fantasy");
        assert_eq!(
            form.draft.genres.iter().filter(|g| *g == "Fantasy").count(),
            1
        );
    }

    #[test]
    fn review_add_and_positional_remove() {
        let mut form = FormView::new_create();
        form.review_name = "Paul".to_string();
        form.review_body = "A classic.".to_string();
        form.add_review();

        // Identical twin review
        form.review_name = "Paul".to_string();
        form.review_body = "A classic.".to_string();
        form.add_review();
        assert_eq!(form.draft.reviews.len(), 2);
        assert!(form.review_name.is_empty());

        // Removing position 0 drops exactly one, even with an identical twin
        form.remove_review(0);
        assert_eq!(form.draft.reviews.len(), 1);

        // Out-of-range removal is a no-op
        form.remove_review(5);
        assert_eq!(form.draft.reviews.len(), 1);
    }

    #[test]
    fn blank_review_is_not_added() {
        let mut form = FormView::new_create();
        form.add_review();
        assert!(form.draft.reviews.is_empty());
    }
}
