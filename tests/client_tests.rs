//! Client-layer integration tests: BooksApi and the view states driven
//! against a live server.
//!
//! Run with: `cargo test -- --ignored`

use folio_server::{
    client::{BooksApi, ClientError},
    models::BookDraft,
    ui::{FormView, ListPhase, ListView, LoadOutcome, SubmitOutcome},
};

const BASE_URL: &str = "http://localhost:3000";

fn dune_draft() -> BookDraft {
    BookDraft {
        title: "Dune".to_string(),
        author: "Herbert".to_string(),
        rating: 9.0,
        pages: 412,
        genres: vec!["Science Fiction".to_string()],
        reviews: vec![],
    }
}

#[tokio::test]
#[ignore]
async fn list_view_refresh_and_local_delete() {
    let api = BooksApi::new(BASE_URL);
    let ack = api.create(&dune_draft()).await.expect("create failed");

    let mut list = ListView::new();
    list.refresh(&api).await;
    assert_eq!(list.phase, ListPhase::Ready);
    assert!(list.books.iter().any(|b| b.id == ack.inserted_id));

    // Delete removes the row from local state without a re-fetch
    list.delete(&api, &ack.inserted_id).await;
    assert!(list.books.iter().all(|b| b.id != ack.inserted_id));
    assert!(list.error.is_none());
}

#[tokio::test]
#[ignore]
async fn form_view_edit_cycle() {
    let api = BooksApi::new(BASE_URL);
    let ack = api.create(&dune_draft()).await.expect("create failed");

    let mut form = FormView::new_edit(ack.inserted_id.clone());
    assert_eq!(form.load(&api).await, LoadOutcome::Ready);
    assert_eq!(form.draft.title, "Dune");

    form.draft.rating = 10.0;
    form.review_name = "Paul".to_string();
    form.review_body = "A classic.".to_string();
    form.add_review();
    assert_eq!(form.submit(&api).await, SubmitOutcome::Saved);

    let book = api.get(&ack.inserted_id).await.expect("get failed");
    assert_eq!(book.rating, 10.0);
    assert_eq!(book.reviews.len(), 1);
    assert_eq!(book.title, "Dune");

    api.delete(&ack.inserted_id).await.expect("delete failed");
}

#[tokio::test]
#[ignore]
async fn form_view_load_of_missing_record_navigates_back() {
    let api = BooksApi::new(BASE_URL);

    let mut form = FormView::new_edit("no-such-id");
    match form.load(&api).await {
        LoadOutcome::BackToList(message) => assert!(!message.is_empty()),
        other => panic!("expected BackToList, got {:?}", other),
    }
}

#[tokio::test]
#[ignore]
async fn get_of_unknown_id_is_a_not_found_signal() {
    let api = BooksApi::new(BASE_URL);

    match api.get("no-such-id").await {
        Err(ClientError::NotFound) => {}
        other => panic!("expected NotFound, got {:?}", other.map(|b| b.id)),
    }
}
