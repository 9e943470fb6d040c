//! Data models for Folio

pub mod book;

// Re-export commonly used types
pub use book::{Book, BookDraft, BookPatch, DeleteAck, InsertAck, Review, UpdateAck};
