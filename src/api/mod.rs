//! API handlers for Folio REST endpoints

pub mod books;
pub mod health;
pub mod openapi;
