//! Folio Book Cataloging System
//!
//! A Rust implementation of the Folio book catalog: a REST JSON server over
//! a book collection, a reqwest-backed client layer, and the view-state
//! containers driving the bundled console client.

use std::sync::Arc;

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;
pub mod ui;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
