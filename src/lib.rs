//! Library API
//!
//! A small REST JSON service managing an in-memory catalog of books.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

use repository::{books::BooksRepository, Repository};
use services::Services;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<Services>,
}

impl AppState {
    /// Build the state for a process: the books store is seeded unless
    /// `catalog.seed` is off, and lives until the process exits.
    pub fn new(config: AppConfig) -> Self {
        let books = if config.catalog.seed {
            BooksRepository::seeded()
        } else {
            BooksRepository::new()
        };

        Self {
            config: Arc::new(config),
            services: Arc::new(Services::new(Repository::new(books))),
        }
    }
}
