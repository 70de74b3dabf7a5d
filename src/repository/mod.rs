//! Repository layer for catalog storage

pub mod books;

/// Main repository struct holding every store the service uses
#[derive(Clone, Debug, Default)]
pub struct Repository {
    pub books: books::BooksRepository,
}

impl Repository {
    /// Create a repository around the given books store
    pub fn new(books: books::BooksRepository) -> Self {
        Self { books }
    }
}
