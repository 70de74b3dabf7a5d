//! Catalog management service

use crate::{
    error::AppResult,
    models::book::{Book, BookInput},
    repository::Repository,
};

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
}

impl CatalogService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub fn list_books(&self) -> AppResult<Vec<Book>> {
        self.repository.books.list()
    }

    pub fn count_books(&self) -> AppResult<usize> {
        self.repository.books.count()
    }

    pub fn get_book(&self, id: u64) -> AppResult<Book> {
        self.repository.books.get_by_id(id).map_err(|e| {
            tracing::debug!("Book lookup failed: id={}", id);
            e
        })
    }

    pub fn create_book(&self, input: BookInput) -> AppResult<Book> {
        let book = self.repository.books.create(input)?;
        tracing::info!("Catalog: created book id={} title={:?}", book.id, book.title);
        Ok(book)
    }

    /// Replace title, author and year of an existing book
    pub fn update_book(&self, id: u64, input: BookInput) -> AppResult<Book> {
        let book = self.repository.books.update(id, input)?;
        tracing::info!("Catalog: updated book id={}", book.id);
        Ok(book)
    }

    pub fn delete_book(&self, id: u64) -> AppResult<Book> {
        let book = self.repository.books.delete(id)?;
        tracing::info!("Catalog: deleted book id={} title={:?}", book.id, book.title);
        Ok(book)
    }
}
