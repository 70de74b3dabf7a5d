//! In-memory books repository.
//!
//! Books live in a single ordered `Vec` next to the identifier counter, both
//! behind one `RwLock`. The counter only moves forward, so an identifier is
//! never handed out twice even after deletions.

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookInput},
};

#[derive(Debug)]
struct Shelf {
    books: Vec<Book>,
    next_id: u64,
}

#[derive(Clone, Debug)]
pub struct BooksRepository {
    shelf: Arc<RwLock<Shelf>>,
}

impl Default for BooksRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BooksRepository {
    /// Empty repository, identifiers start at 1
    pub fn new() -> Self {
        Self::with_books(Vec::new())
    }

    /// Repository holding the three starter books, identifiers continue at 4
    pub fn seeded() -> Self {
        Self::with_books(vec![
            Book::new(1, BookInput::new("To Kill a Mockingbird", "Harper Lee", 1960)),
            Book::new(2, BookInput::new("1984", "George Orwell", 1949)),
            Book::new(3, BookInput::new("Pride and Prejudice", "Jane Austen", 1813)),
        ])
    }

    fn with_books(books: Vec<Book>) -> Self {
        let next_id = books.iter().map(|b| b.id).max().unwrap_or(0) + 1;
        Self {
            shelf: Arc::new(RwLock::new(Shelf { books, next_id })),
        }
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Shelf>> {
        self.shelf
            .read()
            .map_err(|_| AppError::Internal("book store lock poisoned".to_string()))
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Shelf>> {
        self.shelf
            .write()
            .map_err(|_| AppError::Internal("book store lock poisoned".to_string()))
    }

    /// All books in insertion order
    pub fn list(&self) -> AppResult<Vec<Book>> {
        Ok(self.read()?.books.clone())
    }

    pub fn count(&self) -> AppResult<usize> {
        Ok(self.read()?.books.len())
    }

    /// Get book by ID
    pub fn get_by_id(&self, id: u64) -> AppResult<Book> {
        self.read()?
            .books
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| not_found(id))
    }

    /// Append a new book under the next identifier
    pub fn create(&self, input: BookInput) -> AppResult<Book> {
        let mut shelf = self.write()?;
        let book = Book::new(shelf.next_id, input);
        shelf.books.push(book.clone());
        shelf.next_id += 1;
        Ok(book)
    }

    /// Overwrite title, author and year of an existing book in place
    pub fn update(&self, id: u64, input: BookInput) -> AppResult<Book> {
        let mut shelf = self.write()?;
        let book = shelf
            .books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| not_found(id))?;
        book.apply(input);
        Ok(book.clone())
    }

    /// Remove a book, returning what was stored
    pub fn delete(&self, id: u64) -> AppResult<Book> {
        let mut shelf = self.write()?;
        let position = shelf
            .books
            .iter()
            .position(|b| b.id == id)
            .ok_or_else(|| not_found(id))?;
        Ok(shelf.books.remove(position))
    }
}

fn not_found(id: u64) -> AppError {
    AppError::NotFound(format!("Book with ID {} not found", id))
}
