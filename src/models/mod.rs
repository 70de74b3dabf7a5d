//! Data models for the library API

pub mod book;

pub use book::{Book, BookInput};
