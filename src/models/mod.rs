//! Data models for the catalog

pub mod author;
pub mod book;
pub mod book_instance;
pub mod borrower;
pub mod genre;
pub mod language;

// Re-export commonly used types
pub use author::{Author, AuthorDetail};
pub use book::{Book, BookDetail, BookSummary};
pub use book_instance::{BookInstance, InstanceView, LoanStatus};
pub use borrower::Borrower;
pub use genre::Genre;
pub use language::{Language, LanguageDetail};
