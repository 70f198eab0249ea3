//! Book (catalog title) model and related types

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::{author::Author, book_instance::InstanceView, genre::Genre, language::Language};

/// Number of genres shown in the short genre label
pub const GENRE_DISPLAY_LIMIT: usize = 3;

/// Abstract description of a book, independent of its physical copies
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Book {
    pub id: i32,
    pub title: String,
    /// Author, cleared when the author is deleted
    pub author_id: Option<i32>,
    pub summary: String,
    /// ISBN (13 characters)
    pub isbn: String,
    pub language_id: Option<i32>,
}

impl Book {
    pub fn absolute_url(&self) -> String {
        format!("/books/{}", self.id)
    }

    /// Short genre label: the first three genre names, comma separated.
    pub fn display_genre(genres: &[Genre]) -> String {
        genres
            .iter()
            .take(GENRE_DISPLAY_LIMIT)
            .map(|g| g.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.title)
    }
}

/// Book row for list pages
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct BookSummary {
    pub id: i32,
    pub title: String,
    pub author_id: Option<i32>,
    /// Author display name ("last first")
    pub author_name: Option<String>,
}

/// Book page: the book with its author, genres, language and copies
#[derive(Debug, Serialize, ToSchema)]
pub struct BookDetail {
    pub book: Book,
    pub url: String,
    pub author: Option<Author>,
    pub author_name: Option<String>,
    pub genres: Vec<Genre>,
    pub genre_display: String,
    pub language: Option<Language>,
    pub instances: Vec<InstanceView>,
}

impl BookDetail {
    pub fn new(
        book: Book,
        author: Option<Author>,
        genres: Vec<Genre>,
        language: Option<Language>,
        instances: Vec<InstanceView>,
    ) -> Self {
        Self {
            url: book.absolute_url(),
            author_name: author.as_ref().map(ToString::to_string),
            genre_display: Book::display_genre(&genres),
            book,
            author,
            genres,
            language,
            instances,
        }
    }
}

/// Create book request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateBook {
    #[validate(length(min = 1, max = 200, message = "Title must be 1 to 200 characters"))]
    pub title: String,
    pub author_id: Option<i32>,
    /// Short summary of the book
    #[serde(default)]
    #[validate(length(max = 1000, message = "Summary must be at most 1000 characters"))]
    pub summary: String,
    #[validate(length(min = 1, max = 13, message = "ISBN must be 1 to 13 characters"))]
    pub isbn: String,
    pub language_id: Option<i32>,
    /// Genre ids
    #[serde(default)]
    pub genre_ids: Vec<i32>,
}
