//! Language model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use super::book::BookSummary;

/// Language a book's text is written in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Language {
    pub id: i32,
    /// Unique language name
    pub name: String,
}

impl Language {
    pub fn absolute_url(&self) -> String {
        format!("/languages/{}", self.id)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Text language {}", self.name)
    }
}

/// Create language request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLanguage {
    #[validate(length(min = 1, max = 100, message = "Language name must be 1 to 100 characters"))]
    pub name: String,
}

/// Language page: the language and the books written in it
#[derive(Debug, Serialize, ToSchema)]
pub struct LanguageDetail {
    pub language: Language,
    pub display_name: String,
    pub url: String,
    pub books: Vec<BookSummary>,
}

impl LanguageDetail {
    pub fn new(language: Language, books: Vec<BookSummary>) -> Self {
        Self {
            display_name: language.to_string(),
            url: language.absolute_url(),
            language,
            books,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_and_url() {
        let language = Language { id: 4, name: "Russian".to_string() };
        assert_eq!(language.to_string(), "Text language Russian");
        assert_eq!(language.absolute_url(), "/languages/4");
    }

    #[test]
    fn test_name_length_limits() {
        assert!(CreateLanguage { name: "English".into() }.validate().is_ok());
        assert!(CreateLanguage { name: String::new() }.validate().is_err());
        assert!(CreateLanguage { name: "x".repeat(101) }.validate().is_err());
    }
}
