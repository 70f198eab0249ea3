//! Author model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::{Validate, ValidationError};

use super::book::BookSummary;

/// Author record. Listings are ordered by last name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    /// Date of death ("Died")
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    pub fn absolute_url(&self) -> String {
        format!("/authors/{}", self.id)
    }

    /// "birth - death", with a blank side for an unknown date.
    /// `None` when neither date is known.
    pub fn lifespan(&self) -> Option<String> {
        if self.date_of_birth.is_none() && self.date_of_death.is_none() {
            return None;
        }
        let side = |d: Option<NaiveDate>| d.map(|d| d.to_string()).unwrap_or_default();
        Some(format!("{} - {}", side(self.date_of_birth), side(self.date_of_death)).trim().to_string())
    }
}

impl std::fmt::Display for Author {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.last_name, self.first_name)
    }
}

/// Create author request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[validate(schema(function = "validate_lifespan", skip_on_field_errors = false))]
pub struct CreateAuthor {
    #[validate(length(min = 1, max = 100, message = "First name must be 1 to 100 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "Last name must be 1 to 100 characters"))]
    pub last_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

fn validate_lifespan(author: &CreateAuthor) -> Result<(), ValidationError> {
    if let (Some(born), Some(died)) = (author.date_of_birth, author.date_of_death) {
        if died < born {
            let mut err = ValidationError::new("lifespan");
            err.message = Some("Date of death is before date of birth".into());
            return Err(err);
        }
    }
    Ok(())
}

/// Author page: the author and their books
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthorDetail {
    pub author: Author,
    pub display_name: String,
    pub lifespan: Option<String>,
    pub url: String,
    pub books: Vec<BookSummary>,
}

impl AuthorDetail {
    pub fn new(author: Author, books: Vec<BookSummary>) -> Self {
        Self {
            display_name: author.to_string(),
            lifespan: author.lifespan(),
            url: author.absolute_url(),
            author,
            books,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn author(born: Option<NaiveDate>, died: Option<NaiveDate>) -> Author {
        Author {
            id: 7,
            first_name: "Jules".to_string(),
            last_name: "Verne".to_string(),
            date_of_birth: born,
            date_of_death: died,
        }
    }

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_display_is_last_then_first() {
        assert_eq!(author(None, None).to_string(), "Verne Jules");
        assert_eq!(author(None, None).absolute_url(), "/authors/7");
    }

    #[test]
    fn test_lifespan() {
        assert_eq!(author(None, None).lifespan(), None);
        assert_eq!(
            author(date(1828, 2, 8), date(1905, 3, 24)).lifespan().as_deref(),
            Some("1828-02-08 - 1905-03-24")
        );
        assert_eq!(author(date(1828, 2, 8), None).lifespan().as_deref(), Some("1828-02-08 -"));
        assert_eq!(author(None, date(1905, 3, 24)).lifespan().as_deref(), Some("- 1905-03-24"));
    }

    #[test]
    fn test_create_rejects_death_before_birth() {
        let req = CreateAuthor {
            first_name: "Jules".into(),
            last_name: "Verne".into(),
            date_of_birth: date(1905, 3, 24),
            date_of_death: date(1828, 2, 8),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_create_requires_names() {
        let req = CreateAuthor {
            first_name: "Jules".into(),
            last_name: String::new(),
            date_of_birth: None,
            date_of_death: None,
        };
        assert!(req.validate().is_err());
    }
}
