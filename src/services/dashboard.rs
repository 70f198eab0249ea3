//! Home page dashboard counters

use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::book_instance::LoanStatus, repository::Repository};

/// Aggregate counts shown on the home page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct DashboardCounts {
    pub num_books: i64,
    pub num_instances: i64,
    /// Copies with status "available"
    pub num_instances_available: i64,
    pub num_authors: i64,
    pub num_genres: i64,
    /// Books whose title contains `keyword`
    pub title_word: i64,
    pub keyword: String,
}

#[derive(Clone)]
pub struct DashboardService {
    repository: Repository,
    keyword: String,
}

impl DashboardService {
    pub fn new(repository: Repository, keyword: String) -> Self {
        Self { repository, keyword }
    }

    /// Compute the home page counters. `keyword` overrides the configured title word.
    pub async fn counts(&self, keyword: Option<&str>) -> AppResult<DashboardCounts> {
        let keyword = keyword.filter(|k| !k.is_empty()).unwrap_or(&self.keyword);
        let repo = &self.repository;

        let (num_books, num_instances, num_instances_available, num_authors, num_genres, title_word) = tokio::try_join!(
            repo.books_count(),
            repo.instances_count(),
            repo.instances_count_by_status(LoanStatus::Available),
            repo.authors_count(),
            repo.genres_count(),
            repo.books_count_title_contains(keyword),
        )?;

        tracing::debug!(num_books, num_instances, title_word, keyword, "Dashboard counts computed");

        Ok(DashboardCounts {
            num_books,
            num_instances,
            num_instances_available,
            num_authors,
            num_genres,
            title_word,
            keyword: keyword.to_string(),
        })
    }
}
