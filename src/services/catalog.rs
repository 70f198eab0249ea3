//! Catalog service: books, authors, genres, languages and borrowers

use chrono::Local;

use super::pagination::{Page, PageRequest, Paginator};
use crate::{
    error::AppResult,
    models::{
        author::{Author, AuthorDetail, CreateAuthor},
        book::{Book, BookDetail, BookSummary, CreateBook},
        book_instance::{InstanceQuery, InstanceView},
        borrower::{Borrower, CreateBorrower},
        genre::{CreateGenre, Genre},
        language::{CreateLanguage, Language, LanguageDetail},
    },
    repository::Repository,
};
use validator::Validate;

#[derive(Clone)]
pub struct CatalogService {
    repository: Repository,
    paginator: Paginator,
}

impl CatalogService {
    pub fn new(repository: Repository, paginator: Paginator) -> Self {
        Self { repository, paginator }
    }

    // -----------------------------------------------------------------------
    // Books
    // -----------------------------------------------------------------------

    pub async fn list_books(&self, request: &PageRequest) -> AppResult<Page<BookSummary>> {
        // malformed page numbers never reach the database
        request.number()?;
        let total = self.repository.books_count().await?;
        let window = self.paginator.window(total, request)?;
        let books = self.repository.books_list(window.limit(), window.offset()).await?;
        Ok(Page::new(books, window))
    }

    /// Book with its author, genres, language and copies
    pub async fn get_book(&self, id: i32) -> AppResult<BookDetail> {
        let book = self.repository.books_get_by_id(id).await?;
        let author = self.repository.authors_find(book.author_id).await?;
        let genres = self.repository.genres_for_book(id).await?;
        let language = self.repository.languages_find(book.language_id).await?;
        let today = Local::now().date_naive();
        let filter = InstanceQuery { status: None, book_id: Some(id) };
        let instances = self
            .repository
            .instances_list(&filter)
            .await?
            .into_iter()
            .map(|row| InstanceView::new(row, today))
            .collect();
        Ok(BookDetail::new(book, author, genres, language, instances))
    }

    pub async fn create_book(&self, data: &CreateBook) -> AppResult<Book> {
        data.validate()?;
        let book = self.repository.books_create(data).await?;
        tracing::info!(book_id = book.id, title = %book.title, "Book created");
        Ok(book)
    }

    pub async fn delete_book(&self, id: i32) -> AppResult<()> {
        self.repository.books_delete(id).await?;
        tracing::info!(book_id = id, "Book deleted");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Authors
    // -----------------------------------------------------------------------

    pub async fn list_authors(&self, request: &PageRequest) -> AppResult<Page<Author>> {
        request.number()?;
        let total = self.repository.authors_count().await?;
        let window = self.paginator.window(total, request)?;
        let authors = self.repository.authors_list(window.limit(), window.offset()).await?;
        Ok(Page::new(authors, window))
    }

    pub async fn get_author(&self, id: i32) -> AppResult<AuthorDetail> {
        let author = self.repository.authors_get_by_id(id).await?;
        let books = self.repository.books_list_by_author(id).await?;
        Ok(AuthorDetail::new(author, books))
    }

    pub async fn create_author(&self, data: &CreateAuthor) -> AppResult<Author> {
        data.validate()?;
        let author = self.repository.authors_create(data).await?;
        tracing::info!(author_id = author.id, name = %author, "Author created");
        Ok(author)
    }

    pub async fn delete_author(&self, id: i32) -> AppResult<()> {
        self.repository.authors_delete(id).await?;
        tracing::info!(author_id = id, "Author deleted");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Genres
    // -----------------------------------------------------------------------

    pub async fn list_genres(&self) -> AppResult<Vec<Genre>> {
        self.repository.genres_list().await
    }

    pub async fn create_genre(&self, data: &CreateGenre) -> AppResult<Genre> {
        data.validate()?;
        self.repository.genres_create(data).await
    }

    pub async fn delete_genre(&self, id: i32) -> AppResult<()> {
        self.repository.genres_delete(id).await
    }

    // -----------------------------------------------------------------------
    // Languages
    // -----------------------------------------------------------------------

    pub async fn list_languages(&self) -> AppResult<Vec<Language>> {
        self.repository.languages_list().await
    }

    pub async fn get_language(&self, id: i32) -> AppResult<LanguageDetail> {
        let language = self.repository.languages_get_by_id(id).await?;
        let books = self.repository.books_list_by_language(id).await?;
        Ok(LanguageDetail::new(language, books))
    }

    pub async fn create_language(&self, data: &CreateLanguage) -> AppResult<Language> {
        data.validate()?;
        self.repository.languages_create(data).await
    }

    pub async fn delete_language(&self, id: i32) -> AppResult<()> {
        self.repository.languages_delete(id).await
    }

    // -----------------------------------------------------------------------
    // Borrowers
    // -----------------------------------------------------------------------

    pub async fn list_borrowers(&self) -> AppResult<Vec<Borrower>> {
        self.repository.borrowers_list().await
    }

    pub async fn create_borrower(&self, data: &CreateBorrower) -> AppResult<Borrower> {
        data.validate()?;
        self.repository.borrowers_create(data).await
    }
}
