//! Book domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::book::{Book, BookSummary, CreateBook},
};

const SUMMARY_SELECT: &str = r#"
    SELECT b.id, b.title, b.author_id, a.last_name || ' ' || a.first_name AS author_name
    FROM books b
    LEFT JOIN authors a ON a.id = b.author_id
"#;

impl Repository {
    pub async fn books_count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count books whose title contains `word` (case-sensitive substring)
    pub async fn books_count_title_contains(&self, word: &str) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM books WHERE strpos(title, $1) > 0")
            .bind(word)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// One page of books, ordered by title
    pub async fn books_list(&self, limit: i64, offset: i64) -> AppResult<Vec<BookSummary>> {
        let query = format!("{} ORDER BY b.title, b.id LIMIT $1 OFFSET $2", SUMMARY_SELECT);
        let rows = sqlx::query_as::<_, BookSummary>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn books_list_by_author(&self, author_id: i32) -> AppResult<Vec<BookSummary>> {
        let query = format!("{} WHERE b.author_id = $1 ORDER BY b.title, b.id", SUMMARY_SELECT);
        let rows = sqlx::query_as::<_, BookSummary>(&query)
            .bind(author_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn books_list_by_language(&self, language_id: i32) -> AppResult<Vec<BookSummary>> {
        let query = format!("{} WHERE b.language_id = $1 ORDER BY b.title, b.id", SUMMARY_SELECT);
        let rows = sqlx::query_as::<_, BookSummary>(&query)
            .bind(language_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn books_get_by_id(&self, id: i32) -> AppResult<Book> {
        sqlx::query_as::<_, Book>(
            "SELECT id, title, author_id, summary, isbn, language_id FROM books WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Book {} not found", id)))
    }

    /// Create a book together with its genre links
    pub async fn books_create(&self, data: &CreateBook) -> AppResult<Book> {
        let mut tx = self.pool.begin().await?;

        let book = sqlx::query_as::<_, Book>(
            r#"
            INSERT INTO books (title, author_id, summary, isbn, language_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, title, author_id, summary, isbn, language_id
            "#,
        )
        .bind(&data.title)
        .bind(data.author_id)
        .bind(&data.summary)
        .bind(&data.isbn)
        .bind(data.language_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| AppError::from_constraint(e, "Book"))?;

        if !data.genre_ids.is_empty() {
            sqlx::query(
                r#"
                INSERT INTO book_genres (book_id, genre_id)
                SELECT $1, genre_id FROM UNNEST($2::int[]) AS t(genre_id)
                ON CONFLICT DO NOTHING
                "#,
            )
            .bind(book.id)
            .bind(&data.genre_ids)
            .execute(&mut *tx)
            .await
            .map_err(|e| AppError::from_constraint(e, "Book genre"))?;
        }

        tx.commit().await?;
        Ok(book)
    }

    /// Delete a book; its copies are kept without a book
    pub async fn books_delete(&self, id: i32) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book {} not found", id)));
        }
        Ok(())
    }
}
