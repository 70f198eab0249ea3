//! Borrower domain methods on Repository

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::borrower::{Borrower, CreateBorrower},
};

impl Repository {
    pub async fn borrowers_list(&self) -> AppResult<Vec<Borrower>> {
        let rows = sqlx::query_as::<_, Borrower>("SELECT id, username FROM users ORDER BY username")
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn borrowers_create(&self, data: &CreateBorrower) -> AppResult<Borrower> {
        sqlx::query_as::<_, Borrower>("INSERT INTO users (username) VALUES ($1) RETURNING id, username")
            .bind(&data.username)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::from_constraint(e, &format!("User '{}'", data.username)))
    }
}
