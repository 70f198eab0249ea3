//! Book copy domain methods on Repository

use uuid::Uuid;

use super::Repository;
use crate::{
    error::{AppError, AppResult},
    models::book_instance::{
        BookInstanceRow, CreateBookInstance, InstanceQuery, LoanStatus, UpdateBookInstance,
    },
};

const ROW_SELECT: &str = r#"
    SELECT bi.id, bi.book_id, bi.imprint, bi.due_back, bi.status, bi.borrower_id,
           b.title AS book_title
    FROM book_instances bi
    LEFT JOIN books b ON b.id = bi.book_id
"#;

impl Repository {
    pub async fn instances_count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM book_instances")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn instances_count_by_status(&self, status: LoanStatus) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM book_instances WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Copies ordered by due date, optionally filtered by status and book
    pub async fn instances_list(&self, filter: &InstanceQuery) -> AppResult<Vec<BookInstanceRow>> {
        let query = format!(
            r#"{}
            WHERE ($1::varchar IS NULL OR bi.status = $1)
              AND ($2::int IS NULL OR bi.book_id = $2)
            ORDER BY bi.due_back, bi.id
            "#,
            ROW_SELECT
        );
        let rows = sqlx::query_as::<_, BookInstanceRow>(&query)
            .bind(filter.status)
            .bind(filter.book_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    pub async fn instances_get_by_id(&self, id: Uuid) -> AppResult<BookInstanceRow> {
        let query = format!("{} WHERE bi.id = $1", ROW_SELECT);
        sqlx::query_as::<_, BookInstanceRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Book copy {} not found", id)))
    }

    pub async fn instances_create(&self, data: &CreateBookInstance) -> AppResult<BookInstanceRow> {
        let id = Uuid::new_v4();
        sqlx::query(
            r#"
            INSERT INTO book_instances (id, book_id, imprint, due_back, status, borrower_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(id)
        .bind(data.book_id)
        .bind(&data.imprint)
        .bind(data.due_back)
        .bind(data.status)
        .bind(data.borrower_id)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::from_constraint(e, "Book copy"))?;

        self.instances_get_by_id(id).await
    }

    /// Update the fields present in `data`
    pub async fn instances_update(&self, id: Uuid, data: &UpdateBookInstance) -> AppResult<BookInstanceRow> {
        if data.is_empty() {
            return self.instances_get_by_id(id).await;
        }

        let mut sets: Vec<String> = Vec::new();
        let mut idx = 1;

        macro_rules! add_field {
            ($field:expr, $name:expr) => {
                if $field.is_some() {
                    sets.push(format!("{} = ${}", $name, idx));
                    idx += 1;
                }
            };
        }

        add_field!(data.imprint, "imprint");
        add_field!(data.due_back, "due_back");
        add_field!(data.status, "status");
        add_field!(data.borrower_id, "borrower_id");

        let query = format!("UPDATE book_instances SET {} WHERE id = ${}", sets.join(", "), idx);

        let mut builder = sqlx::query(&query);

        macro_rules! bind_field {
            ($field:expr) => {
                if let Some(ref val) = $field {
                    builder = builder.bind(val);
                }
            };
        }

        bind_field!(data.imprint);
        bind_field!(data.due_back);
        bind_field!(data.status);
        bind_field!(data.borrower_id);

        let result = builder
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::from_constraint(e, "Book copy"))?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book copy {} not found", id)));
        }

        self.instances_get_by_id(id).await
    }

    pub async fn instances_delete(&self, id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM book_instances WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Book copy {} not found", id)));
        }
        Ok(())
    }
}
