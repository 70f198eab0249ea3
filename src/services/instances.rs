//! Book copy service

use chrono::Local;
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::AppResult,
    models::book_instance::{CreateBookInstance, InstanceQuery, InstanceView, UpdateBookInstance},
    repository::Repository,
};

#[derive(Clone)]
pub struct InstancesService {
    repository: Repository,
}

impl InstancesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, filter: &InstanceQuery) -> AppResult<Vec<InstanceView>> {
        let today = Local::now().date_naive();
        let rows = self.repository.instances_list(filter).await?;
        Ok(rows.into_iter().map(|row| InstanceView::new(row, today)).collect())
    }

    pub async fn get(&self, id: Uuid) -> AppResult<InstanceView> {
        let row = self.repository.instances_get_by_id(id).await?;
        Ok(InstanceView::new(row, Local::now().date_naive()))
    }

    pub async fn create(&self, data: &CreateBookInstance) -> AppResult<InstanceView> {
        data.validate()?;
        let row = self.repository.instances_create(data).await?;
        tracing::info!(instance_id = %row.instance.id, status = %row.instance.status, "Book copy created");
        Ok(InstanceView::new(row, Local::now().date_naive()))
    }

    pub async fn update(&self, id: Uuid, data: &UpdateBookInstance) -> AppResult<InstanceView> {
        data.validate()?;
        let row = self.repository.instances_update(id, data).await?;
        if let Some(status) = data.status {
            tracing::info!(instance_id = %id, %status, "Book copy status changed");
        }
        Ok(InstanceView::new(row, Local::now().date_naive()))
    }

    pub async fn delete(&self, id: Uuid) -> AppResult<()> {
        self.repository.instances_delete(id).await?;
        tracing::info!(instance_id = %id, "Book copy deleted");
        Ok(())
    }
}
