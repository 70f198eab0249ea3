//! Business logic services

pub mod catalog;
pub mod dashboard;
pub mod instances;
pub mod pagination;

use crate::{config::CatalogConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub repository: Repository,
    pub catalog: catalog::CatalogService,
    pub instances: instances::InstancesService,
    pub dashboard: dashboard::DashboardService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, catalog_config: CatalogConfig) -> Self {
        let paginator = pagination::Paginator::new(catalog_config.per_page);
        Self {
            catalog: catalog::CatalogService::new(repository.clone(), paginator),
            instances: instances::InstancesService::new(repository.clone()),
            dashboard: dashboard::DashboardService::new(repository.clone(), catalog_config.dashboard_keyword),
            repository,
        }
    }
}
