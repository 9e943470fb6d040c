//! Business logic services

pub mod records;

use crate::repository::Repository;

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub records: records::RecordsService,
    repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository) -> Self {
        Self {
            records: records::RecordsService::new(repository.clone()),
            repository,
        }
    }

    /// Store connectivity probe backing the readiness endpoint
    pub async fn ping_store(&self) -> crate::error::AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.repository.pool).await?;
        Ok(())
    }
}
