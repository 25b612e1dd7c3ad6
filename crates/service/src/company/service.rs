use std::sync::Arc;

use models::company::{Company, NewCompany};
use tracing::{error, info, instrument};

use crate::company::repository::CompanyRepository;
use crate::errors::ServiceError;

/// Application service for the company resource.
/// Inputs arrive already validated; this layer owns logging and error reporting.
pub struct CompanyService<R: CompanyRepository> {
    repo: Arc<R>,
}

impl<R: CompanyRepository> Clone for CompanyService<R> {
    fn clone(&self) -> Self {
        Self { repo: Arc::clone(&self.repo) }
    }
}

impl<R: CompanyRepository> CompanyService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    pub fn repository(&self) -> &R { &self.repo }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Company>, ServiceError> {
        let list = self.repo.list().await.inspect_err(log_storage_error)?;
        info!(count = list.len(), "listed companies");
        Ok(list)
    }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: NewCompany) -> Result<Company, ServiceError> {
        let created = self.repo.create(input).await.inspect_err(log_storage_error)?;
        info!(id = created.id, "created company");
        Ok(created)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: i32) -> Result<Company, ServiceError> {
        self.repo.get(id).await.inspect_err(log_storage_error)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: i32, input: NewCompany) -> Result<Company, ServiceError> {
        let updated = self.repo.update(id, input).await.inspect_err(log_storage_error)?;
        info!(id = updated.id, "updated company");
        Ok(updated)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: i32) -> Result<Company, ServiceError> {
        let deleted = self.repo.delete(id).await.inspect_err(log_storage_error)?;
        info!(id = deleted.id, "deleted company");
        Ok(deleted)
    }

    #[instrument(skip(self))]
    pub async fn delete_all(&self) -> Result<u64, ServiceError> {
        let removed = self.repo.delete_all().await.inspect_err(log_storage_error)?;
        info!(removed, "deleted all companies");
        Ok(removed)
    }
}

fn log_storage_error(e: &ServiceError) {
    if let ServiceError::Db(msg) = e {
        error!(err = %msg, "company storage operation failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use async_trait::async_trait;

    /// Repository whose storage is permanently unavailable.
    struct FailingRepo {
        calls: Mutex<u32>,
    }

    impl FailingRepo {
        fn fail(&self) -> ServiceError {
            *self.calls.lock().unwrap() += 1;
            ServiceError::Db("connection refused".into())
        }
    }

    #[async_trait]
    impl CompanyRepository for FailingRepo {
        async fn list(&self) -> Result<Vec<Company>, ServiceError> { Err(self.fail()) }
        async fn create(&self, _: NewCompany) -> Result<Company, ServiceError> { Err(self.fail()) }
        async fn get(&self, _: i32) -> Result<Company, ServiceError> { Err(self.fail()) }
        async fn update(&self, _: i32, _: NewCompany) -> Result<Company, ServiceError> { Err(self.fail()) }
        async fn delete(&self, _: i32) -> Result<Company, ServiceError> { Err(self.fail()) }
        async fn delete_all(&self) -> Result<u64, ServiceError> { Err(self.fail()) }
    }

    #[tokio::test]
    async fn storage_errors_surface_without_retry() {
        let svc = CompanyService::new(Arc::new(FailingRepo { calls: Mutex::new(0) }));
        let input = NewCompany { name: "A".into(), location: "B".into(), employee_number: 1 };
        assert!(matches!(svc.create(input).await, Err(ServiceError::Db(_))));
        assert!(matches!(svc.list().await, Err(ServiceError::Db(_))));
        assert_eq!(*svc.repository().calls.lock().unwrap(), 2);
    }

    #[tokio::test]
    async fn service_over_sqlite_repository() -> Result<(), anyhow::Error> {
        let db = crate::test_support::get_db().await?;
        let svc = CompanyService::new(Arc::new(crate::company::SeaOrmCompanyRepository::new(db)));

        let mut created = vec![];
        for n in 1..=3 {
            let input = NewCompany { name: format!("c{n}"), location: "X".into(), employee_number: n };
            created.push(svc.create(input).await?);
        }
        let listed = svc.list().await?;
        assert_eq!(listed.len(), 3);
        for c in &created {
            assert!(listed.contains(c));
        }
        Ok(())
    }
}
