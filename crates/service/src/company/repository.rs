use std::future::Future;
use std::pin::Pin;

use async_trait::async_trait;
use models::company::{Company, NewCompany};
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::db::company_service;
use crate::errors::ServiceError;

#[async_trait]
pub trait CompanyRepository: Send + Sync {
    async fn list(&self) -> Result<Vec<Company>, ServiceError>;
    async fn create(&self, input: NewCompany) -> Result<Company, ServiceError>;
    async fn get(&self, id: i32) -> Result<Company, ServiceError>;
    async fn update(&self, id: i32, input: NewCompany) -> Result<Company, ServiceError>;
    async fn delete(&self, id: i32) -> Result<Company, ServiceError>;
    async fn delete_all(&self) -> Result<u64, ServiceError>;
}

/// SeaORM-backed repository implementation.
///
/// Every call runs in its own transaction: committed when the operation
/// returns `Ok`, rolled back on `Err`, and rolled back by the transaction's
/// drop guard if the future is cancelled. The pooled connection goes back to
/// the pool on all of those paths.
#[derive(Clone)]
pub struct SeaOrmCompanyRepository {
    db: DatabaseConnection,
}

impl SeaOrmCompanyRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    async fn scoped<T, F>(&self, op: F) -> Result<T, ServiceError>
    where
        F: for<'c> FnOnce(
                &'c DatabaseTransaction,
            ) -> Pin<Box<dyn Future<Output = Result<T, ServiceError>> + Send + 'c>>
            + Send,
        T: Send,
    {
        self.db.transaction(op).await.map_err(ServiceError::from)
    }
}

#[async_trait]
impl CompanyRepository for SeaOrmCompanyRepository {
    async fn list(&self) -> Result<Vec<Company>, ServiceError> {
        self.scoped(|txn| Box::pin(company_service::list_companies(txn))).await
    }

    async fn create(&self, input: NewCompany) -> Result<Company, ServiceError> {
        self.scoped(move |txn| Box::pin(company_service::create_company(txn, input))).await
    }

    async fn get(&self, id: i32) -> Result<Company, ServiceError> {
        self.scoped(move |txn| Box::pin(company_service::get_company(txn, id))).await
    }

    async fn update(&self, id: i32, input: NewCompany) -> Result<Company, ServiceError> {
        self.scoped(move |txn| Box::pin(company_service::update_company(txn, id, input))).await
    }

    async fn delete(&self, id: i32) -> Result<Company, ServiceError> {
        self.scoped(move |txn| Box::pin(company_service::delete_company(txn, id))).await
    }

    async fn delete_all(&self) -> Result<u64, ServiceError> {
        self.scoped(|txn| Box::pin(company_service::delete_all_companies(txn))).await
    }
}
