//! Storage operations on the `companies` table.
//!
//! Each function takes any [`ConnectionTrait`], so callers decide the session
//! scope; [`crate::company::repository::SeaOrmCompanyRepository`] runs every
//! call inside its own transaction.

use sea_orm::{ConnectionTrait, EntityTrait, QueryOrder};
use models::company::{self, Company, Entity as CompanyEntity, NewCompany};
use crate::errors::ServiceError;

/// List all companies in ascending id order.
pub async fn list_companies<C: ConnectionTrait>(db: &C) -> Result<Vec<Company>, ServiceError> {
    let rows = CompanyEntity::find()
        .order_by_asc(company::Column::Id)
        .all(db)
        .await?;
    Ok(rows.into_iter().map(Company::from).collect())
}

pub async fn create_company<C: ConnectionTrait>(db: &C, input: NewCompany) -> Result<Company, ServiceError> {
    let created = company::create(db, input).await?;
    Ok(created.into())
}

pub async fn get_company<C: ConnectionTrait>(db: &C, id: i32) -> Result<Company, ServiceError> {
    let found = CompanyEntity::find_by_id(id).one(db).await?;
    found.map(Company::from).ok_or(ServiceError::NotFound(id))
}

/// Replace name, location and employee_number of an existing company.
pub async fn update_company<C: ConnectionTrait>(db: &C, id: i32, input: NewCompany) -> Result<Company, ServiceError> {
    let updated = company::overwrite(db, id, input).await?;
    updated.map(Company::from).ok_or(ServiceError::NotFound(id))
}

/// Delete a company and return the record as it was before removal.
pub async fn delete_company<C: ConnectionTrait>(db: &C, id: i32) -> Result<Company, ServiceError> {
    let removed = company::remove(db, id).await?;
    removed.map(Company::from).ok_or(ServiceError::NotFound(id))
}

/// Delete every company; returns the number of rows removed.
pub async fn delete_all_companies<C: ConnectionTrait>(db: &C) -> Result<u64, ServiceError> {
    let res = CompanyEntity::delete_many().exec(db).await?;
    Ok(res.rows_affected)
}
