use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::company::{CompanyService, SeaOrmCompanyRepository};

/// Router state. Cloned per request; the pool behind it is shared.
#[derive(Clone)]
pub struct ServerState {
    pub companies: CompanyService<SeaOrmCompanyRepository>,
}

impl ServerState {
    pub fn new(db: DatabaseConnection) -> Self {
        let repo = Arc::new(SeaOrmCompanyRepository::new(db));
        Self { companies: CompanyService::new(repo) }
    }
}
