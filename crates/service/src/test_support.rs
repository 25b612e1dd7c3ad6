#![cfg(test)]
use configs::DatabaseConfig;
use sea_orm::DatabaseConnection;
use models::db::connect_and_migrate;

/// A private, migrated in-memory database for the calling test.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    connect_and_migrate(&DatabaseConfig::in_memory()).await
}
