use crate::db::{connect_with_config, test_connection};
use configs::DatabaseConfig;
use migration::MigratorTrait;
use sea_orm::{ConnectionTrait, DatabaseBackend, Statement};
use anyhow::Result;

use super::setup_test_db;

/// Test basic database connection
#[tokio::test]
async fn test_basic_connection() -> Result<()> {
    let db = connect_with_config(&DatabaseConfig::in_memory()).await?;
    test_connection(&db).await?;

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, "SELECT 1 as test".to_string());
    let row = db.query_one(stmt).await?.expect("one row");
    let test_value: i32 = row.try_get("", "test")?;
    assert_eq!(test_value, 1);
    Ok(())
}

/// Migrations create the companies table
#[tokio::test]
async fn test_migration_creates_companies_table() -> Result<()> {
    let db = setup_test_db().await?;
    let stmt = Statement::from_string(
        DatabaseBackend::Sqlite,
        "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'companies'".to_string(),
    );
    assert!(db.query_one(stmt).await?.is_some());
    Ok(())
}

/// Applying migrations to an initialized store is a no-op
#[tokio::test]
async fn test_migrations_are_idempotent() -> Result<()> {
    let db = setup_test_db().await?;
    crate::company::create(&db, super::acme()).await?;

    migration::Migrator::up(&db, None).await?;
    assert!(migration::Migrator::get_pending_migrations(&db).await?.is_empty());

    let stmt = Statement::from_string(DatabaseBackend::Sqlite, "SELECT COUNT(*) AS n FROM companies".to_string());
    let row = db.query_one(stmt).await?.expect("one row");
    let n: i64 = row.try_get("", "n")?;
    assert_eq!(n, 1);
    Ok(())
}

/// Pool is closed cleanly
#[tokio::test]
async fn test_close_connection() -> Result<()> {
    let db = setup_test_db().await?;
    db.close().await?;
    Ok(())
}
