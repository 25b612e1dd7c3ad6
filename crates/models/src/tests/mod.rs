/// Database connection and schema tests
pub mod db_tests;



use sea_orm::DatabaseConnection;

/// Fresh in-memory database with migrations applied.
pub(crate) async fn setup_test_db() -> anyhow::Result<DatabaseConnection> {
    let cfg = configs::DatabaseConfig::in_memory();
    crate::db::connect_and_migrate(&cfg).await
}

pub(crate) fn acme() -> crate::company::NewCompany {
    crate::company::NewCompany {
        name: "Acme".into(),
        location: "NYC".into(),
        employee_number: 10,
    }
}
