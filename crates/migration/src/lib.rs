//! Migrator for the company store.
//! `Migrator::up` records applied migrations in `seaql_migrations`, so running it
//! against an initialized database is a no-op.
pub use sea_orm_migration::prelude::*;

mod m20220101_000001_create_companies;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20220101_000001_create_companies::Migration)]
    }
}
