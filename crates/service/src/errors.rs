use models::errors::ModelError;
use models::validation::ValidationError;
use sea_orm::{DbErr, TransactionError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("company {0} not found")]
    NotFound(i32),
    #[error("database error: {0}")]
    Db(String),
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(v) => Self::Validation(v),
            ModelError::Db(msg) => Self::Db(msg),
        }
    }
}

impl From<DbErr> for ServiceError {
    fn from(e: DbErr) -> Self {
        Self::Db(e.to_string())
    }
}

impl From<TransactionError<ServiceError>> for ServiceError {
    fn from(e: TransactionError<ServiceError>) -> Self {
        match e {
            TransactionError::Connection(db) => db.into(),
            TransactionError::Transaction(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use models::validation::FieldError;

    #[test]
    fn transaction_error_unwraps_inner() {
        let e: ServiceError = TransactionError::Transaction(ServiceError::NotFound(3)).into();
        assert!(matches!(e, ServiceError::NotFound(3)));
    }

    #[test]
    fn connection_error_becomes_db() {
        let e: ServiceError =
            TransactionError::<ServiceError>::Connection(DbErr::Custom("boom".into())).into();
        assert!(matches!(e, ServiceError::Db(msg) if msg.contains("boom")));
    }

    #[test]
    fn model_validation_is_preserved() {
        let v = ValidationError::single(FieldError::missing("name"));
        let e: ServiceError = ModelError::Validation(v.clone()).into();
        assert!(matches!(e, ServiceError::Validation(got) if got == v));
    }
}
