//! Service layer providing the company CRUD operations on top of `models`.
//! - `db`: storage operations generic over the connection/transaction.
//! - `company`: repository seam with transaction scoping, plus the service.
//! - `errors`: the error type every operation returns.

pub mod errors;
pub mod db;
pub mod company;
#[cfg(test)]
pub mod test_support;
