//! Company resource: repository seam plus the application service the HTTP
//! layer talks to.

pub mod repository;
pub mod service;

pub use repository::{CompanyRepository, SeaOrmCompanyRepository};
pub use service::CompanyService;
