//! Storage-facing types for the company service: the `companies` entity, the
//! create-input and full representations, request-body validation and the
//! database client constructor.

pub mod errors;
pub mod db;
pub mod validation;
pub mod company;

#[cfg(test)]
mod tests;
