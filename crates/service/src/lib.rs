//! Service layer providing CRUD operations on top of models.
//! - Role and user access goes through repository traits so the SQL side can be swapped in tests.
//! - "Not found" is reported as `None`; errors are reserved for failures.

pub mod errors;
pub mod role;
pub mod user;
pub mod unit_service;
pub mod access_log_service;
pub mod services;
#[cfg(test)]
pub mod test_support;

pub use services::Services;
