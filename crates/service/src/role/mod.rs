//! Role persistence seam and the service built on it.

pub mod repository;
pub mod service;

pub use repository::{RoleRepository, SeaOrmRoleRepository};
pub use service::RoleService;
