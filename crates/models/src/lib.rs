pub mod errors;
pub mod db;
pub mod registry;
pub mod role;
pub mod unit;
pub mod user;
pub mod user_access_log;

pub use registry::ModelRegistry;
