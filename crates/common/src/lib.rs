//! Shared pieces used by every crate in the workspace: tracing setup and
//! small JSON wire types.

pub mod types;
pub mod utils;
