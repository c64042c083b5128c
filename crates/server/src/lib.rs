pub mod errors;
pub mod openapi;
pub mod reply;
pub mod routes;
pub mod startup;
pub mod state;

pub use startup::run;
#[cfg(test)]
mod test_support;
