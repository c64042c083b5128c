use models::errors::ModelError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("database error: {0}")]
    Db(String),
    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

impl ServiceError {
    /// Caller-side input problems, as opposed to storage failures.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Model(ModelError::Validation(_)))
    }
}
