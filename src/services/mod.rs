pub mod mastery;
pub mod practice;
pub mod progress;
pub mod vocabulary_expansion;
pub mod word_lists;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("{0} not found")]
    NotFound(String),
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error(transparent)]
    Persistence(#[from] PersistenceFailure),
}

#[derive(Debug, Error)]
pub enum PersistenceFailure {
    #[error("storage error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<sqlx::Error> for CoreError {
    fn from(err: sqlx::Error) -> Self {
        CoreError::Persistence(PersistenceFailure::Database(err))
    }
}
