use thiserror::Error;

use crate::domain::auth::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum FormationError {
  #[error("Formation not found")]
  NotFound,

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),
}

impl From<sqlx::Error> for FormationError {
  fn from(error: sqlx::Error) -> Self {
    FormationError::Repository(RepositoryError::from(error))
  }
}
