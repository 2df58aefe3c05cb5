use thiserror::Error;

use crate::domain::auth::errors::RepositoryError;

#[derive(Debug, Error)]
pub enum CandidatureError {
  #[error("Formation not found")]
  FormationNotFound,

  #[error("Repository error: {0}")]
  Repository(#[from] RepositoryError),
}

impl From<sqlx::Error> for CandidatureError {
  fn from(error: sqlx::Error) -> Self {
    CandidatureError::Repository(RepositoryError::from(error))
  }
}

impl From<crate::domain::formation::FormationError> for CandidatureError {
  fn from(error: crate::domain::formation::FormationError) -> Self {
    match error {
      crate::domain::formation::FormationError::NotFound => CandidatureError::FormationNotFound,
      crate::domain::formation::FormationError::Repository(e) => CandidatureError::Repository(e),
    }
  }
}
