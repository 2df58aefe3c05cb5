use std::sync::Arc;

use crate::domain::auth::entities::User;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::ReviewService;
use crate::domain::auth::value_objects::CandidateStatus;

/// Which slice of the candidate pool to list
#[derive(Debug, Clone, Copy)]
pub enum CandidateFilter {
  /// Every account with `role = user`, regardless of status
  All,
  /// Only candidates in the given review state
  ByStatus(CandidateStatus),
}

/// Use case for the candidate listings (all, accepted, refused)
pub struct ListCandidatesUseCase {
  review_service: Arc<ReviewService>,
}

impl ListCandidatesUseCase {
  pub fn new(review_service: Arc<ReviewService>) -> Self {
    Self { review_service }
  }

  /// Returns matching candidates in no guaranteed order
  pub async fn execute(&self, filter: CandidateFilter) -> Result<Vec<User>, AuthError> {
    match filter {
      CandidateFilter::All => self.review_service.list_candidates().await,
      CandidateFilter::ByStatus(status) => self.review_service.list_by_status(status).await,
    }
  }
}
