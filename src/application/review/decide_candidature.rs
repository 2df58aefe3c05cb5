use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::entities::User;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::ReviewService;
use crate::domain::auth::value_objects::Decision;

/// Command for an admin decision on a candidate
#[derive(Debug, Clone, Copy)]
pub struct DecideCandidatureCommand {
  pub user_id: Uuid,
  pub decision: Decision,
}

/// Use case for accepting or refusing a candidature
pub struct DecideCandidatureUseCase {
  review_service: Arc<ReviewService>,
}

impl DecideCandidatureUseCase {
  pub fn new(review_service: Arc<ReviewService>) -> Self {
    Self { review_service }
  }

  /// Executes the decision, returning the updated user.
  ///
  /// # Errors
  /// Returns `AuthError::UserNotFound` if `user_id` does not exist.
  pub async fn execute(&self, command: DecideCandidatureCommand) -> Result<User, AuthError> {
    self
      .review_service
      .decide(command.user_id, command.decision)
      .await
  }
}
