use std::sync::Arc;
use uuid::Uuid;

use crate::domain::candidature::entities::Candidature;
use crate::domain::candidature::errors::CandidatureError;
use crate::domain::candidature::services::CandidatureService;

/// Command for submitting a candidature. The user id comes from the
/// request-scoped authenticated identity, never from the request body.
#[derive(Debug, Clone, Copy)]
pub struct SubmitCandidatureCommand {
  pub user_id: Uuid,
  pub formation_id: Uuid,
}

/// Use case for applying to a formation
pub struct SubmitCandidatureUseCase {
  candidature_service: Arc<CandidatureService>,
}

impl SubmitCandidatureUseCase {
  pub fn new(candidature_service: Arc<CandidatureService>) -> Self {
    Self { candidature_service }
  }

  /// # Errors
  /// Returns `CandidatureError::FormationNotFound` if the formation does not
  /// exist; no candidature row is created in that case.
  pub async fn execute(
    &self,
    command: SubmitCandidatureCommand,
  ) -> Result<Candidature, CandidatureError> {
    self
      .candidature_service
      .submit(command.user_id, command.formation_id)
      .await
  }
}
