use std::sync::Arc;
use uuid::Uuid;

use super::entities::Formation;
use super::errors::FormationError;
use super::ports::FormationRepository;

/// Catalog service: CRUD over formation records. All mutations are
/// admin-gated at the HTTP boundary; the service itself carries no
/// permission logic.
pub struct FormationService {
  formation_repo: Arc<dyn FormationRepository>,
}

impl FormationService {
  pub fn new(formation_repo: Arc<dyn FormationRepository>) -> Self {
    Self { formation_repo }
  }

  /// Create a new catalog entry
  pub async fn create(
    &self,
    label: String,
    description: String,
    duration_hours: i32,
  ) -> Result<Formation, FormationError> {
    let formation = Formation::new(label, description, duration_hours);
    self.formation_repo.create(formation).await
  }

  /// List the whole catalog
  pub async fn list(&self) -> Result<Vec<Formation>, FormationError> {
    self.formation_repo.list().await
  }

  /// Update an existing catalog entry.
  ///
  /// # Errors
  /// Returns `FormationError::NotFound` if `id` does not exist.
  pub async fn update(
    &self,
    id: Uuid,
    label: String,
    description: String,
    duration_hours: i32,
  ) -> Result<Formation, FormationError> {
    let mut formation = self
      .formation_repo
      .find_by_id(id)
      .await?
      .ok_or(FormationError::NotFound)?;

    formation.update(label, description, duration_hours);

    self.formation_repo.update(formation).await
  }

  /// Delete a catalog entry, returning the removed record.
  ///
  /// Candidatures referencing the formation are not cascaded; they keep
  /// their dangling formation_id.
  ///
  /// # Errors
  /// Returns `FormationError::NotFound` if `id` does not exist.
  pub async fn delete(&self, id: Uuid) -> Result<Formation, FormationError> {
    self
      .formation_repo
      .delete(id)
      .await?
      .ok_or(FormationError::NotFound)
  }
}
