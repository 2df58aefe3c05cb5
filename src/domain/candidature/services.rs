use std::sync::Arc;
use uuid::Uuid;

use super::entities::Candidature;
use super::errors::CandidatureError;
use super::ports::CandidatureRepository;
use crate::domain::formation::ports::FormationRepository;

/// Candidature service: records applications of authenticated users to
/// catalog formations
pub struct CandidatureService {
  candidature_repo: Arc<dyn CandidatureRepository>,
  formation_repo: Arc<dyn FormationRepository>,
}

impl CandidatureService {
  pub fn new(
    candidature_repo: Arc<dyn CandidatureRepository>,
    formation_repo: Arc<dyn FormationRepository>,
  ) -> Self {
    Self {
      candidature_repo,
      formation_repo,
    }
  }

  /// Submits an application of `user_id` to `formation_id`.
  ///
  /// The formation must exist at submission time; nothing prevents the same
  /// user from applying to the same formation twice (each call inserts a
  /// fresh row).
  ///
  /// # Errors
  /// Returns `CandidatureError::FormationNotFound` if the formation does not
  /// exist; no row is created in that case.
  pub async fn submit(
    &self,
    user_id: Uuid,
    formation_id: Uuid,
  ) -> Result<Candidature, CandidatureError> {
    let formation = self
      .formation_repo
      .find_by_id(formation_id)
      .await
      .map_err(CandidatureError::from)?
      .ok_or(CandidatureError::FormationNotFound)?;

    let candidature = Candidature::new(user_id, formation.id);

    self.candidature_repo.create(candidature).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::formation::entities::Formation;
  use crate::domain::formation::errors::FormationError;
  use async_trait::async_trait;
  use std::sync::Mutex;

  struct InMemoryCandidatureRepo {
    candidatures: Mutex<Vec<Candidature>>,
  }

  impl InMemoryCandidatureRepo {
    fn new() -> Self {
      Self {
        candidatures: Mutex::new(Vec::new()),
      }
    }
  }

  #[async_trait]
  impl CandidatureRepository for InMemoryCandidatureRepo {
    async fn create(&self, candidature: Candidature) -> Result<Candidature, CandidatureError> {
      self.candidatures.lock().unwrap().push(candidature.clone());
      Ok(candidature)
    }
  }

  struct InMemoryFormationRepo {
    formations: Mutex<Vec<Formation>>,
  }

  #[async_trait]
  impl FormationRepository for InMemoryFormationRepo {
    async fn create(&self, formation: Formation) -> Result<Formation, FormationError> {
      self.formations.lock().unwrap().push(formation.clone());
      Ok(formation)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Formation>, FormationError> {
      Ok(
        self
          .formations
          .lock()
          .unwrap()
          .iter()
          .find(|f| f.id == id)
          .cloned(),
      )
    }

    async fn list(&self) -> Result<Vec<Formation>, FormationError> {
      Ok(self.formations.lock().unwrap().clone())
    }

    async fn update(&self, formation: Formation) -> Result<Formation, FormationError> {
      Ok(formation)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Formation>, FormationError> {
      let mut formations = self.formations.lock().unwrap();
      match formations.iter().position(|f| f.id == id) {
        Some(index) => Ok(Some(formations.remove(index))),
        None => Ok(None),
      }
    }
  }

  fn setup() -> (CandidatureService, Arc<InMemoryCandidatureRepo>, Formation) {
    let candidature_repo = Arc::new(InMemoryCandidatureRepo::new());
    let formation = Formation::new("Rust avancé".to_string(), "Ownership".to_string(), 40);
    let formation_repo = Arc::new(InMemoryFormationRepo {
      formations: Mutex::new(vec![formation.clone()]),
    });
    let service = CandidatureService::new(candidature_repo.clone(), formation_repo);
    (service, candidature_repo, formation)
  }

  #[tokio::test]
  async fn test_submit_links_user_and_formation() {
    let (service, _, formation) = setup();
    let user_id = Uuid::new_v4();

    let candidature = service.submit(user_id, formation.id).await.unwrap();

    assert_eq!(candidature.user_id, user_id);
    assert_eq!(candidature.formation_id, formation.id);
  }

  #[tokio::test]
  async fn test_submit_unknown_formation_creates_nothing() {
    let (service, repo, _) = setup();

    let result = service.submit(Uuid::new_v4(), Uuid::new_v4()).await;

    assert!(matches!(result, Err(CandidatureError::FormationNotFound)));
    assert!(repo.candidatures.lock().unwrap().is_empty());
  }

  #[tokio::test]
  async fn test_submit_twice_records_two_rows() {
    let (service, repo, formation) = setup();
    let user_id = Uuid::new_v4();

    // No uniqueness constraint over (user, formation): both submissions land
    service.submit(user_id, formation.id).await.unwrap();
    service.submit(user_id, formation.id).await.unwrap();

    assert_eq!(repo.candidatures.lock().unwrap().len(), 2);
  }
}
