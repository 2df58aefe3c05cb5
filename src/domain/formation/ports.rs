use async_trait::async_trait;
use uuid::Uuid;

use super::entities::Formation;
use super::errors::FormationError;

#[async_trait]
pub trait FormationRepository: Send + Sync {
  async fn create(&self, formation: Formation) -> Result<Formation, FormationError>;

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Formation>, FormationError>;

  /// Lists the whole catalog, in no guaranteed order
  async fn list(&self) -> Result<Vec<Formation>, FormationError>;

  async fn update(&self, formation: Formation) -> Result<Formation, FormationError>;

  /// Deletes a formation, returning the removed row. Existing candidatures
  /// referencing the formation are left untouched.
  async fn delete(&self, id: Uuid) -> Result<Option<Formation>, FormationError>;
}
