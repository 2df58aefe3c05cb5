use async_trait::async_trait;

use super::entities::Candidature;
use super::errors::CandidatureError;

#[async_trait]
pub trait CandidatureRepository: Send + Sync {
  /// Inserts one candidature row. Duplicate (user, formation) pairs are
  /// accepted; every submission is its own record.
  async fn create(&self, candidature: Candidature) -> Result<Candidature, CandidatureError>;
}
