use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Candidature entity: one application of a user to a formation, recorded at
/// submission time. There is no uniqueness constraint over
/// (user_id, formation_id): applying twice to the same formation produces
/// two rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidature {
  pub id: Uuid,
  pub user_id: Uuid,
  pub formation_id: Uuid,
  pub created_at: DateTime<Utc>,
}

impl Candidature {
  /// Create new candidature (for submission)
  pub fn new(user_id: Uuid, formation_id: Uuid) -> Self {
    Self {
      id: Uuid::new_v4(),
      user_id,
      formation_id,
      created_at: Utc::now(),
    }
  }

  /// Reconstruct from database
  pub fn from_db(id: Uuid, user_id: Uuid, formation_id: Uuid, created_at: DateTime<Utc>) -> Self {
    Self {
      id,
      user_id,
      formation_id,
      created_at,
    }
  }
}
