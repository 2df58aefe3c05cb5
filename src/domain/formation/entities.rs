use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Formation entity: one training-course offering in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Formation {
  pub id: Uuid,
  /// Short display name of the course
  pub label: String,
  pub description: String,
  /// Total course length in hours
  pub duration_hours: i32,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl Formation {
  /// Create new formation (for creation)
  pub fn new(label: String, description: String, duration_hours: i32) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      label,
      description,
      duration_hours,
      created_at: now,
      updated_at: now,
    }
  }

  /// Reconstruct from database
  pub fn from_db(
    id: Uuid,
    label: String,
    description: String,
    duration_hours: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      label,
      description,
      duration_hours,
      created_at,
      updated_at,
    }
  }

  /// Replace the catalog fields
  pub fn update(&mut self, label: String, description: String, duration_hours: i32) {
    self.label = label;
    self.description = description;
    self.duration_hours = duration_hours;
    self.updated_at = Utc::now();
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_update_replaces_fields() {
    let mut formation = Formation::new(
      "Rust avancé".to_string(),
      "Ownership, traits, async".to_string(),
      40,
    );
    let created_at = formation.created_at;

    formation.update(
      "Rust expert".to_string(),
      "Unsafe, macros, FFI".to_string(),
      60,
    );

    assert_eq!(formation.label, "Rust expert");
    assert_eq!(formation.duration_hours, 60);
    assert_eq!(formation.created_at, created_at);
    assert!(formation.updated_at >= created_at);
  }
}
