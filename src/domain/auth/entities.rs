use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::{CandidateStatus, Role};

/// User entity: a registered account, candidate or admin
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
  /// Unique identifier for the user
  pub id: Uuid,
  /// User's full name
  pub name: String,
  /// User's phone number
  pub phone: String,
  /// User's email address (unique)
  pub email: String,
  /// Hashed password using Argon2
  #[serde(skip_serializing)]
  pub password_hash: String,
  /// Access tier (user or admin)
  pub role: Role,
  /// Review state of the candidature (pending, accepted or refused)
  pub status: CandidateStatus,
  /// Timestamp when the user was created
  pub created_at: DateTime<Utc>,
  /// Timestamp when the user was last updated
  pub updated_at: DateTime<Utc>,
}

impl User {
  /// Creates a new candidate account: `role = user`, `status = pending`
  pub fn register(name: String, phone: String, email: String, password_hash: String) -> Self {
    let now = Utc::now();
    Self {
      id: Uuid::new_v4(),
      name,
      phone,
      email,
      password_hash,
      role: Role::User,
      status: CandidateStatus::Pending,
      created_at: now,
      updated_at: now,
    }
  }

  /// Creates a user from database fields (for reconstruction)
  #[allow(clippy::too_many_arguments)]
  pub fn from_db(
    id: Uuid,
    name: String,
    phone: String,
    email: String,
    password_hash: String,
    role: Role,
    status: CandidateStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      name,
      phone,
      email,
      password_hash,
      role,
      status,
      created_at,
      updated_at,
    }
  }

  /// Overwrites the review status. Intentionally no transition guard: an
  /// already-decided account is silently re-decided, matching the exposed
  /// review workflow.
  pub fn set_status(&mut self, status: CandidateStatus) {
    self.status = status;
    self.updated_at = Utc::now();
  }

  /// Whether this account is a candidate (as opposed to an admin)
  pub fn is_candidate(&self) -> bool {
    self.role == Role::User
  }
}

/// Session entity backing one bearer token. Only the SHA-256 hash of the
/// token is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
  /// Unique identifier for the session
  pub id: Uuid,
  /// Reference to the user who owns this session
  pub user_id: Uuid,
  /// SHA-256 hash of the opaque session token
  pub token_hash: String,
  /// Timestamp when the session expires
  pub expires_at: DateTime<Utc>,
  /// Timestamp when the session was created
  pub created_at: DateTime<Utc>,
}

impl Session {
  /// Creates a new session for a user
  pub fn new(user_id: Uuid, token_hash: String, expires_at: DateTime<Utc>) -> Self {
    Self {
      id: Uuid::new_v4(),
      user_id,
      token_hash,
      expires_at,
      created_at: Utc::now(),
    }
  }

  /// Creates a session with a duration instead of absolute expiration time
  pub fn with_duration(user_id: Uuid, token_hash: String, duration: Duration) -> Self {
    let expires_at = Utc::now() + duration;
    Self::new(user_id, token_hash, expires_at)
  }

  /// Creates a session from database fields (for reconstruction)
  pub fn from_db(
    id: Uuid,
    user_id: Uuid,
    token_hash: String,
    expires_at: DateTime<Utc>,
    created_at: DateTime<Utc>,
  ) -> Self {
    Self {
      id,
      user_id,
      token_hash,
      expires_at,
      created_at,
    }
  }

  /// Checks if the session has expired
  pub fn is_expired(&self) -> bool {
    self.expires_at <= Utc::now()
  }

  /// Remaining lifetime in whole seconds, clamped at zero
  pub fn expires_in_seconds(&self) -> i64 {
    (self.expires_at - Utc::now()).num_seconds().max(0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use chrono::Duration;

  #[test]
  fn test_register_starts_pending_user() {
    let user = User::register(
      "Awa Diallo".to_string(),
      "+221770000000".to_string(),
      "awa@example.com".to_string(),
      "hashed_password".to_string(),
    );

    assert_eq!(user.role, Role::User);
    assert_eq!(user.status, CandidateStatus::Pending);
    assert!(user.is_candidate());
  }

  #[test]
  fn test_set_status_overwrites_silently() {
    let mut user = User::register(
      "Awa Diallo".to_string(),
      "+221770000000".to_string(),
      "awa@example.com".to_string(),
      "hashed_password".to_string(),
    );

    user.set_status(CandidateStatus::Accepted);
    assert_eq!(user.status, CandidateStatus::Accepted);

    // Re-deciding an already-decided account just overwrites
    user.set_status(CandidateStatus::Refused);
    assert_eq!(user.status, CandidateStatus::Refused);
  }

  #[test]
  fn test_password_hash_not_serialized() {
    let user = User::register(
      "Awa Diallo".to_string(),
      "+221770000000".to_string(),
      "awa@example.com".to_string(),
      "hashed_password".to_string(),
    );

    let json = serde_json::to_value(&user).unwrap();
    assert!(json.get("password_hash").is_none());
    assert_eq!(json["status"], "pending");
    assert_eq!(json["role"], "user");
  }

  #[test]
  fn test_session_expiration() {
    let user_id = Uuid::new_v4();
    let live = Session::with_duration(user_id, "hash".to_string(), Duration::hours(1));
    assert!(!live.is_expired());
    assert!(live.expires_in_seconds() > 0);

    let expired = Session::new(user_id, "hash".to_string(), Utc::now() - Duration::seconds(10));
    assert!(expired.is_expired());
    assert_eq!(expired.expires_in_seconds(), 0);
  }
}
