use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::auth::entities::User;
use crate::domain::auth::value_objects::{CandidateStatus, Role};
use crate::domain::candidature::entities::Candidature;
use crate::domain::formation::entities::Formation;

// Every success body mirrors the HTTP status in a `status_code` field; the
// original API exposed that convention and clients depend on it.

/// Request for user login
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
  #[validate(email(message = "Invalid email format"))]
  pub email: String,

  #[validate(length(min = 1, message = "Password is required"))]
  pub password: String,
}

/// Request for candidate registration (POST /user/inscription)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InscriptionRequest {
  #[validate(length(min = 1, max = 255, message = "Name must be between 1 and 255 characters"))]
  pub name: String,

  #[validate(length(min = 6, max = 30, message = "Phone must be between 6 and 30 characters"))]
  pub phone: String,

  #[validate(email(message = "Invalid email format"))]
  pub email: String,

  #[validate(length(
    min = 8,
    max = 128,
    message = "Password must be between 8 and 128 characters"
  ))]
  pub password: String,
}

/// Request for creating or editing a formation
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct FormationRequest {
  #[validate(length(min = 1, max = 255, message = "Label must be between 1 and 255 characters"))]
  pub label: String,

  #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
  pub description: String,

  #[validate(range(min = 1, message = "Duration must be at least one hour"))]
  pub duration_hours: i32,
}

/// Request for submitting a candidature
#[derive(Debug, Clone, Deserialize)]
pub struct CandidaterRequest {
  pub formation_id: Uuid,
}

/// Bearer token payload returned by /login and /refresh
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
  pub access_token: String,
  pub token_type: String,
  pub expires_in: i64,
}

impl TokenResponse {
  pub fn bearer(access_token: String, expires_in: i64) -> Self {
    Self {
      access_token,
      token_type: "bearer".to_string(),
      expires_in,
    }
  }
}

/// Response after successful registration
#[derive(Debug, Clone, Serialize)]
pub struct InscriptionResponse {
  pub status_code: u16,
  pub status_message: String,
}

/// Standard success response for operations without data
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
  pub message: String,
}

/// Public view of a user; the password hash never leaves the backend
#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
  pub id: Uuid,
  pub name: String,
  pub phone: String,
  pub email: String,
  pub role: Role,
  pub status: CandidateStatus,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl From<User> for UserDto {
  fn from(user: User) -> Self {
    Self {
      id: user.id,
      name: user.name,
      phone: user.phone,
      email: user.email,
      role: user.role,
      status: user.status,
      created_at: user.created_at,
      updated_at: user.updated_at,
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct FormationDto {
  pub id: Uuid,
  pub label: String,
  pub description: String,
  pub duration_hours: i32,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

impl From<Formation> for FormationDto {
  fn from(formation: Formation) -> Self {
    Self {
      id: formation.id,
      label: formation.label,
      description: formation.description,
      duration_hours: formation.duration_hours,
      created_at: formation.created_at,
      updated_at: formation.updated_at,
    }
  }
}

#[derive(Debug, Clone, Serialize)]
pub struct CandidatureDto {
  pub id: Uuid,
  pub user_id: Uuid,
  pub formation_id: Uuid,
  pub created_at: DateTime<Utc>,
}

impl From<Candidature> for CandidatureDto {
  fn from(candidature: Candidature) -> Self {
    Self {
      id: candidature.id,
      user_id: candidature.user_id,
      formation_id: candidature.formation_id,
      created_at: candidature.created_at,
    }
  }
}

/// GET /formations/liste
#[derive(Debug, Clone, Serialize)]
pub struct FormationListResponse {
  pub status_code: u16,
  pub status_message: String,
  pub formations: Vec<FormationDto>,
}

/// Formation mutation responses. The original API keyed the single record
/// under `formations` (plural); preserved for compatibility.
#[derive(Debug, Clone, Serialize)]
pub struct FormationResponse {
  pub status_code: u16,
  pub status_message: String,
  pub formations: FormationDto,
}

/// POST /candidater
#[derive(Debug, Clone, Serialize)]
pub struct CandidatureResponse {
  pub status_code: u16,
  pub status_message: String,
  pub candidature: CandidatureDto,
}

/// GET /user/listesAccepter
#[derive(Debug, Clone, Serialize)]
pub struct AcceptedListResponse {
  pub status_code: u16,
  pub status_message: String,
  pub listes_accepter: Vec<UserDto>,
}

/// GET /user/listesNonAccepter
#[derive(Debug, Clone, Serialize)]
pub struct RefusedListResponse {
  pub status_code: u16,
  pub status_message: String,
  pub listes_non_accepter: Vec<UserDto>,
}

/// GET /listesUser
#[derive(Debug, Clone, Serialize)]
pub struct UsersListResponse {
  pub status_code: u16,
  pub status_message: String,
  pub listes_users: Vec<UserDto>,
}

/// PUT /accepter/{id} and /refuser/{id}
#[derive(Debug, Clone, Serialize)]
pub struct DecisionResponse {
  pub status_code: u16,
  pub status_message: String,
  pub candidat: UserDto,
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
  pub status_code: u16,
  pub error: String,
  pub message: String,
}

#[cfg(test)]
mod tests {
  use super::*;
  use validator::Validate;

  #[test]
  fn test_inscription_request_validation() {
    let valid = InscriptionRequest {
      name: "Awa Diallo".to_string(),
      phone: "+221770000000".to_string(),
      email: "awa@example.com".to_string(),
      password: "candidate_pw_1".to_string(),
    };
    assert!(valid.validate().is_ok());

    let bad_email = InscriptionRequest {
      email: "not-an-email".to_string(),
      ..valid.clone()
    };
    assert!(bad_email.validate().is_err());

    let short_password = InscriptionRequest {
      password: "short".to_string(),
      ..valid
    };
    assert!(short_password.validate().is_err());
  }

  #[test]
  fn test_formation_request_validation() {
    let valid = FormationRequest {
      label: "Rust avancé".to_string(),
      description: "Ownership, traits, async".to_string(),
      duration_hours: 40,
    };
    assert!(valid.validate().is_ok());

    let zero_hours = FormationRequest {
      duration_hours: 0,
      ..valid
    };
    assert!(zero_hours.validate().is_err());
  }

  #[test]
  fn test_token_response_shape() {
    let response = TokenResponse::bearer("abc123".to_string(), 3600);
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["access_token"], "abc123");
    assert_eq!(json["token_type"], "bearer");
    assert_eq!(json["expires_in"], 3600);
  }

  #[test]
  fn test_user_dto_omits_password_hash() {
    let user = User::register(
      "Awa Diallo".to_string(),
      "+221770000000".to_string(),
      "awa@example.com".to_string(),
      "$argon2id$fake".to_string(),
    );

    let json = serde_json::to_value(UserDto::from(user)).unwrap();
    assert!(json.get("password_hash").is_none());
    assert_eq!(json["role"], "user");
    assert_eq!(json["status"], "pending");
  }

  #[test]
  fn test_listing_bodies_carry_status_code() {
    let response = UsersListResponse {
      status_code: 200,
      status_message: "Listes des candidats".to_string(),
      listes_users: vec![],
    };
    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["status_code"], 200);
    assert!(json["listes_users"].as_array().unwrap().is_empty());
  }
}
