use actix_web::{
  HttpResponse,
  error::ResponseError,
  http::{StatusCode, header::ContentType},
};
use std::fmt;

use crate::domain::auth::errors::{AuthError, RepositoryError};
use crate::domain::auth::value_objects::ValueObjectError;
use crate::domain::candidature::errors::CandidatureError;
use crate::domain::formation::errors::FormationError;

use super::dtos::ErrorResponse;

/// API error type that maps domain errors to HTTP responses.
///
/// One taxonomy for every handler; the original's per-handler ad-hoc error
/// serialization (including swallowed exceptions answered with 200) is
/// deliberately not reproduced.
#[derive(Debug)]
pub enum ApiError {
  /// Malformed input (400 Bad Request)
  Validation(String),

  /// Missing, invalid or expired credentials (401 Unauthorized)
  Unauthorized(String),

  /// Authenticated but lacking the required role (403 Forbidden)
  Forbidden(String),

  /// Missing user or formation id (404 Not Found)
  NotFound(String),

  /// Duplicate email (409 Conflict)
  Conflict(String),

  /// Everything else (500 Internal Server Error)
  Internal(String),
}

impl ApiError {
  fn kind(&self) -> &'static str {
    match self {
      ApiError::Validation(_) => "validation_error",
      ApiError::Unauthorized(_) => "unauthorized",
      ApiError::Forbidden(_) => "forbidden",
      ApiError::NotFound(_) => "not_found",
      ApiError::Conflict(_) => "conflict",
      ApiError::Internal(_) => "internal_error",
    }
  }
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ApiError::Validation(msg) => write!(f, "Validation error: {}", msg),
      ApiError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
      ApiError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
      ApiError::NotFound(msg) => write!(f, "Not found: {}", msg),
      ApiError::Conflict(msg) => write!(f, "Conflict: {}", msg),
      ApiError::Internal(msg) => write!(f, "Internal error: {}", msg),
    }
  }
}

impl ResponseError for ApiError {
  fn status_code(&self) -> StatusCode {
    match self {
      ApiError::Validation(_) => StatusCode::BAD_REQUEST,
      ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
      ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Conflict(_) => StatusCode::CONFLICT,
      ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }

  fn error_response(&self) -> HttpResponse {
    let status = self.status_code();

    let message = match self {
      // Internal details are logged, never exposed
      ApiError::Internal(msg) => {
        tracing::error!("Internal error: {}", msg);
        "An internal server error occurred".to_string()
      }
      ApiError::Validation(msg)
      | ApiError::Unauthorized(msg)
      | ApiError::Forbidden(msg)
      | ApiError::NotFound(msg)
      | ApiError::Conflict(msg) => msg.clone(),
    };

    let body = ErrorResponse {
      status_code: status.as_u16(),
      error: self.kind().to_string(),
      message,
    };

    HttpResponse::build(status)
      .content_type(ContentType::json())
      .json(body)
  }
}

/// Convert AuthError to ApiError
impl From<AuthError> for ApiError {
  fn from(error: AuthError) -> Self {
    match error {
      AuthError::InvalidCredentials => {
        ApiError::Unauthorized("Invalid email or password".to_string())
      }
      AuthError::InvalidSession => {
        ApiError::Unauthorized("Invalid or expired session".to_string())
      }
      AuthError::EmailAlreadyExists => {
        ApiError::Conflict("An account with this email already exists".to_string())
      }
      AuthError::UserNotFound => ApiError::NotFound("User not found".to_string()),
      AuthError::ValueObject(ValueObjectError::InvalidToken) => {
        ApiError::Unauthorized("Invalid or missing authorization token".to_string())
      }
      AuthError::ValueObject(err) => ApiError::Validation(err.to_string()),
      AuthError::Repository(err) => match err {
        RepositoryError::NotFound => ApiError::NotFound("User not found".to_string()),
        RepositoryError::DuplicateKey(_) => {
          ApiError::Conflict("An account with this email already exists".to_string())
        }
        _ => ApiError::Internal(err.to_string()),
      },
      AuthError::Hash(err) => ApiError::Internal(err.to_string()),
    }
  }
}

/// Convert FormationError to ApiError
impl From<FormationError> for ApiError {
  fn from(error: FormationError) -> Self {
    match error {
      FormationError::NotFound => ApiError::NotFound("Formation not found".to_string()),
      FormationError::Repository(err) => ApiError::Internal(err.to_string()),
    }
  }
}

/// Convert CandidatureError to ApiError
impl From<CandidatureError> for ApiError {
  fn from(error: CandidatureError) -> Self {
    match error {
      CandidatureError::FormationNotFound => {
        ApiError::NotFound("La formation spécifiée n'a pas été trouvée.".to_string())
      }
      CandidatureError::Repository(err) => ApiError::Internal(err.to_string()),
    }
  }
}

/// Convert validation errors from validator crate
impl From<validator::ValidationErrors> for ApiError {
  fn from(errors: validator::ValidationErrors) -> Self {
    let messages: Vec<String> = errors
      .field_errors()
      .iter()
      .flat_map(|(field, errors)| {
        errors
          .iter()
          .map(|error| {
            error
              .message
              .as_ref()
              .map(|m| m.to_string())
              .unwrap_or_else(|| format!("Invalid field: {}", field))
          })
          .collect::<Vec<_>>()
      })
      .collect();

    ApiError::Validation(messages.join(", "))
  }
}
