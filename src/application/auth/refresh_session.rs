use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::SessionToken;

/// Response after a successful token rotation
#[derive(Debug, Clone)]
pub struct RefreshSessionResponse {
  pub user_id: Uuid,
  /// The fresh bearer token; the presented one is now invalid
  pub access_token: String,
  /// Lifetime of the fresh token in seconds
  pub expires_in: i64,
}

/// Use case for rotating a session token
pub struct RefreshSessionUseCase {
  auth_service: Arc<AuthService>,
}

impl RefreshSessionUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// # Errors
  /// Returns `AuthError::InvalidSession` if the presented token is unknown
  /// or expired.
  pub async fn execute(&self, session_token: String) -> Result<RefreshSessionResponse, AuthError> {
    let token = SessionToken::from_string(session_token)?;

    let (user, session, new_token) = self.auth_service.refresh(token).await?;

    Ok(RefreshSessionResponse {
      user_id: user.id,
      access_token: new_token.into_inner(),
      expires_in: session.expires_in_seconds(),
    })
  }
}
