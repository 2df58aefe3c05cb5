use std::sync::Arc;

use crate::domain::auth::entities::User;
use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::SessionToken;

/// Use case for resolving the authenticated user behind a bearer token.
///
/// Returns the full domain `User` so the route guard can consult the role
/// policy and handlers get an explicit request-scoped identity.
pub struct GetCurrentUserUseCase {
  auth_service: Arc<AuthService>,
}

impl GetCurrentUserUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// # Errors
  /// Returns `AuthError::InvalidSession` if the token is invalid or expired.
  pub async fn execute(&self, session_token: String) -> Result<User, AuthError> {
    let token = SessionToken::from_string(session_token)?;

    self.auth_service.validate_session(token).await
  }
}
