use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::{Email, Password};

/// Command for user login
#[derive(Debug, Clone)]
pub struct LoginUserCommand {
  pub email: String,
  pub password: String,
}

/// Response after successful login
#[derive(Debug, Clone)]
pub struct LoginUserResponse {
  pub user_id: Uuid,
  /// The plain bearer token, returned exactly once
  pub access_token: String,
  /// Remaining token lifetime in seconds
  pub expires_in: i64,
}

/// Use case for authenticating a user
pub struct LoginUserUseCase {
  auth_service: Arc<AuthService>,
}

impl LoginUserUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Executes the login use case.
  ///
  /// # Errors
  /// Returns `AuthError::InvalidCredentials` on unknown email or wrong
  /// password; no state changes in that case.
  pub async fn execute(&self, command: LoginUserCommand) -> Result<LoginUserResponse, AuthError> {
    let email = Email::new(command.email)?;
    let password = Password::new(command.password)?;

    let (user, session, token) = self.auth_service.login(email, password).await?;

    Ok(LoginUserResponse {
      user_id: user.id,
      access_token: token.into_inner(),
      expires_in: session.expires_in_seconds(),
    })
  }
}
