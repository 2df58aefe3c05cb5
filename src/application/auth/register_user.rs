use std::sync::Arc;
use uuid::Uuid;

use crate::domain::auth::errors::AuthError;
use crate::domain::auth::services::AuthService;
use crate::domain::auth::value_objects::{CandidateStatus, Email, Password};

/// Command for registering a new candidate account
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
  /// Candidate's full name
  pub name: String,
  /// Candidate's phone number
  pub phone: String,
  /// Candidate's email address
  pub email: String,
  /// Candidate's password (plain text, will be hashed)
  pub password: String,
}

/// Response after successful registration
#[derive(Debug, Clone)]
pub struct RegisterUserResponse {
  /// Unique identifier of the newly created user
  pub user_id: Uuid,
  /// User's email address
  pub email: String,
  /// Review status of the fresh account (always pending)
  pub status: CandidateStatus,
}

/// Use case for registering a new candidate
pub struct RegisterUserUseCase {
  auth_service: Arc<AuthService>,
}

impl RegisterUserUseCase {
  pub fn new(auth_service: Arc<AuthService>) -> Self {
    Self { auth_service }
  }

  /// Executes the registration use case.
  ///
  /// # Errors
  /// Returns `AuthError` if registration fails (e.g., email already exists,
  /// validation errors).
  pub async fn execute(
    &self,
    command: RegisterUserCommand,
  ) -> Result<RegisterUserResponse, AuthError> {
    // Parse and validate at the domain boundary
    let email = Email::new(command.email)?;
    let password = Password::new(command.password)?;

    let user = self
      .auth_service
      .register(command.name, command.phone, email, password)
      .await?;

    Ok(RegisterUserResponse {
      user_id: user.id,
      email: user.email,
      status: user.status,
    })
  }
}
