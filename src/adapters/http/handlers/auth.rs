use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;
use validator::Validate;

use crate::adapters::http::{
  dtos::{InscriptionRequest, InscriptionResponse, LoginRequest, MessageResponse, TokenResponse, UserDto},
  errors::ApiError,
};
use crate::application::auth::{
  LoginUserCommand, LoginUserUseCase, LogoutUserUseCase, RefreshSessionUseCase,
  RegisterUserCommand, RegisterUserUseCase,
};

use super::{extract_session_token, get_user};

/// Handler for user login
///
/// POST /login
/// Body: LoginRequest (JSON)
/// Response: TokenResponse (JSON) with status 200
pub async fn login_handler(
  request: web::Json<LoginRequest>,
  use_case: web::Data<Arc<LoginUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let command = LoginUserCommand {
    email: request.email.clone(),
    password: request.password.clone(),
  };

  let response = use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(TokenResponse::bearer(
    response.access_token,
    response.expires_in,
  )))
}

/// Handler for candidate registration
///
/// POST /user/inscription
/// Body: InscriptionRequest (JSON)
/// Response: InscriptionResponse (JSON) with status 200
pub async fn inscription_handler(
  request: web::Json<InscriptionRequest>,
  use_case: web::Data<Arc<RegisterUserUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let command = RegisterUserCommand {
    name: request.name.clone(),
    phone: request.phone.clone(),
    email: request.email.clone(),
    password: request.password.clone(),
  };

  use_case.execute(command).await?;

  Ok(HttpResponse::Ok().json(InscriptionResponse {
    status_code: 200,
    status_message: "Inscription réussie".to_string(),
  }))
}

/// Handler for the current user profile
///
/// POST /me
/// Headers: Authorization: Bearer <token>
/// Response: UserDto (JSON) with status 200
pub async fn me_handler(http_req: HttpRequest) -> Result<HttpResponse, ApiError> {
  let user = get_user(&http_req)?;

  Ok(HttpResponse::Ok().json(UserDto::from(user)))
}

/// Handler for user logout
///
/// POST /logout
/// Headers: Authorization: Bearer <token>
/// Response: MessageResponse (JSON) with status 200
pub async fn logout_handler(
  use_case: web::Data<Arc<LogoutUserUseCase>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  let session_token = extract_session_token(&http_req)?;

  use_case.execute(session_token).await?;

  Ok(HttpResponse::Ok().json(MessageResponse {
    message: "Successfully logged out".to_string(),
  }))
}

/// Handler for session rotation
///
/// POST /refresh
/// Headers: Authorization: Bearer <token>
/// Response: TokenResponse (JSON) with status 200; the presented token is
/// invalid afterwards
pub async fn refresh_handler(
  use_case: web::Data<Arc<RefreshSessionUseCase>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  let session_token = extract_session_token(&http_req)?;

  let response = use_case.execute(session_token).await?;

  Ok(HttpResponse::Ok().json(TokenResponse::bearer(
    response.access_token,
    response.expires_in,
  )))
}
