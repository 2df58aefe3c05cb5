pub mod auth;
pub mod candidatures;
pub mod formations;
pub mod review;

use actix_web::{HttpMessage, HttpRequest};

use crate::{adapters::http::errors::ApiError, domain::auth::entities::User};

/// Extract the authenticated user attached to the request by AuthMiddleware.
///
/// Handlers receive the identity explicitly through this call rather than an
/// ambient auth context; a missing identity means the route was registered
/// without its guard.
pub fn get_user(req: &HttpRequest) -> Result<User, ApiError> {
  let user = req.extensions().get::<User>().cloned();

  if user.is_none() {
    tracing::warn!(
      "get_user: User not found in request extensions for path {}",
      req.path()
    );
  }

  user.ok_or_else(|| ApiError::Unauthorized("Invalid or expired session".to_string()))
}

/// Extract session token from Authorization header
pub(crate) fn extract_session_token(req: &HttpRequest) -> Result<String, ApiError> {
  req
    .headers()
    .get("Authorization")
    .and_then(|h| h.to_str().ok())
    .and_then(|s| s.strip_prefix("Bearer "))
    .map(|s| s.to_string())
    .ok_or_else(|| ApiError::Unauthorized("Invalid or missing authorization token".to_string()))
}

#[cfg(test)]
mod tests {
  use super::*;
  use actix_web::test::TestRequest;

  #[test]
  fn test_extract_session_token_valid() {
    let req = TestRequest::default()
      .insert_header(("Authorization", "Bearer test_token_123"))
      .to_http_request();

    let token = extract_session_token(&req).unwrap();
    assert_eq!(token, "test_token_123");
  }

  #[test]
  fn test_extract_session_token_missing() {
    let req = TestRequest::default().to_http_request();

    assert!(extract_session_token(&req).is_err());
  }

  #[test]
  fn test_get_user_without_guard_is_unauthorized() {
    let req = TestRequest::default().to_http_request();

    assert!(get_user(&req).is_err());
  }
}
