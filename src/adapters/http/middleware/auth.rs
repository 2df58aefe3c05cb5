use actix_web::{
  Error, HttpMessage, HttpResponse,
  body::EitherBody,
  dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
  error::ResponseError,
};
use futures_util::future::LocalBoxFuture;
use std::{
  future::{Ready, ready},
  rc::Rc,
  sync::Arc,
};

use crate::{
  adapters::http::errors::ApiError,
  application::auth::GetCurrentUserUseCase,
  domain::auth::policy::{AccessDecision, RequiredRole, authorize},
};

/// Route guard validating the bearer token and the caller's role.
///
/// Before the wrapped handler runs, the guard:
/// 1. extracts the bearer token from the Authorization header (401 if absent),
/// 2. resolves it to a `User` via `GetCurrentUserUseCase` (401 on failure),
/// 3. consults `authorize(user, required)` (403 on `Denied`),
/// 4. attaches the `User` to request extensions for the handler to read.
///
/// A denied request never reaches the handler; there is no partial execution.
pub struct AuthMiddleware {
  get_user_use_case: Arc<GetCurrentUserUseCase>,
  required: RequiredRole,
}

impl AuthMiddleware {
  pub fn new(get_user_use_case: Arc<GetCurrentUserUseCase>, required: RequiredRole) -> Self {
    Self {
      get_user_use_case,
      required,
    }
  }

  /// Guard for routes any authenticated account may reach
  pub fn user(get_user_use_case: Arc<GetCurrentUserUseCase>) -> Self {
    Self::new(get_user_use_case, RequiredRole::User)
  }

  /// Guard for admin-only routes
  pub fn admin(get_user_use_case: Arc<GetCurrentUserUseCase>) -> Self {
    Self::new(get_user_use_case, RequiredRole::Admin)
  }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Transform = AuthMiddlewareService<S>;
  type InitError = ();
  type Future = Ready<Result<Self::Transform, Self::InitError>>;

  fn new_transform(&self, service: S) -> Self::Future {
    ready(Ok(AuthMiddlewareService {
      service: Rc::new(service),
      get_user_use_case: self.get_user_use_case.clone(),
      required: self.required,
    }))
  }
}

pub struct AuthMiddlewareService<S> {
  service: Rc<S>,
  get_user_use_case: Arc<GetCurrentUserUseCase>,
  required: RequiredRole,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
  S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
  S::Future: 'static,
  B: 'static,
{
  type Response = ServiceResponse<EitherBody<B>>;
  type Error = Error;
  type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

  forward_ready!(service);

  fn call(&self, req: ServiceRequest) -> Self::Future {
    let service = Rc::clone(&self.service);
    let get_user_use_case = self.get_user_use_case.clone();
    let required = self.required;

    Box::pin(async move {
      // Extract session token from Authorization header
      let session_token = match extract_session_token(&req) {
        Ok(token) => token,
        Err(e) => return Ok(reject(req, e)),
      };

      // Validate token and resolve the caller
      let user = match get_user_use_case.execute(session_token).await {
        Ok(user) => user,
        Err(e) => {
          // Whatever went wrong, an unresolved bearer is a 401
          let api_error = match ApiError::from(e) {
            ApiError::Unauthorized(msg) => ApiError::Unauthorized(msg),
            other => {
              tracing::debug!("token resolution failed: {}", other);
              ApiError::Unauthorized("Invalid or expired session".to_string())
            }
          };
          return Ok(reject(req, api_error));
        }
      };

      // Capability check before the handler runs
      if let AccessDecision::Denied { required, actual } = authorize(&user, required) {
        tracing::warn!(
          user_id = %user.id,
          ?required,
          ?actual,
          "role check refused access to {}",
          req.path()
        );
        return Ok(reject(
          req,
          ApiError::Forbidden("Insufficient role for this operation".to_string()),
        ));
      }

      // Attach the request-scoped identity for the handler
      req.extensions_mut().insert(user);

      let res = service.call(req).await?;
      Ok(res.map_into_left_body())
    })
  }
}

/// Builds the error ServiceResponse for a rejected request
fn reject<B>(req: ServiceRequest, error: ApiError) -> ServiceResponse<EitherBody<B>> {
  let (request, _) = req.into_parts();
  let response: HttpResponse = error.error_response();
  ServiceResponse::new(request, response.map_into_right_body())
}

/// Extract session token from Authorization header
fn extract_session_token(req: &ServiceRequest) -> Result<String, ApiError> {
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
      .to_srv_request();

    let token = extract_session_token(&req).unwrap();
    assert_eq!(token, "test_token_123");
  }

  #[test]
  fn test_extract_session_token_missing() {
    let req = TestRequest::default().to_srv_request();

    let result = extract_session_token(&req);
    assert!(result.is_err());
  }

  #[test]
  fn test_extract_session_token_invalid_format() {
    let req = TestRequest::default()
      .insert_header(("Authorization", "Basic dXNlcjpwdw=="))
      .to_srv_request();

    let result = extract_session_token(&req);
    assert!(result.is_err());
  }
}
