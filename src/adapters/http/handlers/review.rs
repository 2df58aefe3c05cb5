use actix_web::{HttpResponse, web};
use std::sync::Arc;
use uuid::Uuid;

use crate::adapters::http::{
  dtos::{AcceptedListResponse, DecisionResponse, RefusedListResponse, UserDto, UsersListResponse},
  errors::ApiError,
};
use crate::application::review::{
  CandidateFilter, DecideCandidatureCommand, DecideCandidatureUseCase, ListCandidatesUseCase,
};
use crate::domain::auth::value_objects::{CandidateStatus, Decision};

/// Handler for accepting a candidature
///
/// PUT /accepter/{id} (admin)
pub async fn accepter_handler(
  path: web::Path<Uuid>,
  use_case: web::Data<Arc<DecideCandidatureUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let user = use_case
    .execute(DecideCandidatureCommand {
      user_id: path.into_inner(),
      decision: Decision::Accepted,
    })
    .await?;

  Ok(HttpResponse::Ok().json(DecisionResponse {
    status_code: 200,
    status_message: "Vous avez accepté cette candidature".to_string(),
    candidat: UserDto::from(user),
  }))
}

/// Handler for refusing a candidature
///
/// PUT /refuser/{id} (admin)
pub async fn refuser_handler(
  path: web::Path<Uuid>,
  use_case: web::Data<Arc<DecideCandidatureUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let user = use_case
    .execute(DecideCandidatureCommand {
      user_id: path.into_inner(),
      decision: Decision::Refused,
    })
    .await?;

  Ok(HttpResponse::Ok().json(DecisionResponse {
    status_code: 200,
    status_message: "Vous avez refusé cette candidature".to_string(),
    candidat: UserDto::from(user),
  }))
}

/// Handler for the accepted-candidate listing
///
/// GET /user/listesAccepter (public)
pub async fn listes_accepter_handler(
  use_case: web::Data<Arc<ListCandidatesUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let users = use_case
    .execute(CandidateFilter::ByStatus(CandidateStatus::Accepted))
    .await?;

  Ok(HttpResponse::Ok().json(AcceptedListResponse {
    status_code: 200,
    status_message: "Listes des candidats acceptés".to_string(),
    listes_accepter: users.into_iter().map(UserDto::from).collect(),
  }))
}

/// Handler for the refused-candidate listing
///
/// GET /user/listesNonAccepter (user)
pub async fn listes_non_accepter_handler(
  use_case: web::Data<Arc<ListCandidatesUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let users = use_case
    .execute(CandidateFilter::ByStatus(CandidateStatus::Refused))
    .await?;

  Ok(HttpResponse::Ok().json(RefusedListResponse {
    status_code: 200,
    status_message: "Listes des candidats refusés".to_string(),
    listes_non_accepter: users.into_iter().map(UserDto::from).collect(),
  }))
}

/// Handler for the full candidate listing, all statuses included
///
/// GET /listesUser (user)
pub async fn listes_user_handler(
  use_case: web::Data<Arc<ListCandidatesUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let users = use_case.execute(CandidateFilter::All).await?;

  Ok(HttpResponse::Ok().json(UsersListResponse {
    status_code: 200,
    status_message: "Listes des candidats".to_string(),
    listes_users: users.into_iter().map(UserDto::from).collect(),
  }))
}
