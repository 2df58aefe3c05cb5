use actix_web::{HttpRequest, HttpResponse, web};
use std::sync::Arc;

use crate::adapters::http::{
  dtos::{CandidaterRequest, CandidatureDto, CandidatureResponse},
  errors::ApiError,
};
use crate::application::candidature::{SubmitCandidatureCommand, SubmitCandidatureUseCase};

use super::get_user;

/// Handler for submitting a candidature. The applicant is the authenticated
/// caller; only the formation id comes from the body.
///
/// POST /candidater (user)
pub async fn candidater_handler(
  request: web::Json<CandidaterRequest>,
  use_case: web::Data<Arc<SubmitCandidatureUseCase>>,
  http_req: HttpRequest,
) -> Result<HttpResponse, ApiError> {
  let user = get_user(&http_req)?;

  let candidature = use_case
    .execute(SubmitCandidatureCommand {
      user_id: user.id,
      formation_id: request.formation_id,
    })
    .await?;

  Ok(HttpResponse::Ok().json(CandidatureResponse {
    status_code: 200,
    status_message: "Vous avez choisi cette formation".to_string(),
    candidature: CandidatureDto::from(candidature),
  }))
}
