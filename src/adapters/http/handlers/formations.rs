use actix_web::{HttpResponse, web};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::adapters::http::{
  dtos::{FormationDto, FormationListResponse, FormationRequest, FormationResponse},
  errors::ApiError,
};
use crate::application::formation::{
  CreateFormationCommand, CreateFormationUseCase, DeleteFormationUseCase, ListFormationsUseCase,
  UpdateFormationCommand, UpdateFormationUseCase,
};

/// Handler for the public catalog listing
///
/// GET /formations/liste
pub async fn liste_handler(
  use_case: web::Data<Arc<ListFormationsUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let formations = use_case.execute().await?;

  Ok(HttpResponse::Ok().json(FormationListResponse {
    status_code: 200,
    status_message: "Listes des formations".to_string(),
    formations: formations.into_iter().map(FormationDto::from).collect(),
  }))
}

/// Handler for creating a formation
///
/// POST /formations/store (admin)
pub async fn store_handler(
  request: web::Json<FormationRequest>,
  use_case: web::Data<Arc<CreateFormationUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let formation = use_case
    .execute(CreateFormationCommand {
      label: request.label.clone(),
      description: request.description.clone(),
      duration_hours: request.duration_hours,
    })
    .await?;

  Ok(HttpResponse::Ok().json(FormationResponse {
    status_code: 200,
    status_message: "Formation enregistrée".to_string(),
    formations: FormationDto::from(formation),
  }))
}

/// Handler for updating a formation
///
/// PUT /formations/edit/{id} (admin)
pub async fn edit_handler(
  path: web::Path<Uuid>,
  request: web::Json<FormationRequest>,
  use_case: web::Data<Arc<UpdateFormationUseCase>>,
) -> Result<HttpResponse, ApiError> {
  request.validate()?;

  let formation = use_case
    .execute(UpdateFormationCommand {
      id: path.into_inner(),
      label: request.label.clone(),
      description: request.description.clone(),
      duration_hours: request.duration_hours,
    })
    .await?;

  Ok(HttpResponse::Ok().json(FormationResponse {
    status_code: 200,
    status_message: "Formation mise à jour".to_string(),
    formations: FormationDto::from(formation),
  }))
}

/// Handler for deleting a formation. Existing candidatures referencing the
/// formation are left in place.
///
/// DELETE /formations/{id} (admin)
pub async fn destroy_handler(
  path: web::Path<Uuid>,
  use_case: web::Data<Arc<DeleteFormationUseCase>>,
) -> Result<HttpResponse, ApiError> {
  let formation = use_case.execute(path.into_inner()).await?;

  Ok(HttpResponse::Ok().json(FormationResponse {
    status_code: 200,
    status_message: "Formation supprimée".to_string(),
    formations: FormationDto::from(formation),
  }))
}
