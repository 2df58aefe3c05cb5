use actix_web::web;
use std::sync::Arc;

use crate::application::auth::{
  GetCurrentUserUseCase, LoginUserUseCase, LogoutUserUseCase, RefreshSessionUseCase,
  RegisterUserUseCase,
};
use crate::application::candidature::SubmitCandidatureUseCase;
use crate::application::formation::{
  CreateFormationUseCase, DeleteFormationUseCase, ListFormationsUseCase, UpdateFormationUseCase,
};
use crate::application::review::{DecideCandidatureUseCase, ListCandidatesUseCase};

use super::handlers::{auth, candidatures, formations, review};
use super::middleware::AuthMiddleware;

/// Every use case the route table needs, bundled so `main` wires the app in
/// one place
pub struct RouteDependencies {
  pub register_use_case: Arc<RegisterUserUseCase>,
  pub login_use_case: Arc<LoginUserUseCase>,
  pub logout_use_case: Arc<LogoutUserUseCase>,
  pub refresh_use_case: Arc<RefreshSessionUseCase>,
  pub get_user_use_case: Arc<GetCurrentUserUseCase>,
  pub decide_use_case: Arc<DecideCandidatureUseCase>,
  pub list_candidates_use_case: Arc<ListCandidatesUseCase>,
  pub create_formation_use_case: Arc<CreateFormationUseCase>,
  pub list_formations_use_case: Arc<ListFormationsUseCase>,
  pub update_formation_use_case: Arc<UpdateFormationUseCase>,
  pub delete_formation_use_case: Arc<DeleteFormationUseCase>,
  pub submit_candidature_use_case: Arc<SubmitCandidatureUseCase>,
}

/// Configure the full route table.
///
/// Three access tiers, each guard applied per resource so unrelated paths
/// never share a scope prefix:
///
/// Public:
/// - POST /login
/// - POST /user/inscription
/// - GET  /formations/liste
/// - GET  /user/listesAccepter (single canonical registration; the original
///   routing table also registered it behind auth, which was a defect)
///
/// Authenticated (any role):
/// - POST /me
/// - POST /logout
/// - POST /refresh
/// - POST /candidater
/// - GET  /user/listesNonAccepter
/// - GET  /listesUser
///
/// Admin only:
/// - PUT    /accepter/{id}
/// - PUT    /refuser/{id}
/// - POST   /formations/store
/// - PUT    /formations/edit/{id}
/// - DELETE /formations/{id}
pub fn configure_routes(cfg: &mut web::ServiceConfig, deps: RouteDependencies) {
  // Store use cases in app data so handlers can access them
  cfg
    .app_data(web::Data::new(deps.register_use_case))
    .app_data(web::Data::new(deps.login_use_case))
    .app_data(web::Data::new(deps.logout_use_case))
    .app_data(web::Data::new(deps.refresh_use_case))
    .app_data(web::Data::new(deps.get_user_use_case.clone()))
    .app_data(web::Data::new(deps.decide_use_case))
    .app_data(web::Data::new(deps.list_candidates_use_case))
    .app_data(web::Data::new(deps.create_formation_use_case))
    .app_data(web::Data::new(deps.list_formations_use_case))
    .app_data(web::Data::new(deps.update_formation_use_case))
    .app_data(web::Data::new(deps.delete_formation_use_case))
    .app_data(web::Data::new(deps.submit_candidature_use_case));

  let get_user = deps.get_user_use_case;

  // Public routes
  cfg
    .route("/login", web::post().to(auth::login_handler))
    .route("/user/inscription", web::post().to(auth::inscription_handler))
    .route("/formations/liste", web::get().to(formations::liste_handler))
    .route(
      "/user/listesAccepter",
      web::get().to(review::listes_accepter_handler),
    );

  // Routes for any authenticated account
  cfg
    .service(
      web::resource("/me")
        .wrap(AuthMiddleware::user(get_user.clone()))
        .route(web::post().to(auth::me_handler)),
    )
    .service(
      web::resource("/logout")
        .wrap(AuthMiddleware::user(get_user.clone()))
        .route(web::post().to(auth::logout_handler)),
    )
    .service(
      web::resource("/refresh")
        .wrap(AuthMiddleware::user(get_user.clone()))
        .route(web::post().to(auth::refresh_handler)),
    )
    .service(
      web::resource("/candidater")
        .wrap(AuthMiddleware::user(get_user.clone()))
        .route(web::post().to(candidatures::candidater_handler)),
    )
    .service(
      web::resource("/user/listesNonAccepter")
        .wrap(AuthMiddleware::user(get_user.clone()))
        .route(web::get().to(review::listes_non_accepter_handler)),
    )
    .service(
      web::resource("/listesUser")
        .wrap(AuthMiddleware::user(get_user.clone()))
        .route(web::get().to(review::listes_user_handler)),
    );

  // Admin-only routes
  cfg
    .service(
      web::resource("/accepter/{id}")
        .wrap(AuthMiddleware::admin(get_user.clone()))
        .route(web::put().to(review::accepter_handler)),
    )
    .service(
      web::resource("/refuser/{id}")
        .wrap(AuthMiddleware::admin(get_user.clone()))
        .route(web::put().to(review::refuser_handler)),
    )
    .service(
      web::resource("/formations/store")
        .wrap(AuthMiddleware::admin(get_user.clone()))
        .route(web::post().to(formations::store_handler)),
    )
    .service(
      web::resource("/formations/edit/{id}")
        .wrap(AuthMiddleware::admin(get_user.clone()))
        .route(web::put().to(formations::edit_handler)),
    )
    .service(
      web::resource("/formations/{id}")
        .wrap(AuthMiddleware::admin(get_user))
        .route(web::delete().to(formations::destroy_handler)),
    );
}
