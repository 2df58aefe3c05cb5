use actix_web::{App, HttpServer, middleware::Logger, web};
use sqlx::postgres::PgPoolOptions;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use formatrack::{
  adapters::http::{RouteDependencies, configure_routes},
  application::auth::{
    GetCurrentUserUseCase, LoginUserUseCase, LogoutUserUseCase, RefreshSessionUseCase,
    RegisterUserUseCase,
  },
  application::candidature::SubmitCandidatureUseCase,
  application::formation::{
    CreateFormationUseCase, DeleteFormationUseCase, ListFormationsUseCase, UpdateFormationUseCase,
  },
  application::review::{DecideCandidatureUseCase, ListCandidatesUseCase},
  domain::auth::services::{AuthService, AuthServiceConfig, ReviewService},
  domain::candidature::services::CandidatureService,
  domain::formation::services::FormationService,
  infrastructure::{
    config::Config,
    persistence::postgres::{
      PostgresCandidatureRepository, PostgresFormationRepository, PostgresSessionRepository,
      PostgresUserRepository,
    },
    security::Argon2PasswordHasher,
  },
};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
  // Initialize environment variables from .env file
  dotenvy::dotenv().ok();

  // Initialize tracing subscriber for logging
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "formatrack=debug,actix_web=info".into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();

  tracing::info!("Starting Formatrack application");

  let config = Config::load().expect("Failed to load configuration");
  tracing::info!("Configuration loaded successfully");

  // Set up database connection pool with timeout
  tracing::info!("Connecting to database: {}", config.database.url);

  let db_pool = tokio::time::timeout(
    Duration::from_secs(config.database.connect_timeout_seconds),
    PgPoolOptions::new()
      .max_connections(config.database.max_connections)
      .acquire_timeout(Duration::from_secs(config.database.acquire_timeout_seconds))
      .connect(&config.database.url),
  )
  .await
  .map_err(|_| {
    tracing::error!(
      "Database connection timed out after {} seconds. Is PostgreSQL running?",
      config.database.connect_timeout_seconds
    );
    std::io::Error::new(
      std::io::ErrorKind::TimedOut,
      format!(
        "Database connection timed out after {} seconds",
        config.database.connect_timeout_seconds
      ),
    )
  })?
  .map_err(|e| {
    tracing::error!("Failed to connect to database: {}", e);
    match e {
      sqlx::Error::Io(_) => std::io::Error::new(
        std::io::ErrorKind::ConnectionRefused,
        format!(
          "Could not connect to database. Is PostgreSQL running at {}?",
          config.database.url
        ),
      ),
      _ => std::io::Error::other(format!("Database error: {}", e)),
    }
  })?;

  tracing::info!("Database connection pool created");

  // Run database migrations
  tracing::info!("Running database migrations");
  sqlx::migrate!("./migrations")
    .run(&db_pool)
    .await
    .expect("Failed to run database migrations");
  tracing::info!("Database migrations completed");

  // Initialize repositories
  let user_repo = Arc::new(PostgresUserRepository::new(db_pool.clone()));
  let session_repo = Arc::new(PostgresSessionRepository::new(db_pool.clone()));
  let formation_repo = Arc::new(PostgresFormationRepository::new(db_pool.clone()));
  let candidature_repo = Arc::new(PostgresCandidatureRepository::new(db_pool.clone()));

  // Initialize security services
  let password_hasher =
    Arc::new(Argon2PasswordHasher::new().expect("Failed to create password hasher"));

  // Initialize domain services
  let auth_service = Arc::new(AuthService::new(
    user_repo.clone(),
    session_repo.clone(),
    password_hasher,
    AuthServiceConfig {
      session_ttl_seconds: config.security.session_ttl_seconds,
    },
  ));
  let review_service = Arc::new(ReviewService::new(user_repo.clone()));
  let formation_service = Arc::new(FormationService::new(formation_repo.clone()));
  let candidature_service = Arc::new(CandidatureService::new(
    candidature_repo.clone(),
    formation_repo.clone(),
  ));

  // Initialize use cases
  let register_use_case = Arc::new(RegisterUserUseCase::new(auth_service.clone()));
  let login_use_case = Arc::new(LoginUserUseCase::new(auth_service.clone()));
  let logout_use_case = Arc::new(LogoutUserUseCase::new(auth_service.clone()));
  let refresh_use_case = Arc::new(RefreshSessionUseCase::new(auth_service.clone()));
  let get_user_use_case = Arc::new(GetCurrentUserUseCase::new(auth_service.clone()));

  let decide_use_case = Arc::new(DecideCandidatureUseCase::new(review_service.clone()));
  let list_candidates_use_case = Arc::new(ListCandidatesUseCase::new(review_service.clone()));

  let create_formation_use_case = Arc::new(CreateFormationUseCase::new(formation_service.clone()));
  let list_formations_use_case = Arc::new(ListFormationsUseCase::new(formation_service.clone()));
  let update_formation_use_case = Arc::new(UpdateFormationUseCase::new(formation_service.clone()));
  let delete_formation_use_case = Arc::new(DeleteFormationUseCase::new(formation_service.clone()));

  let submit_candidature_use_case =
    Arc::new(SubmitCandidatureUseCase::new(candidature_service.clone()));

  let server_host = config.server.host.clone();
  let server_port = config.server.port;

  tracing::info!("Starting HTTP server on {}:{}", server_host, server_port);

  // Create and start the HTTP server
  HttpServer::new(move || {
    App::new()
      // Add logging middleware
      .wrap(Logger::default())
      // Configure API routes
      .configure(|cfg| {
        configure_routes(
          cfg,
          RouteDependencies {
            register_use_case: register_use_case.clone(),
            login_use_case: login_use_case.clone(),
            logout_use_case: logout_use_case.clone(),
            refresh_use_case: refresh_use_case.clone(),
            get_user_use_case: get_user_use_case.clone(),
            decide_use_case: decide_use_case.clone(),
            list_candidates_use_case: list_candidates_use_case.clone(),
            create_formation_use_case: create_formation_use_case.clone(),
            list_formations_use_case: list_formations_use_case.clone(),
            update_formation_use_case: update_formation_use_case.clone(),
            delete_formation_use_case: delete_formation_use_case.clone(),
            submit_candidature_use_case: submit_candidature_use_case.clone(),
          },
        )
      })
      // Health check endpoint
      .route("/health", web::get().to(health_check))
  })
  .bind((server_host.as_str(), server_port))?
  .run()
  .await
}

/// Health check endpoint
async fn health_check() -> &'static str {
  "OK"
}
