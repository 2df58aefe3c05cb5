use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::auth::{
  entities::Session,
  errors::AuthError,
  ports::SessionRepository,
  value_objects::TokenHash,
};

/// PostgreSQL implementation of the SessionRepository trait
pub struct PostgresSessionRepository {
  pool: PgPool,
}

impl PostgresSessionRepository {
  /// Creates a new instance of PostgresSessionRepository
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

/// Database row structure for sessions table
#[derive(Debug, sqlx::FromRow)]
struct SessionRow {
  id: Uuid,
  user_id: Uuid,
  token_hash: String,
  expires_at: DateTime<Utc>,
  created_at: DateTime<Utc>,
}

impl From<SessionRow> for Session {
  fn from(row: SessionRow) -> Self {
    Session::from_db(
      row.id,
      row.user_id,
      row.token_hash,
      row.expires_at,
      row.created_at,
    )
  }
}

#[async_trait]
impl SessionRepository for PostgresSessionRepository {
  async fn create(&self, session: Session) -> Result<Session, AuthError> {
    let row = sqlx::query_as::<_, SessionRow>(
      r#"
            INSERT INTO sessions (id, user_id, token_hash, expires_at, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, user_id, token_hash, expires_at, created_at
            "#,
    )
    .bind(session.id)
    .bind(session.user_id)
    .bind(&session.token_hash)
    .bind(session.expires_at)
    .bind(session.created_at)
    .fetch_one(&self.pool)
    .await?;

    Ok(row.into())
  }

  async fn find_by_token_hash(&self, token_hash: &TokenHash) -> Result<Option<Session>, AuthError> {
    let row = sqlx::query_as::<_, SessionRow>(
      r#"
            SELECT id, user_id, token_hash, expires_at, created_at
            FROM sessions
            WHERE token_hash = $1
            "#,
    )
    .bind(token_hash.as_str())
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(Into::into))
  }

  async fn delete(&self, session_id: Uuid) -> Result<(), AuthError> {
    sqlx::query("DELETE FROM sessions WHERE id = $1")
      .bind(session_id)
      .execute(&self.pool)
      .await?;

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::domain::auth::entities::User;
  use crate::domain::auth::ports::UserRepository;
  use crate::domain::auth::value_objects::SessionToken;
  use crate::infrastructure::persistence::postgres::PostgresUserRepository;
  use crate::infrastructure::persistence::postgres::test_support::setup_test_db;
  use chrono::Duration;

  async fn seed_user(pool: &PgPool) -> User {
    let repo = PostgresUserRepository::new(pool.clone());
    repo
      .create(User::register(
        "Awa Diallo".to_string(),
        "+221770000000".to_string(),
        "session@example.com".to_string(),
        "$argon2id$v=19$m=19456,t=2,p=1$c2FsdHNhbHQ$aGFzaGhhc2hoYXNoaGFzaA".to_string(),
      ))
      .await
      .unwrap()
  }

  #[tokio::test]
  async fn test_create_and_find_by_token_hash() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresSessionRepository::new(pool.clone());
    let user = seed_user(&pool).await;

    let token = SessionToken::generate();
    let session = Session::with_duration(user.id, token.hash().into_inner(), Duration::hours(1));
    repo.create(session.clone()).await.unwrap();

    let found = repo.find_by_token_hash(&token.hash()).await.unwrap();
    assert_eq!(found.unwrap().id, session.id);

    // A different token resolves to nothing
    let other = SessionToken::generate();
    assert!(repo.find_by_token_hash(&other.hash()).await.unwrap().is_none());
  }

  #[tokio::test]
  async fn test_delete_session() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresSessionRepository::new(pool.clone());
    let user = seed_user(&pool).await;

    let token = SessionToken::generate();
    let session = Session::with_duration(user.id, token.hash().into_inner(), Duration::hours(1));
    let created = repo.create(session).await.unwrap();

    repo.delete(created.id).await.unwrap();

    assert!(repo.find_by_token_hash(&token.hash()).await.unwrap().is_none());
  }
}
