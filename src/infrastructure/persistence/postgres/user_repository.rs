use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::auth::{
  entities::User,
  errors::{AuthError, RepositoryError},
  ports::UserRepository,
  value_objects::{CandidateStatus, Email, Role},
};

/// PostgreSQL implementation of the UserRepository trait
pub struct PostgresUserRepository {
  pool: PgPool,
}

impl PostgresUserRepository {
  /// Creates a new instance of PostgresUserRepository
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

/// Database row structure for users table
#[derive(Debug, sqlx::FromRow)]
struct UserRow {
  id: Uuid,
  name: String,
  phone: String,
  email: String,
  password_hash: String,
  role: String,
  status: String,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
  type Error = RepositoryError;

  fn try_from(row: UserRow) -> Result<Self, Self::Error> {
    // role and status are CHECK-constrained in the schema; a parse failure
    // means the database holds something the application never wrote
    let role = row
      .role
      .parse::<Role>()
      .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;
    let status = row
      .status
      .parse::<CandidateStatus>()
      .map_err(|e| RepositoryError::DatabaseError(e.to_string()))?;

    Ok(User::from_db(
      row.id,
      row.name,
      row.phone,
      row.email,
      row.password_hash,
      role,
      status,
      row.created_at,
      row.updated_at,
    ))
  }
}

const USER_COLUMNS: &str = "id, name, phone, email, password_hash, role, status, created_at, updated_at";

#[async_trait]
impl UserRepository for PostgresUserRepository {
  async fn create(&self, user: User) -> Result<User, AuthError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
            INSERT INTO users (
                id,
                name,
                phone,
                email,
                password_hash,
                role,
                status,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING
                id, name, phone, email, password_hash, role, status, created_at, updated_at
            "#,
    )
    .bind(user.id)
    .bind(&user.name)
    .bind(&user.phone)
    .bind(&user.email)
    .bind(&user.password_hash)
    .bind(user.role.as_str())
    .bind(user.status.as_str())
    .bind(user.created_at)
    .bind(user.updated_at)
    .fetch_one(&self.pool)
    .await?;

    row.try_into().map_err(AuthError::Repository)
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthError> {
    let row = sqlx::query_as::<_, UserRow>(&format!(
      "SELECT {USER_COLUMNS} FROM users WHERE id = $1"
    ))
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    row
      .map(|r| r.try_into().map_err(AuthError::Repository))
      .transpose()
  }

  async fn find_by_email(&self, email: &Email) -> Result<Option<User>, AuthError> {
    let row = sqlx::query_as::<_, UserRow>(&format!(
      "SELECT {USER_COLUMNS} FROM users WHERE email = $1"
    ))
    .bind(email.as_str())
    .fetch_optional(&self.pool)
    .await?;

    row
      .map(|r| r.try_into().map_err(AuthError::Repository))
      .transpose()
  }

  async fn set_status(&self, id: Uuid, status: CandidateStatus) -> Result<Option<User>, AuthError> {
    let row = sqlx::query_as::<_, UserRow>(
      r#"
            UPDATE users
            SET status = $2, updated_at = NOW()
            WHERE id = $1
            RETURNING
                id, name, phone, email, password_hash, role, status, created_at, updated_at
            "#,
    )
    .bind(id)
    .bind(status.as_str())
    .fetch_optional(&self.pool)
    .await?;

    row
      .map(|r| r.try_into().map_err(AuthError::Repository))
      .transpose()
  }

  async fn list_by_status(&self, status: CandidateStatus) -> Result<Vec<User>, AuthError> {
    let rows = sqlx::query_as::<_, UserRow>(&format!(
      "SELECT {USER_COLUMNS} FROM users WHERE role = 'user' AND status = $1"
    ))
    .bind(status.as_str())
    .fetch_all(&self.pool)
    .await?;

    rows
      .into_iter()
      .map(|r| r.try_into().map_err(AuthError::Repository))
      .collect()
  }

  async fn list_candidates(&self) -> Result<Vec<User>, AuthError> {
    let rows = sqlx::query_as::<_, UserRow>(&format!(
      "SELECT {USER_COLUMNS} FROM users WHERE role = 'user'"
    ))
    .fetch_all(&self.pool)
    .await?;

    rows
      .into_iter()
      .map(|r| r.try_into().map_err(AuthError::Repository))
      .collect()
  }
}
