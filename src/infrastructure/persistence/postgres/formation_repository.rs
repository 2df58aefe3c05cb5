use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::formation::{
  entities::Formation, errors::FormationError, ports::FormationRepository,
};

/// PostgreSQL implementation of the FormationRepository trait
pub struct PostgresFormationRepository {
  pool: PgPool,
}

impl PostgresFormationRepository {
  /// Creates a new instance of PostgresFormationRepository
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

/// Database row structure for formations table
#[derive(Debug, sqlx::FromRow)]
struct FormationRow {
  id: Uuid,
  label: String,
  description: String,
  duration_hours: i32,
  created_at: DateTime<Utc>,
  updated_at: DateTime<Utc>,
}

impl From<FormationRow> for Formation {
  fn from(row: FormationRow) -> Self {
    Formation::from_db(
      row.id,
      row.label,
      row.description,
      row.duration_hours,
      row.created_at,
      row.updated_at,
    )
  }
}

#[async_trait]
impl FormationRepository for PostgresFormationRepository {
  async fn create(&self, formation: Formation) -> Result<Formation, FormationError> {
    let row = sqlx::query_as::<_, FormationRow>(
      r#"
            INSERT INTO formations (id, label, description, duration_hours, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, label, description, duration_hours, created_at, updated_at
            "#,
    )
    .bind(formation.id)
    .bind(&formation.label)
    .bind(&formation.description)
    .bind(formation.duration_hours)
    .bind(formation.created_at)
    .bind(formation.updated_at)
    .fetch_one(&self.pool)
    .await?;

    Ok(row.into())
  }

  async fn find_by_id(&self, id: Uuid) -> Result<Option<Formation>, FormationError> {
    let row = sqlx::query_as::<_, FormationRow>(
      r#"
            SELECT id, label, description, duration_hours, created_at, updated_at
            FROM formations
            WHERE id = $1
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(Into::into))
  }

  async fn list(&self) -> Result<Vec<Formation>, FormationError> {
    let rows = sqlx::query_as::<_, FormationRow>(
      "SELECT id, label, description, duration_hours, created_at, updated_at FROM formations",
    )
    .fetch_all(&self.pool)
    .await?;

    Ok(rows.into_iter().map(Into::into).collect())
  }

  async fn update(&self, formation: Formation) -> Result<Formation, FormationError> {
    let row = sqlx::query_as::<_, FormationRow>(
      r#"
            UPDATE formations
            SET label = $2, description = $3, duration_hours = $4, updated_at = $5
            WHERE id = $1
            RETURNING id, label, description, duration_hours, created_at, updated_at
            "#,
    )
    .bind(formation.id)
    .bind(&formation.label)
    .bind(&formation.description)
    .bind(formation.duration_hours)
    .bind(formation.updated_at)
    .fetch_optional(&self.pool)
    .await?;

    row.map(Into::into).ok_or(FormationError::NotFound)
  }

  async fn delete(&self, id: Uuid) -> Result<Option<Formation>, FormationError> {
    // Candidature rows are not cascaded; they keep the dangling formation_id
    let row = sqlx::query_as::<_, FormationRow>(
      r#"
            DELETE FROM formations
            WHERE id = $1
            RETURNING id, label, description, duration_hours, created_at, updated_at
            "#,
    )
    .bind(id)
    .fetch_optional(&self.pool)
    .await?;

    Ok(row.map(Into::into))
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::infrastructure::persistence::postgres::test_support::setup_test_db;

  fn formation() -> Formation {
    Formation::new(
      "Rust avancé".to_string(),
      "Ownership, traits, async".to_string(),
      40,
    )
  }

  #[tokio::test]
  async fn test_create_then_list() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresFormationRepository::new(pool);

    let created = repo.create(formation()).await.unwrap();

    let catalog = repo.list().await.unwrap();
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog[0].id, created.id);
    assert_eq!(catalog[0].label, "Rust avancé");
  }

  #[tokio::test]
  async fn test_update_persists_fields() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresFormationRepository::new(pool);

    let mut created = repo.create(formation()).await.unwrap();
    created.update("Rust expert".to_string(), "Unsafe, FFI".to_string(), 60);

    let updated = repo.update(created.clone()).await.unwrap();
    assert_eq!(updated.label, "Rust expert");
    assert_eq!(updated.duration_hours, 60);

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found.label, "Rust expert");
  }

  #[tokio::test]
  async fn test_update_unknown_id_not_found() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresFormationRepository::new(pool);

    let result = repo.update(formation()).await;
    assert!(matches!(result, Err(FormationError::NotFound)));
  }

  #[tokio::test]
  async fn test_delete_returns_removed_row() {
    let (pool, _container) = setup_test_db().await;
    let repo = PostgresFormationRepository::new(pool);

    let created = repo.create(formation()).await.unwrap();

    let deleted = repo.delete(created.id).await.unwrap().unwrap();
    assert_eq!(deleted.id, created.id);

    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    assert!(repo.delete(created.id).await.unwrap().is_none());
  }
}
