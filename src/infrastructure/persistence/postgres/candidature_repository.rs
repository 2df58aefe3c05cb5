use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::candidature::{
  entities::Candidature, errors::CandidatureError, ports::CandidatureRepository,
};

/// PostgreSQL implementation of the CandidatureRepository trait
pub struct PostgresCandidatureRepository {
  pool: PgPool,
}

impl PostgresCandidatureRepository {
  /// Creates a new instance of PostgresCandidatureRepository
  pub fn new(pool: PgPool) -> Self {
    Self { pool }
  }
}

/// Database row structure for candidatures table
#[derive(Debug, sqlx::FromRow)]
struct CandidatureRow {
  id: Uuid,
  user_id: Uuid,
  formation_id: Uuid,
  created_at: DateTime<Utc>,
}

impl From<CandidatureRow> for Candidature {
  fn from(row: CandidatureRow) -> Self {
    Candidature::from_db(row.id, row.user_id, row.formation_id, row.created_at)
  }
}

#[async_trait]
impl CandidatureRepository for PostgresCandidatureRepository {
  async fn create(&self, candidature: Candidature) -> Result<Candidature, CandidatureError> {
    let row = sqlx::query_as::<_, CandidatureRow>(
      r#"
            INSERT INTO candidatures (id, user_id, formation_id, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, user_id, formation_id, created_at
            "#,
    )
    .bind(candidature.id)
    .bind(candidature.user_id)
    .bind(candidature.formation_id)
    .bind(candidature.created_at)
    .fetch_one(&self.pool)
    .await?;

    Ok(row.into())
  }
}
