//! Persistence seam for the singleton profile document.
//!
//! `AppState` holds an `Arc<dyn ProfileStore>`: `PgProfileStore` in the
//! server, `InMemoryProfileStore` in tests.

use async_trait::async_trait;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::profile::{Profile, ProfileDocument, ProfileRow};

#[async_trait]
pub trait ProfileStore: Send + Sync {
    /// Returns the stored profile, if any.
    async fn find(&self) -> Result<Option<Profile>, AppError>;

    /// Inserts `doc` as the singleton. Returns `None` without writing when a
    /// profile already exists.
    async fn insert(&self, doc: &ProfileDocument) -> Result<Option<Profile>, AppError>;

    /// Overwrites the document of profile `id` and bumps `updated_at`.
    /// Returns `None` if that profile no longer exists.
    async fn update(&self, id: Uuid, doc: &ProfileDocument) -> Result<Option<Profile>, AppError>;

    /// Deletes profile `id`. Returns whether a row was removed.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;

    /// Removes any stored profile and inserts `doc` in its place, atomically.
    async fn replace(&self, doc: &ProfileDocument) -> Result<Profile, AppError>;
}

/// PostgreSQL-backed store over the single-row `profiles` table.
#[derive(Clone)]
pub struct PgProfileStore {
    pool: PgPool,
}

impl PgProfileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProfileStore for PgProfileStore {
    async fn find(&self) -> Result<Option<Profile>, AppError> {
        let row: Option<ProfileRow> = sqlx::query_as(
            "SELECT id, data, created_at, updated_at FROM profiles LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Profile::from))
    }

    async fn insert(&self, doc: &ProfileDocument) -> Result<Option<Profile>, AppError> {
        // The constant primary key turns a concurrent second insert into a no-op.
        let row: Option<ProfileRow> = sqlx::query_as(
            r#"
            INSERT INTO profiles (id, data)
            VALUES ($1, $2)
            ON CONFLICT DO NOTHING
            RETURNING id, data, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(Json(doc))
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Profile::from))
    }

    async fn update(&self, id: Uuid, doc: &ProfileDocument) -> Result<Option<Profile>, AppError> {
        let row: Option<ProfileRow> = sqlx::query_as(
            r#"
            UPDATE profiles
            SET data = $1, updated_at = now()
            WHERE id = $2
            RETURNING id, data, created_at, updated_at
            "#,
        )
        .bind(Json(doc))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row.map(Profile::from))
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn replace(&self, doc: &ProfileDocument) -> Result<Profile, AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM profiles").execute(&mut *tx).await?;

        let row: ProfileRow = sqlx::query_as(
            r#"
            INSERT INTO profiles (id, data)
            VALUES ($1, $2)
            RETURNING id, data, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(Json(doc))
        .fetch_one(&mut *tx)
        .await?;

        // Dropping `tx` before this point rolls back the delete.
        tx.commit().await?;
        Ok(row.into())
    }
}
