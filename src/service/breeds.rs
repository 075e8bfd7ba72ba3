//! CRUD execution against the breeds table.

use crate::error::AppError;
use crate::model::{Breed, BreedFilter};
use crate::sql::{self, QueryBuf};
use sqlx::sqlite::SqliteQueryResult;
use sqlx::SqlitePool;

pub struct BreedService;

impl BreedService {
    /// All rows in table order.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Breed>, AppError> {
        Self::fetch_many(pool, &sql::select_all()).await
    }

    /// Rows matching the filter; an empty filter returns everything.
    pub async fn search(pool: &SqlitePool, filter: &BreedFilter) -> Result<Vec<Breed>, AppError> {
        Self::fetch_many(pool, &sql::search(filter)).await
    }

    /// One row by id, or None.
    pub async fn get(pool: &SqlitePool, id: i64) -> Result<Option<Breed>, AppError> {
        let q = sql::select_by_id(id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, Breed>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_optional(pool).await?)
    }

    /// Insert with a store-assigned id; returns the created row.
    pub async fn create(pool: &SqlitePool, breed: &Breed) -> Result<Breed, AppError> {
        let result = Self::execute(pool, &sql::insert(breed)).await?;
        let mut created = breed.clone();
        created.id = result.last_insert_rowid();
        Ok(created)
    }

    /// Replace every field except id. Returns None when no such row exists.
    pub async fn update(pool: &SqlitePool, id: i64, breed: &Breed) -> Result<Option<Breed>, AppError> {
        if !Self::exists(pool, id).await? {
            return Ok(None);
        }
        Self::execute(pool, &sql::update_by_id(id, breed)).await?;
        let mut updated = breed.clone();
        updated.id = id;
        Ok(Some(updated))
    }

    /// Delete by id; false when no row was affected.
    pub async fn delete(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let result = Self::execute(pool, &sql::delete_by_id(id)).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Insert preserving the row's own id. Used by the bulk loader only.
    pub async fn insert_with_id(pool: &SqlitePool, breed: &Breed) -> Result<(), AppError> {
        Self::execute(pool, &sql::insert_with_id(breed)).await?;
        Ok(())
    }

    async fn exists(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
        let q = sql::exists_by_id(id);
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_scalar::<_, i64>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_one(pool).await? != 0)
    }

    async fn fetch_many(pool: &SqlitePool, q: &QueryBuf) -> Result<Vec<Breed>, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query_as::<_, Breed>(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.fetch_all(pool).await?)
    }

    async fn execute(pool: &SqlitePool, q: &QueryBuf) -> Result<SqliteQueryResult, AppError> {
        tracing::debug!(sql = %q.sql, params = ?q.params, "query");
        let mut query = sqlx::query(&q.sql);
        for p in &q.params {
            query = query.bind(p.clone());
        }
        Ok(query.execute(pool).await?)
    }
}
