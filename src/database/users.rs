use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use sqlx::PgPool;
use tokio::time::timeout;
use uuid::Uuid;

use super::{StoreError, UserStore};
use crate::models::User;

/// A slow or unreachable store fails the single request instead of hanging
/// the process.
const STORE_CALL_TIMEOUT: Duration = Duration::from_secs(5);

/// Postgres-backed user store. Expects a `users` table with a unique index
/// on `email` (see migrations/001_create_users.sql).
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn bounded<T, F>(query: F) -> Result<T, StoreError>
where
    F: Future<Output = Result<T, sqlx::Error>>,
{
    match timeout(STORE_CALL_TIMEOUT, query).await {
        Ok(result) => result.map_err(StoreError::from),
        Err(_) => Err(StoreError::Timeout),
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let query = sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, name, created_at, updated_at \
             FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool);

        bounded(query).await
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let query = sqlx::query_as::<_, User>(
            "SELECT id, email, password_hash, name, created_at, updated_at \
             FROM users WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool);

        bounded(query).await
    }

    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        let query = sqlx::query(
            "INSERT INTO users (id, email, password_hash, name, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6)",
        )
        .bind(user.id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.name)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool);

        match bounded(query).await {
            Ok(_) => Ok(()),
            Err(StoreError::Sqlx(e)) => {
                if e.as_database_error()
                    .is_some_and(|db| db.is_unique_violation())
                {
                    Err(StoreError::DuplicateEmail)
                } else {
                    Err(StoreError::Sqlx(e))
                }
            }
            Err(other) => Err(other),
        }
    }
}
