pub mod users;

use std::time::Duration;

use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use thiserror::Error;
use uuid::Uuid;

use crate::models::User;

pub use users::PgUserStore;

/// Errors from the user store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Unique email index rejected an insert. This is the store-level
    /// backstop for the non-atomic signup existence check.
    #[error("a user with this email already exists")]
    DuplicateEmail,

    #[error("store call exceeded its deadline")]
    Timeout,

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Durable user storage: exact-match lookups plus insert. Implemented by
/// Postgres in production and by an in-memory map in integration tests.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError>;

    async fn insert_user(&self, user: &User) -> Result<(), StoreError>;
}

/// Build the Postgres connection pool
pub async fn connect(database_url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect(database_url)
        .await
}
