use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::Router;
use uuid::Uuid;

use auth_service::auth::{PasswordHasher, TokenService};
use auth_service::database::{StoreError, UserStore};
use auth_service::models::User;
use auth_service::routes;
use auth_service::state::AppState;

pub const TEST_SECRET: &str = "integration-test-secret";

/// In-memory user store so the router can be exercised without Postgres.
#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<HashMap<Uuid, User>>,
}

impl MemoryUserStore {
    pub fn remove(&self, id: Uuid) {
        self.users.lock().unwrap().remove(&id);
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_user_by_id(&self, id: Uuid) -> Result<Option<User>, StoreError> {
        let users = self.users.lock().unwrap();
        Ok(users.get(&id).cloned())
    }

    async fn insert_user(&self, user: &User) -> Result<(), StoreError> {
        let mut users = self.users.lock().unwrap();
        if users.values().any(|u| u.email == user.email) {
            return Err(StoreError::DuplicateEmail);
        }
        users.insert(user.id, user.clone());
        Ok(())
    }
}

/// Build the app against a fresh in-memory store. Returns the store handle so
/// tests can mutate it behind the API's back.
pub fn test_app() -> (Router, Arc<MemoryUserStore>) {
    let store = Arc::new(MemoryUserStore::default());
    let state = AppState::new(
        store.clone(),
        TokenService::new(TEST_SECRET, 1),
        // Minimum cost keeps the bcrypt calls fast in tests
        PasswordHasher::with_cost(4),
    );
    (routes::app(state), store)
}
