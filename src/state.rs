use std::sync::Arc;

use crate::auth::{PasswordHasher, TokenService};
use crate::database::UserStore;

/// Shared per-process services, cloned into the router. The store is the
/// only collaborator that touches the outside world.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn UserStore>,
    pub tokens: TokenService,
    pub passwords: PasswordHasher,
}

impl AppState {
    pub fn new(store: Arc<dyn UserStore>, tokens: TokenService, passwords: PasswordHasher) -> Self {
        Self {
            store,
            tokens,
            passwords,
        }
    }
}
