use gm_auth::{IdentityStore, TokenService};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared application state handed to every handler and middleware.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub tokens: Arc<TokenService>,
    pub identity: Arc<dyn IdentityStore>,
}

impl AppState {
    pub fn new(pool: SqlitePool, tokens: TokenService, identity: Arc<dyn IdentityStore>) -> Self {
        Self {
            pool,
            tokens: Arc::new(tokens),
            identity,
        }
    }
}
