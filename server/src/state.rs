use axum::extract::FromRef;
use larder_core::RecipeSource;
use std::sync::Arc;

use crate::db::DbPool;

/// Server secret used to pepper stored session token hashes.
#[derive(Clone)]
pub struct SessionSecret(Arc<str>);

impl SessionSecret {
    pub fn new(secret: &str) -> Self {
        Self(Arc::from(secret))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub pool: Arc<DbPool>,
    pub recipes: RecipeSource,
    pub secret: SessionSecret,
}

impl AppState {
    pub fn new(pool: DbPool, recipes: RecipeSource, secret: SessionSecret) -> Self {
        Self {
            pool: Arc::new(pool),
            recipes,
            secret,
        }
    }
}

impl FromRef<AppState> for Arc<DbPool> {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}

impl FromRef<AppState> for RecipeSource {
    fn from_ref(state: &AppState) -> Self {
        state.recipes.clone()
    }
}

impl FromRef<AppState> for SessionSecret {
    fn from_ref(state: &AppState) -> Self {
        state.secret.clone()
    }
}
