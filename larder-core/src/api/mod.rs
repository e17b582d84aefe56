//! Client for the external recipe search/detail API.
//!
//! Handlers talk to the API only through [`RecipeApi`] so tests can swap in
//! [`MockRecipeApi`].

mod client;
mod mock;

pub use client::{SpoonacularClient, SpoonacularClientBuilder, DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
pub use mock::MockRecipeApi;

use async_trait::async_trait;

use crate::error::ApiError;
use crate::types::{RecipeDetail, RecipeSummary};

/// Default number of search results requested.
pub const DEFAULT_RESULT_COUNT: u32 = 10;

/// Upper bound accepted by the search endpoint.
pub const MAX_RESULT_COUNT: u32 = 100;

#[async_trait]
pub trait RecipeApi: Send + Sync {
    /// Search recipes by free-text query.
    async fn search(&self, query: &str, number: u32) -> Result<Vec<RecipeSummary>, ApiError>;

    /// Fetch full information for one recipe.
    async fn recipe(&self, id: i32) -> Result<RecipeDetail, ApiError>;
}

/// Clamp a requested result count into the range the API accepts.
pub fn clamp_result_count(number: Option<u32>) -> u32 {
    number
        .unwrap_or(DEFAULT_RESULT_COUNT)
        .clamp(1, MAX_RESULT_COUNT)
}
