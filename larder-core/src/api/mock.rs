//! In-memory recipe API for tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::RecipeApi;
use crate::error::ApiError;
use crate::types::{RecipeDetail, RecipeSummary};

/// Failure a canned response stands for.
#[derive(Debug, Clone)]
enum Failure {
    Status(u16),
    Malformed,
}

impl Failure {
    fn to_error(&self) -> ApiError {
        match self {
            Failure::Status(status) => ApiError::Status(*status),
            Failure::Malformed => ApiError::Decode("malformed response body".to_string()),
        }
    }
}

/// Canned responses keyed by search query or recipe id.
///
/// Unregistered queries return no results; unregistered recipe ids return
/// a 404 status, matching what the real API does.
#[derive(Default)]
pub struct MockRecipeApi {
    searches: HashMap<String, Result<Vec<RecipeSummary>, Failure>>,
    recipes: HashMap<i32, Result<RecipeDetail, Failure>>,
    search_calls: AtomicUsize,
    recipe_calls: AtomicUsize,
}

impl MockRecipeApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, query: &str, results: Vec<RecipeSummary>) -> Self {
        self.searches.insert(query.to_lowercase(), Ok(results));
        self
    }

    /// Make a search for `query` fail with the given HTTP status.
    pub fn with_search_status(mut self, query: &str, status: u16) -> Self {
        self.searches
            .insert(query.to_lowercase(), Err(Failure::Status(status)));
        self
    }

    pub fn with_recipe(mut self, recipe: RecipeDetail) -> Self {
        self.recipes.insert(recipe.id, Ok(recipe));
        self
    }

    pub fn with_recipe_status(mut self, id: i32, status: u16) -> Self {
        self.recipes.insert(id, Err(Failure::Status(status)));
        self
    }

    /// Make the detail lookup for `id` succeed at the HTTP level but fail to
    /// decode.
    pub fn with_recipe_malformed(mut self, id: i32) -> Self {
        self.recipes.insert(id, Err(Failure::Malformed));
        self
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }

    pub fn recipe_calls(&self) -> usize {
        self.recipe_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecipeApi for MockRecipeApi {
    async fn search(&self, query: &str, number: u32) -> Result<Vec<RecipeSummary>, ApiError> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        match self.searches.get(&query.to_lowercase()) {
            Some(Ok(results)) => Ok(results.iter().take(number as usize).cloned().collect()),
            Some(Err(failure)) => Err(failure.to_error()),
            None => Ok(Vec::new()),
        }
    }

    async fn recipe(&self, id: i32) -> Result<RecipeDetail, ApiError> {
        self.recipe_calls.fetch_add(1, Ordering::SeqCst);
        match self.recipes.get(&id) {
            Some(Ok(recipe)) => Ok(recipe.clone()),
            Some(Err(failure)) => Err(failure.to_error()),
            None => Err(ApiError::Status(404)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: i32, title: &str) -> RecipeSummary {
        RecipeSummary {
            id,
            title: title.to_string(),
            image: None,
        }
    }

    #[tokio::test]
    async fn test_search_matches_case_insensitively() {
        let api = MockRecipeApi::new().with_search("Chicken", vec![summary(1, "Chicken Curry")]);
        let results = api.search("chicken", 10).await.unwrap();
        assert_eq!(results, vec![summary(1, "Chicken Curry")]);
        assert_eq!(api.search_calls(), 1);
    }

    #[tokio::test]
    async fn test_search_respects_number() {
        let api = MockRecipeApi::new().with_search(
            "soup",
            vec![summary(1, "A"), summary(2, "B"), summary(3, "C")],
        );
        assert_eq!(api.search("soup", 2).await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_search_status_error() {
        let api = MockRecipeApi::new().with_search_status("fail", 402);
        let result = api.search("fail", 10).await;
        assert!(matches!(result, Err(ApiError::Status(402))));
    }

    #[tokio::test]
    async fn test_malformed_recipe() {
        let api = MockRecipeApi::new().with_recipe_malformed(5);
        let result = api.recipe(5).await;
        assert!(matches!(result, Err(ApiError::Decode(_))));
        assert!(!result.unwrap_err().is_status());
    }

    #[tokio::test]
    async fn test_unknown_recipe_is_not_found() {
        let api = MockRecipeApi::new();
        let result = api.recipe(99).await;
        assert!(matches!(result, Err(ApiError::Status(404))));
        assert_eq!(api.recipe_calls(), 1);
    }
}
