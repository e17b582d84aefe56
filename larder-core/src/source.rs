use std::sync::Arc;

use crate::api::{clamp_result_count, RecipeApi};
use crate::cache::RecipeCache;
use crate::error::ApiError;
use crate::types::{RecipeDetail, RecipeSummary};

/// The recipe API paired with its detail cache.
///
/// Searches always go to the API. Detail lookups are served from the cache
/// when fresh; failures are never cached.
#[derive(Clone)]
pub struct RecipeSource {
    api: Arc<dyn RecipeApi>,
    cache: RecipeCache,
}

impl RecipeSource {
    pub fn new(api: Arc<dyn RecipeApi>, cache: RecipeCache) -> Self {
        Self { api, cache }
    }

    pub async fn search(
        &self,
        query: &str,
        number: Option<u32>,
    ) -> Result<Vec<RecipeSummary>, ApiError> {
        self.api
            .search(query.trim(), clamp_result_count(number))
            .await
    }

    pub async fn detail(&self, id: i32) -> Result<Arc<RecipeDetail>, ApiError> {
        if let Some(hit) = self.cache.get(id).await {
            tracing::debug!(recipe_id = id, "recipe cache hit");
            return Ok(hit);
        }

        tracing::debug!(recipe_id = id, "recipe cache miss");
        let detail = self.api.recipe(id).await?;
        Ok(self.cache.insert(detail).await)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::MockRecipeApi;
    use crate::types::RecipeDetail;

    fn detail(id: i32) -> RecipeDetail {
        RecipeDetail {
            id,
            title: "Grilled Chicken".to_string(),
            image: None,
            extended_ingredients: Vec::new(),
            instructions: Some("Grill it".to_string()),
            ready_in_minutes: None,
            servings: None,
            source_url: None,
        }
    }

    #[tokio::test]
    async fn test_detail_is_cached() {
        let api = Arc::new(MockRecipeApi::new().with_recipe(detail(2)));
        let source = RecipeSource::new(api.clone(), RecipeCache::default());

        let first = source.detail(2).await.unwrap();
        let second = source.detail(2).await.unwrap();

        assert_eq!(first.title, second.title);
        assert_eq!(api.recipe_calls(), 1);
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let api = Arc::new(MockRecipeApi::new().with_recipe_status(9, 500));
        let source = RecipeSource::new(api.clone(), RecipeCache::default());

        assert!(source.detail(9).await.is_err());
        assert!(source.detail(9).await.is_err());
        assert_eq!(api.recipe_calls(), 2);
    }

    #[tokio::test]
    async fn test_search_trims_query() {
        let api = Arc::new(MockRecipeApi::new().with_search(
            "chicken",
            vec![RecipeSummary {
                id: 1,
                title: "Chicken Curry".to_string(),
                image: None,
            }],
        ));
        let source = RecipeSource::new(api.clone(), RecipeCache::default());

        let results = source.search("  chicken ", None).await.unwrap();
        assert_eq!(results.len(), 1);
    }
}
