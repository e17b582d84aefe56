//! Process-local cache of recipe details keyed by API recipe id.

use moka::future::Cache;
use std::sync::Arc;
use std::time::Duration;

use crate::types::RecipeDetail;

/// Default lifetime of a cached recipe.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

/// Default upper bound on cached recipes.
pub const DEFAULT_CAPACITY: u64 = 1_000;

/// Recipe details with a fixed time-to-live.
///
/// Entries expire `ttl` after insertion regardless of reads. Cloning is cheap
/// and clones share storage.
#[derive(Clone)]
pub struct RecipeCache {
    inner: Cache<i32, Arc<RecipeDetail>>,
}

impl RecipeCache {
    pub fn new(ttl: Duration, max_capacity: u64) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    pub async fn get(&self, id: i32) -> Option<Arc<RecipeDetail>> {
        self.inner.get(&id).await
    }

    pub async fn insert(&self, detail: RecipeDetail) -> Arc<RecipeDetail> {
        let detail = Arc::new(detail);
        self.inner.insert(detail.id, detail.clone()).await;
        detail
    }
}

impl Default for RecipeCache {
    fn default() -> Self {
        Self::new(DEFAULT_TTL, DEFAULT_CAPACITY)
    }
}
