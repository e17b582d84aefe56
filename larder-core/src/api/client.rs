use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

use super::RecipeApi;
use crate::error::ApiError;
use crate::types::{RecipeDetail, RecipeSummary, SearchResults};

pub const DEFAULT_BASE_URL: &str = "https://api.spoonacular.com";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
const USER_AGENT: &str = "Larder/0.1";

/// Configuration for SpoonacularClient.
#[derive(Clone)]
pub struct SpoonacularClientBuilder {
    api_key: String,
    base_url: String,
    timeout: Duration,
}

impl SpoonacularClientBuilder {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Override the API origin, e.g. for a local stub server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Per-request timeout covering connect and body.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn build(self) -> Result<SpoonacularClient, reqwest::Error> {
        let inner = reqwest::Client::builder()
            .timeout(self.timeout)
            .user_agent(USER_AGENT)
            .build()?;

        Ok(SpoonacularClient {
            inner: Arc::new(inner),
            api_key: self.api_key,
            base_url: self.base_url.trim_end_matches('/').to_string(),
        })
    }
}

/// Production client for the Spoonacular recipe API.
///
/// Every call is a single GET; any status other than 200 is reported as
/// [`ApiError::Status`] and never retried.
pub struct SpoonacularClient {
    inner: Arc<reqwest::Client>,
    api_key: String,
    base_url: String,
}

impl SpoonacularClient {
    pub fn builder(api_key: impl Into<String>) -> SpoonacularClientBuilder {
        SpoonacularClientBuilder::new(api_key)
    }

    fn search_url(&self, query: &str, number: u32) -> Result<Url, ApiError> {
        let mut url = Url::parse(&format!("{}/recipes/complexSearch", self.base_url))
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("number", &number.to_string())
            .append_pair("apiKey", &self.api_key);
        Ok(url)
    }

    fn recipe_url(&self, id: i32) -> Result<Url, ApiError> {
        let mut url = Url::parse(&format!("{}/recipes/{}/information", self.base_url, id))
            .map_err(|e| ApiError::InvalidUrl(e.to_string()))?;
        url.query_pairs_mut().append_pair("apiKey", &self.api_key);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        // Log the path only; the query string carries the API key.
        let path = url.path().to_string();

        tracing::debug!(path = %path, "recipe api: request");
        let response = self.inner.get(url).send().await?;

        if response.status() != reqwest::StatusCode::OK {
            tracing::warn!(path = %path, status = %response.status(), "recipe api: request failed");
            return Err(ApiError::Status(response.status().as_u16()));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[async_trait]
impl RecipeApi for SpoonacularClient {
    async fn search(&self, query: &str, number: u32) -> Result<Vec<RecipeSummary>, ApiError> {
        let url = self.search_url(query, number)?;
        let body: SearchResults = self.get_json(url).await?;
        Ok(body.results)
    }

    async fn recipe(&self, id: i32) -> Result<RecipeDetail, ApiError> {
        let url = self.recipe_url(id)?;
        self.get_json(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn client(base_url: &str) -> SpoonacularClient {
        SpoonacularClient::builder("secret-key")
            .base_url(base_url)
            .build()
            .unwrap()
    }

    #[test]
    fn test_search_url_carries_query_count_and_key() {
        let url = client("https://api.example.com")
            .search_url("chicken curry", 5)
            .unwrap();

        assert_eq!(url.path(), "/recipes/complexSearch");
        let pairs: HashMap<String, String> = url.query_pairs().into_owned().collect();
        assert_eq!(pairs["query"], "chicken curry");
        assert_eq!(pairs["number"], "5");
        assert_eq!(pairs["apiKey"], "secret-key");
    }

    #[test]
    fn test_recipe_url() {
        let url = client("https://api.example.com/").recipe_url(42).unwrap();
        assert_eq!(url.path(), "/recipes/42/information");
        assert_eq!(url.query(), Some("apiKey=secret-key"));
    }

    #[test]
    fn test_invalid_base_url() {
        let result = client("not a url").search_url("x", 1);
        assert!(matches!(result, Err(ApiError::InvalidUrl(_))));
    }
}
