#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use larder_core::{IngredientLine, MockRecipeApi, RecipeCache, RecipeDetail, RecipeSource};
use larder_server::db::{self, DbPool};
use larder_server::state::SessionSecret;
use larder_server::{build_router, AppState};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

pub const PASSWORD: &str = "Test1234!";
pub const SECRET: &str = "test-secret";

/// Router over a private in-memory database and a mock recipe API.
pub struct TestApp {
    pub router: Router,
    pub pool: Arc<DbPool>,
    pub api: Arc<MockRecipeApi>,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_api(MockRecipeApi::new())
    }

    pub fn with_api(api: MockRecipeApi) -> Self {
        std::env::set_var("INSECURE_PASSWORD_HASHING", "1");

        let pool = db::create_pool(db::IN_MEMORY).expect("Failed to create test pool");
        let api = Arc::new(api);
        let recipes = RecipeSource::new(api.clone(), RecipeCache::default());
        let state = AppState::new(pool, recipes, SessionSecret::new(SECRET));
        let pool = state.pool.clone();

        Self {
            router: build_router(state),
            pool,
            api,
        }
    }

    pub async fn request(
        &self,
        method: Method,
        uri: &str,
        token: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
        }
        let body = match body {
            Some(value) => {
                builder = builder.header(header::CONTENT_TYPE, "application/json");
                Body::from(serde_json::to_vec(&value).unwrap())
            }
            None => Body::empty(),
        };

        let response = self
            .router
            .clone()
            .oneshot(builder.body(body).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        (status, value)
    }

    pub async fn get(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::GET, uri, token, None).await
    }

    pub async fn post(&self, uri: &str, token: Option<&str>, body: Value) -> (StatusCode, Value) {
        self.request(Method::POST, uri, token, Some(body)).await
    }

    pub async fn post_empty(&self, uri: &str, token: Option<&str>) -> (StatusCode, Value) {
        self.request(Method::POST, uri, token, None).await
    }

    /// Register a user and return (user_id, token).
    pub async fn register(&self, username: &str, email: &str) -> (i64, String) {
        let (status, body) = self
            .post(
                "/register",
                None,
                json!({
                    "username": username,
                    "email": email,
                    "password": PASSWORD,
                    "confirm_password": PASSWORD,
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "register failed: {}", body);
        (
            body["user_id"].as_i64().unwrap(),
            body["token"].as_str().unwrap().to_string(),
        )
    }

    pub async fn create_recipe(&self, token: &str, title: &str) -> i64 {
        let (status, body) = self
            .post(
                "/create_recipe",
                Some(token),
                json!({
                    "title": title,
                    "ingredients": "Eggs, Milk, Salt",
                    "instructions": "Mix it all",
                    "image_url": "https://example.com/recipe_image.jpg",
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {}", body);
        body["id"].as_i64().unwrap()
    }
}

pub fn recipe_detail(id: i32, title: &str) -> RecipeDetail {
    RecipeDetail {
        id,
        title: title.to_string(),
        image: Some(format!("https://img.example.com/{}.jpg", id)),
        extended_ingredients: vec![
            IngredientLine {
                original: "Chicken".to_string(),
            },
            IngredientLine {
                original: "Salt".to_string(),
            },
        ],
        instructions: Some("Cook it".to_string()),
        ready_in_minutes: Some(30),
        servings: Some(2),
        source_url: None,
    }
}
