pub mod auth;
pub mod recipe;
pub mod search;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for public endpoints (no auth required)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(search::search).post(search::search_form))
        .route("/recipe/{id}", get(recipe::get_recipe))
        .route("/register", post(auth::register::register))
        .route("/login", post(auth::login::login))
        .route("/logout", get(auth::logout::logout).post(auth::logout::logout))
}

#[derive(OpenApi)]
#[openapi(
    paths(
        auth::register::register,
        auth::login::login,
        auth::logout::logout,
        search::search,
        search::search_form,
        recipe::get_recipe,
    ),
    components(schemas(
        auth::register::RegisterRequest,
        auth::register::RegisterResponse,
        auth::login::LoginRequest,
        auth::login::LoginResponse,
        search::SearchRequest,
        search::SearchResponse,
        search::SearchResultItem,
        recipe::RecipeDetailResponse,
    ))
)]
pub struct ApiDoc;
