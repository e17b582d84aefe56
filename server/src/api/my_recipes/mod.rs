pub mod create;
pub mod delete;
pub mod get;
pub mod list;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for user-authored recipe endpoints (auth required)
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/create_recipe", post(create::create_recipe))
        .route("/my_recipes", get(list::list_my_recipes))
        .route("/my_recipe/{id}", get(get::get_my_recipe))
        .route(
            "/delete_my_recipe/{id}",
            post(delete::delete_my_recipe).delete(delete::delete_my_recipe),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        create::create_recipe,
        list::list_my_recipes,
        get::get_my_recipe,
        delete::delete_my_recipe,
    ),
    components(schemas(
        create::CreateRecipeRequest,
        create::CreateRecipeResponse,
        list::MyRecipesResponse,
        get::UserRecipeResponse,
    ))
)]
pub struct ApiDoc;
