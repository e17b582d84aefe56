pub mod delete;
pub mod list;
pub mod save;

use crate::AppState;
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

/// Returns the router for saved-recipe endpoints (auth required)
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/save_recipe/{id}",
            post(save::save_recipe).get(save::save_recipe),
        )
        .route("/saved_recipes", get(list::list_saved_recipes))
        .route(
            "/delete_saved_recipe/{id}",
            post(delete::delete_saved_recipe).delete(delete::delete_saved_recipe),
        )
}

#[derive(OpenApi)]
#[openapi(
    paths(
        save::save_recipe,
        list::list_saved_recipes,
        delete::delete_saved_recipe,
    ),
    components(schemas(
        save::SaveRecipeResponse,
        list::SavedRecipesResponse,
        list::SavedRecipeItem,
    ))
)]
pub struct ApiDoc;
