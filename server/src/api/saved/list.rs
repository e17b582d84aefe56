use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{Recipe, SavedRecipe};
use crate::schema::{recipes, saved_recipes};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SavedRecipeItem {
    /// Saved-entry id
    pub id: i32,
    pub recipe_id: i32,
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    pub image: Option<String>,
    pub saved_at: NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SavedRecipesResponse {
    pub saved_recipes: Vec<SavedRecipeItem>,
}

#[utoipa::path(
    get,
    path = "/saved_recipes",
    tag = "saved",
    responses(
        (status = 200, description = "Saved recipes, newest first", body = SavedRecipesResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_saved_recipes(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let rows: Vec<(SavedRecipe, Recipe)> = match saved_recipes::table
        .inner_join(recipes::table)
        .filter(saved_recipes::user_id.eq(user.id))
        .order(saved_recipes::id.desc())
        .select((SavedRecipe::as_select(), Recipe::as_select()))
        .load(&mut conn)
    {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to load saved recipes: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to load saved recipes".to_string(),
                }),
            )
                .into_response();
        }
    };

    let saved_recipes = rows
        .into_iter()
        .map(|(saved, recipe)| SavedRecipeItem {
            id: saved.id,
            recipe_id: recipe.id,
            title: recipe.title,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            image: recipe.image,
            saved_at: saved.created_at,
        })
        .collect();

    (StatusCode::OK, Json(SavedRecipesResponse { saved_recipes })).into_response()
}
