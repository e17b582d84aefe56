use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::UserRecipe;
use crate::schema::user_recipes;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use chrono::NaiveDateTime;
use diesel::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserRecipeResponse {
    pub id: i32,
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    pub image_url: String,
    pub created_at: NaiveDateTime,
}

impl From<UserRecipe> for UserRecipeResponse {
    fn from(recipe: UserRecipe) -> Self {
        Self {
            id: recipe.id,
            title: recipe.title,
            ingredients: recipe.ingredients,
            instructions: recipe.instructions,
            image_url: recipe.image_url,
            created_at: recipe.created_at,
        }
    }
}

#[utoipa::path(
    get,
    path = "/my_recipe/{id}",
    tag = "my_recipes",
    params(
        ("id" = i32, Path, description = "User recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe details", body = UserRecipeResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Owned by another user", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_my_recipe(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let recipe: UserRecipe = match user_recipes::table
        .find(id)
        .select(UserRecipe::as_select())
        .first(&mut conn)
    {
        Ok(r) => r,
        Err(diesel::NotFound) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Recipe not found".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to fetch recipe: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to fetch recipe".to_string(),
                }),
            )
                .into_response();
        }
    };

    if recipe.user_id != user.id {
        return (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                error: "You do not have permission to view this recipe.".to_string(),
            }),
        )
            .into_response();
    }

    (StatusCode::OK, Json(UserRecipeResponse::from(recipe))).into_response()
}
