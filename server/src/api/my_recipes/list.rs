use super::get::UserRecipeResponse;
use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::UserRecipe;
use crate::schema::user_recipes;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MyRecipesResponse {
    pub recipes: Vec<UserRecipeResponse>,
}

#[utoipa::path(
    get,
    path = "/my_recipes",
    tag = "my_recipes",
    responses(
        (status = 200, description = "Recipes authored by the caller, newest first", body = MyRecipesResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_my_recipes(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let recipes: Vec<UserRecipe> = match user_recipes::table
        .filter(user_recipes::user_id.eq(user.id))
        .order(user_recipes::id.desc())
        .select(UserRecipe::as_select())
        .load(&mut conn)
    {
        Ok(r) => r,
        Err(e) => {
            tracing::error!("Failed to load recipes: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to load recipes".to_string(),
                }),
            )
                .into_response();
        }
    };

    (
        StatusCode::OK,
        Json(MyRecipesResponse {
            recipes: recipes.into_iter().map(UserRecipeResponse::from).collect(),
        }),
    )
        .into_response()
}
