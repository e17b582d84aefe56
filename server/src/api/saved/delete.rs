use crate::api::{ErrorResponse, MessageResponse};
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::SavedRecipe;
use crate::schema::saved_recipes;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use std::sync::Arc;

#[utoipa::path(
    method(post, delete),
    path = "/delete_saved_recipe/{id}",
    tag = "saved",
    params(
        ("id" = i32, Path, description = "Saved-entry ID")
    ),
    responses(
        (status = 200, description = "Removed from saved list", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Saved by another user", body = ErrorResponse),
        (status = 404, description = "Saved recipe not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_saved_recipe(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let saved: SavedRecipe = match saved_recipes::table
        .find(id)
        .select(SavedRecipe::as_select())
        .first(&mut conn)
    {
        Ok(s) => s,
        Err(diesel::NotFound) => {
            return (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse {
                    error: "Saved recipe not found".to_string(),
                }),
            )
                .into_response()
        }
        Err(e) => {
            tracing::error!("Failed to fetch saved recipe: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to delete saved recipe".to_string(),
                }),
            )
                .into_response();
        }
    };

    if saved.user_id != user.id {
        tracing::warn!(saved_id = id, user_id = user.id, "rejected delete of another user's saved recipe");
        return (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                error: "You do not have permission to delete this recipe.".to_string(),
            }),
        )
            .into_response();
    }

    if let Err(e) = diesel::delete(
        saved_recipes::table
            .filter(saved_recipes::id.eq(id))
            .filter(saved_recipes::user_id.eq(user.id)),
    )
    .execute(&mut conn)
    {
        tracing::error!("Failed to delete saved recipe: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse {
                error: "Failed to delete saved recipe".to_string(),
            }),
        )
            .into_response();
    }

    (
        StatusCode::OK,
        Json(MessageResponse {
            message: "Recipe removed from your saved list!".to_string(),
        }),
    )
        .into_response()
}
