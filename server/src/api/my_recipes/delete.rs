use crate::api::{ErrorResponse, MessageResponse};
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::schema::user_recipes;
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
    path = "/delete_my_recipe/{id}",
    tag = "my_recipes",
    params(
        ("id" = i32, Path, description = "User recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe deleted", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 403, description = "Owned by another user", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_my_recipe(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    let mut conn = get_conn!(pool);

    let owner: i32 = match user_recipes::table
        .find(id)
        .select(user_recipes::user_id)
        .first::<i32>(&mut conn)
    {
        Ok(o) => o,
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
                    error: "Failed to delete recipe".to_string(),
                }),
            )
                .into_response();
        }
    };

    if owner != user.id {
        tracing::warn!(recipe_id = id, user_id = user.id, "rejected delete of another user's recipe");
        return (
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                error: "You do not have permission to delete this recipe.".to_string(),
            }),
        )
            .into_response();
    }

    match diesel::delete(
        user_recipes::table
            .filter(user_recipes::id.eq(id))
            .filter(user_recipes::user_id.eq(user.id)),
    )
    .execute(&mut conn)
    {
        Ok(_) => (
            StatusCode::OK,
            Json(MessageResponse {
                message: "Your recipe has been deleted!".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to delete recipe: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to delete recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
