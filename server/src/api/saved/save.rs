use crate::api::ErrorResponse;
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::{NewRecipe, NewSavedRecipe};
use crate::schema::{recipes, saved_recipes};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use larder_core::RecipeSource;
use serde::Serialize;
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SaveRecipeResponse {
    /// Saved-entry id, used to remove it later
    pub id: i32,
    pub recipe_id: i32,
    pub message: String,
}

#[utoipa::path(
    method(get, post),
    path = "/save_recipe/{id}",
    tag = "saved",
    params(
        ("id" = i32, Path, description = "External recipe ID")
    ),
    responses(
        (status = 201, description = "Recipe saved", body = SaveRecipeResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 409, description = "Recipe already saved", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn save_recipe(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    State(recipes): State<RecipeSource>,
    Path(recipe_id): Path<i32>,
) -> impl IntoResponse {
    let existing = {
        let mut conn = get_conn!(pool);
        recipes::table
            .find(recipe_id)
            .select(recipes::id)
            .first::<i32>(&mut conn)
            .optional()
    };

    let exists = match existing {
        Ok(record) => record.is_some(),
        Err(e) => {
            tracing::error!("Failed to look up recipe: {}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to save recipe".to_string(),
                }),
            )
                .into_response();
        }
    };

    // First save of this recipe by anyone: copy it from the API.
    let detail = if exists {
        None
    } else {
        match recipes.detail(recipe_id).await {
            Ok(d) => Some(d),
            Err(e) => {
                tracing::warn!(recipe_id, "Could not fetch recipe to save: {}", e);
                return (
                    StatusCode::NOT_FOUND,
                    Json(ErrorResponse {
                        error: "Recipe not found".to_string(),
                    }),
                )
                    .into_response();
            }
        }
    };

    let mut conn = get_conn!(pool);

    let result: Result<i32, DieselError> = conn.transaction(|conn| {
        if let Some(detail) = &detail {
            let ingredients = detail.flattened_ingredients();
            let instructions = detail.instructions_text();
            let new_recipe = NewRecipe {
                id: recipe_id,
                title: &detail.title,
                ingredients: &ingredients,
                instructions: &instructions,
                image: detail.image.as_deref(),
                user_id: user.id,
            };

            // Another request may have copied it meanwhile; either row will do.
            diesel::insert_or_ignore_into(recipes::table)
                .values(&new_recipe)
                .execute(conn)?;
        }

        diesel::insert_into(saved_recipes::table)
            .values(&NewSavedRecipe {
                user_id: user.id,
                recipe_id,
            })
            .returning(saved_recipes::id)
            .get_result(conn)
    });

    match result {
        Ok(id) => (
            StatusCode::CREATED,
            Json(SaveRecipeResponse {
                id,
                recipe_id,
                message: "Recipe saved!".to_string(),
            }),
        )
            .into_response(),
        Err(DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _)) => (
            StatusCode::CONFLICT,
            Json(ErrorResponse {
                error: "Recipe already saved!".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to save recipe: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to save recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
