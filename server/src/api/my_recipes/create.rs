use crate::api::{validation_failed, ErrorResponse, ValidationErrorResponse};
use crate::auth::AuthUser;
use crate::db::DbPool;
use crate::get_conn;
use crate::models::NewUserRecipe;
use crate::schema::user_recipes;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use diesel::prelude::*;
use larder_core::validation::validate_recipe;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct CreateRecipeRequest {
    pub title: String,
    pub ingredients: String,
    pub instructions: String,
    #[serde(default)]
    pub image_url: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CreateRecipeResponse {
    pub id: i32,
    pub message: String,
}

#[utoipa::path(
    post,
    path = "/create_recipe",
    tag = "my_recipes",
    request_body(content = CreateRecipeRequest, example = json!({
        "title": "My New Recipe",
        "ingredients": "Eggs, Milk, Salt",
        "instructions": "Mix it all",
        "image_url": "https://example.com/recipe_image.jpg"
    })),
    responses(
        (status = 201, description = "Recipe created successfully", body = CreateRecipeResponse),
        (status = 400, description = "Invalid form", body = ValidationErrorResponse),
        (status = 401, description = "Unauthorized", body = ErrorResponse)
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_recipe(
    AuthUser(user): AuthUser,
    State(pool): State<Arc<DbPool>>,
    Json(request): Json<CreateRecipeRequest>,
) -> impl IntoResponse {
    if let Err(errors) = validate_recipe(
        &request.title,
        &request.ingredients,
        &request.instructions,
        &request.image_url,
    ) {
        return validation_failed(errors);
    }

    let mut conn = get_conn!(pool);

    let new_recipe = NewUserRecipe {
        title: request.title.trim(),
        ingredients: request.ingredients.trim(),
        instructions: request.instructions.trim(),
        image_url: request.image_url.trim(),
        user_id: user.id,
    };

    match diesel::insert_into(user_recipes::table)
        .values(&new_recipe)
        .returning(user_recipes::id)
        .get_result::<i32>(&mut conn)
    {
        Ok(id) => (
            StatusCode::CREATED,
            Json(CreateRecipeResponse {
                id,
                message: "Your recipe has been created!".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to create recipe: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to create recipe".to_string(),
                }),
            )
                .into_response()
        }
    }
}
