use crate::api::ErrorResponse;
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use larder_core::{RecipeDetail, RecipeSource};
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RecipeDetailResponse {
    pub id: i32,
    pub title: String,
    pub image: Option<String>,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub ready_in_minutes: Option<u32>,
    pub servings: Option<u32>,
    pub source_url: Option<String>,
}

impl From<&RecipeDetail> for RecipeDetailResponse {
    fn from(detail: &RecipeDetail) -> Self {
        Self {
            id: detail.id,
            title: detail.title.clone(),
            image: detail.image.clone(),
            ingredients: detail.ingredient_lines(),
            instructions: detail.instructions_text(),
            ready_in_minutes: detail.ready_in_minutes,
            servings: detail.servings,
            source_url: detail.source_url.clone(),
        }
    }
}

#[utoipa::path(
    get,
    path = "/recipe/{id}",
    tag = "search",
    params(
        ("id" = i32, Path, description = "External recipe ID")
    ),
    responses(
        (status = 200, description = "Recipe details", body = RecipeDetailResponse),
        (status = 404, description = "Recipe not found", body = ErrorResponse),
        (status = 502, description = "Recipe API unreachable", body = ErrorResponse)
    )
)]
pub async fn get_recipe(
    State(recipes): State<RecipeSource>,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    match recipes.detail(id).await {
        Ok(detail) => (
            StatusCode::OK,
            Json(RecipeDetailResponse::from(detail.as_ref())),
        )
            .into_response(),
        Err(e) if e.is_status() => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "Recipe not found".to_string(),
            }),
        )
            .into_response(),
        Err(e) => {
            tracing::warn!("Recipe lookup failed: {}", e);
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "Error fetching recipe details. Please try again.".to_string(),
                }),
            )
                .into_response()
        }
    }
}
