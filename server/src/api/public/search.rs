use crate::api::ErrorResponse;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use larder_core::{RecipeSource, RecipeSummary};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct SearchRequest {
    /// Free-text search term
    pub search_query: Option<String>,
    /// Number of results, 1-100 (default 10)
    pub number: Option<u32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchResultItem {
    pub id: i32,
    pub title: String,
    pub image: Option<String>,
}

impl From<RecipeSummary> for SearchResultItem {
    fn from(summary: RecipeSummary) -> Self {
        Self {
            id: summary.id,
            title: summary.title,
            image: summary.image,
        }
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SearchResponse {
    pub query: Option<String>,
    pub message: Option<String>,
    pub results: Vec<SearchResultItem>,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "search",
    params(SearchRequest),
    responses(
        (status = 200, description = "Search results (empty without a query)", body = SearchResponse),
        (status = 400, description = "Blank search term", body = ErrorResponse),
        (status = 502, description = "Recipe API failed", body = ErrorResponse)
    )
)]
pub async fn search(
    State(recipes): State<RecipeSource>,
    Query(params): Query<SearchRequest>,
) -> impl IntoResponse {
    run_search(&recipes, params).await
}

#[utoipa::path(
    post,
    path = "/",
    tag = "search",
    request_body(content = SearchRequest, example = json!({"search_query": "chicken"})),
    responses(
        (status = 200, description = "Search results", body = SearchResponse),
        (status = 400, description = "Blank search term", body = ErrorResponse),
        (status = 502, description = "Recipe API failed", body = ErrorResponse)
    )
)]
pub async fn search_form(
    State(recipes): State<RecipeSource>,
    Json(params): Json<SearchRequest>,
) -> impl IntoResponse {
    let params = SearchRequest {
        search_query: Some(params.search_query.unwrap_or_default()),
        ..params
    };
    run_search(&recipes, params).await
}

async fn run_search(recipes: &RecipeSource, params: SearchRequest) -> Response {
    // A bare GET is the landing page: nothing searched yet.
    let Some(query) = params.search_query else {
        return (
            StatusCode::OK,
            Json(SearchResponse {
                query: None,
                message: None,
                results: Vec::new(),
            }),
        )
            .into_response();
    };

    let query = query.trim().to_string();
    if query.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: "Please enter a search term.".to_string(),
            }),
        )
            .into_response();
    }

    let results = match recipes.search(&query, params.number).await {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!("Recipe search failed: {}", e);
            return (
                StatusCode::BAD_GATEWAY,
                Json(ErrorResponse {
                    error: "Error fetching recipes. Please try again.".to_string(),
                }),
            )
                .into_response();
        }
    };

    (
        StatusCode::OK,
        Json(SearchResponse {
            message: Some(format!("Results for \"{}\"", query)),
            query: Some(query),
            results: results.into_iter().map(SearchResultItem::from).collect(),
        }),
    )
        .into_response()
}
