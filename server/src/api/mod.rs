pub mod my_recipes;
pub mod public;
pub mod saved;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use larder_core::ValidationErrors;
use serde::Serialize;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{OpenApi, ToSchema};

/// Shared error response used by all endpoints
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Plain confirmation, e.g. after a delete.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FieldErrorResponse {
    pub field: String,
    pub message: String,
}

/// Form validation failure. `error` repeats the first field message.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ValidationErrorResponse {
    pub error: String,
    pub errors: Vec<FieldErrorResponse>,
}

impl From<ValidationErrors> for ValidationErrorResponse {
    fn from(errors: ValidationErrors) -> Self {
        Self {
            error: errors.to_string(),
            errors: errors
                .errors()
                .iter()
                .map(|e| FieldErrorResponse {
                    field: e.field.to_string(),
                    message: e.message.clone(),
                })
                .collect(),
        }
    }
}

pub fn validation_failed(errors: ValidationErrors) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ValidationErrorResponse::from(errors)),
    )
        .into_response()
}

/// Generate the complete OpenAPI spec by merging all module specs
pub fn openapi() -> utoipa::openapi::OpenApi {
    #[derive(OpenApi)]
    #[openapi(components(schemas(
        ErrorResponse,
        MessageResponse,
        FieldErrorResponse,
        ValidationErrorResponse
    )))]
    struct BaseApi;

    let mut spec = BaseApi::openapi();

    if let Some(components) = spec.components.as_mut() {
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }

    let modules: Vec<utoipa::openapi::OpenApi> = vec![
        public::ApiDoc::openapi(),
        saved::ApiDoc::openapi(),
        my_recipes::ApiDoc::openapi(),
    ];

    for module_spec in modules {
        spec.paths.paths.extend(module_spec.paths.paths);

        if let Some(module_components) = module_spec.components {
            if let Some(spec_components) = spec.components.as_mut() {
                spec_components.schemas.extend(module_components.schemas);
            }
        }
    }

    spec
}
